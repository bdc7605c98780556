//! CLI subcommand implementations.

pub mod catalog;
pub mod doctor;
pub mod resolve;
