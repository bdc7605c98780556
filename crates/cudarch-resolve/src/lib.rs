//! Architecture resolution pipeline.
//!
//! Turns a loosely specified architecture request (`native`, `all`, or an
//! explicit list) into an exact, deduplicated, suffix-annotated list of
//! compile targets plus the complementary exclusion set used to gate
//! optional source compilation.

pub mod diagnostics;
pub mod error;
pub mod pipeline;
pub mod report;

pub use diagnostics::{Diagnostic, Severity};
pub use error::{ResolveError, Result};
pub use pipeline::{resolve, resolve_with, ResolveConfig};
pub use report::Resolution;
