//! cudarch CLI — resolve GPU compile architectures for a build configuration.

mod commands;
mod manifest;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cudarch", version, about = "GPU target architecture resolution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the compile architecture list for this configuration
    Resolve {
        /// Architecture specifier (native, all, or an explicit token list)
        #[arg(long)]
        arch: Option<String>,
        /// Explicit compiler path
        #[arg(long)]
        compiler: Option<PathBuf>,
        /// Host compiler override, passed to the compiler via -ccbin
        #[arg(long)]
        host_compiler: Option<PathBuf>,
        /// Output format (human, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Check toolchain availability and version
    Doctor,
    /// Show the static architecture catalog
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Resolve {
            arch,
            compiler,
            host_compiler,
            format,
        } => commands::resolve::run(
            &cwd,
            arch.as_deref(),
            compiler.as_deref(),
            host_compiler.as_deref(),
            format.as_deref(),
        ),
        Commands::Doctor => commands::doctor::run(&cwd),
        Commands::Catalog => commands::catalog::run(),
    }
}
