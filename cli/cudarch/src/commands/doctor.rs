//! `cudarch doctor` — toolchain diagnostics.

use std::path::Path;

use anyhow::Result;
use cudarch_core::defaults::default_architectures;
use cudarch_toolchain::{detect, minimum_supported, ToolchainConfig};

use crate::manifest::CudarchManifest;

/// Print toolchain diagnostic information.
pub fn run(cwd: &Path) -> Result<()> {
    println!("=== cudarch Doctor ===");
    println!();
    println!("cudarch version: {}", env!("CARGO_PKG_VERSION"));
    println!("Minimum supported compiler: {}", minimum_supported());
    println!();

    println!("--- Project Status ---");
    let manifest = match CudarchManifest::find_and_load(cwd) {
        Ok(Some((manifest, dir))) => {
            println!("  cudarch.toml: found at {}", dir.display());
            if let Some(spec) = manifest.arch_spec() {
                println!("  Architectures: {spec}");
            }
            Some(manifest)
        }
        Ok(None) => {
            println!("  cudarch.toml: not found");
            None
        }
        Err(e) => {
            println!("  cudarch.toml: error — {e}");
            None
        }
    };
    println!();

    println!("--- Toolchain ---");
    let config = ToolchainConfig {
        compiler: manifest
            .as_ref()
            .and_then(|m| m.compiler())
            .map(Path::to_path_buf),
        host_compiler: manifest
            .as_ref()
            .and_then(|m| m.host_compiler())
            .map(Path::to_path_buf),
    };
    match detect(&config) {
        Ok(toolchain) => {
            println!("  compiler: {}", toolchain.compiler.display());
            println!("  version:  {}", toolchain.version);
            let defaults: Vec<String> = default_architectures(&toolchain.version)
                .iter()
                .map(u32::to_string)
                .collect();
            println!("  curated defaults: {}", defaults.join(" "));
        }
        Err(e) => {
            println!("  compiler: unavailable — {e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path()).unwrap();
    }
}
