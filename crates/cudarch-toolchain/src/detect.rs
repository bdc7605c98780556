//! Compiler location and version detection.

use std::env;
use std::path::PathBuf;

use cudarch_core::version::{version, ToolchainVersion};

use crate::error::{Result, ToolchainError};
use crate::version_text::{parse_release_version, VersionTextStrategy};

/// Configuration inputs for toolchain detection.
#[derive(Debug, Clone, Default)]
pub struct ToolchainConfig {
    /// Explicit compiler path; wins over environment and `PATH` lookup.
    pub compiler: Option<PathBuf>,
    /// Host-compiler override, preserved across the detection retry.
    pub host_compiler: Option<PathBuf>,
}

/// A located and version-checked compiler.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Resolved compiler executable.
    pub compiler: PathBuf,
    /// Host-compiler override to pass through on every invocation.
    pub host_compiler: Option<PathBuf>,
    /// Detected release version.
    pub version: ToolchainVersion,
}

/// Oldest compiler release the kernel catalog supports.
pub fn minimum_supported() -> ToolchainVersion {
    version(11, 2, 0)
}

/// Locate the compiler and detect its version.
pub fn detect(config: &ToolchainConfig) -> Result<Toolchain> {
    detect_with(config, VersionTextStrategy::host_default())
}

/// Detection with an explicit version-text strategy.
///
/// The first version query runs without the host-compiler override (the
/// probing step discards it); if that attempt fails and an override was
/// supplied, the override is restored and the query retried once before
/// concluding failure.
pub fn detect_with(config: &ToolchainConfig, strategy: VersionTextStrategy) -> Result<Toolchain> {
    let compiler = locate_compiler(config)?;

    let text = match strategy.obtain(&compiler, None) {
        Ok(text) => text,
        Err(_) if config.host_compiler.is_some() => {
            strategy.obtain(&compiler, config.host_compiler.as_deref())?
        }
        Err(e) => return Err(e),
    };

    let detected = parse_release_version(&text)?;
    let required = minimum_supported();
    if detected < required {
        return Err(ToolchainError::VersionBelowMinimum { detected, required });
    }

    Ok(Toolchain {
        compiler,
        host_compiler: config.host_compiler.clone(),
        version: detected,
    })
}

/// Resolve the compiler executable: explicit config path, then the `CUDACXX`
/// environment variable, then a `PATH` search.
fn locate_compiler(config: &ToolchainConfig) -> Result<PathBuf> {
    if let Some(path) = &config.compiler {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(ToolchainError::CompilerNotFound);
    }

    if let Some(env_path) = env::var_os("CUDACXX") {
        let path = PathBuf::from(env_path);
        if path.is_file() {
            return Ok(path);
        }
        return Err(ToolchainError::CompilerNotFound);
    }

    let name = if cfg!(windows) { "nvcc.exe" } else { "nvcc" };
    search_path(name).ok_or(ToolchainError::CompilerNotFound)
}

/// Find an executable by name on `PATH`.
fn search_path(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
