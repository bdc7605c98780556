//! `cudarch.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The top-level manifest for a project using cudarch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CudarchManifest {
    /// Toolchain configuration.
    #[serde(default)]
    pub toolchain: Option<ToolchainSection>,
    /// Architecture selection.
    #[serde(default)]
    pub architectures: Option<ArchitecturesSection>,
}

/// `[toolchain]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolchainSection {
    /// Explicit compiler path.
    #[serde(default)]
    pub compiler: Option<PathBuf>,
    /// Host-compiler override, passed to the compiler via `-ccbin`.
    #[serde(default)]
    pub host_compiler: Option<PathBuf>,
}

/// `[architectures]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchitecturesSection {
    /// Requested specifier: `native`, `all`, or an explicit token list.
    #[serde(default)]
    pub spec: Option<String>,
}

impl CudarchManifest {
    /// Search upward from `start_dir` for a `cudarch.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("cudarch.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: CudarchManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing cudarch.toml")
    }

    /// The requested architecture specifier, if any.
    pub fn arch_spec(&self) -> Option<&str> {
        self.architectures.as_ref()?.spec.as_deref()
    }

    /// The configured compiler path, if any.
    pub fn compiler(&self) -> Option<&Path> {
        self.toolchain.as_ref()?.compiler.as_deref()
    }

    /// The configured host-compiler override, if any.
    pub fn host_compiler(&self) -> Option<&Path> {
        self.toolchain.as_ref()?.host_compiler.as_deref()
    }
}
