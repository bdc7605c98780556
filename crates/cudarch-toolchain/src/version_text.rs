//! Obtaining and parsing compiler version text.
//!
//! Two host conventions exist for the release triple: Unix hosts filter the
//! `--version` banner through a shell pipeline down to the single
//! `V<major>.<minor>.<patch>` token, while Windows hosts match the triple
//! inside the full banner text. Both feed the same pure parser, so either
//! path can be tested without depending on the host operating system.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use cudarch_core::version::ToolchainVersion;

use crate::error::{Result, ToolchainError};

/// How raw version text is obtained from the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionTextStrategy {
    /// Filter the banner through a `sh -c` pipeline (Unix convention).
    ShellPipeline,
    /// Invoke `--version` directly and scan the full banner (Windows
    /// convention).
    DirectInvocation,
}

impl VersionTextStrategy {
    /// The conventional strategy for the current host platform.
    pub fn host_default() -> Self {
        if cfg!(windows) {
            VersionTextStrategy::DirectInvocation
        } else {
            VersionTextStrategy::ShellPipeline
        }
    }

    /// Run the compiler's version query and return its raw text output.
    ///
    /// A non-zero exit of the query (or of the filtering pipeline) is an
    /// error; an absent compiler maps to `CompilerNotFound`.
    pub fn obtain(&self, compiler: &Path, host_compiler: Option<&Path>) -> Result<String> {
        let output = match self {
            VersionTextStrategy::ShellPipeline => {
                let mut pipeline = format!("'{}' --version", compiler.display());
                if let Some(host) = host_compiler {
                    pipeline.push_str(&format!(" -ccbin '{}'", host.display()));
                }
                pipeline.push_str(" | grep -o 'V[0-9]*\\.[0-9]*\\.[0-9]*'");
                run(Command::new("sh").arg("-c").arg(pipeline))?
            }
            VersionTextStrategy::DirectInvocation => {
                let mut command = Command::new(compiler);
                command.arg("--version");
                if let Some(host) = host_compiler {
                    command.arg("-ccbin").arg(host);
                }
                run(&mut command)?
            }
        };

        if !output.status.success() {
            return Err(ToolchainError::VersionQueryFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn run(command: &mut Command) -> Result<Output> {
    command.output().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ToolchainError::CompilerNotFound,
        _ => ToolchainError::Io(e),
    })
}

/// Extract the release triple from raw version text.
///
/// Scans for a `V` immediately followed by `major.minor.patch` digits and
/// parses the three integer components. Works on both the filtered single
/// token and the full banner.
pub fn parse_release_version(text: &str) -> Result<ToolchainVersion> {
    for (index, _) in text.match_indices('V') {
        let candidate: String = text[index + 1..]
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if let Ok(version) = semver::Version::parse(candidate.trim_end_matches('.')) {
            return Ok(version);
        }
    }
    Err(ToolchainError::VersionUndeterminable {
        output: text.trim().to_string(),
    })
}
