//! Toolchain detection and probing errors.

use semver::Version;
use thiserror::Error;

/// Errors from locating or interrogating the GPU compiler.
///
/// The probe variants are downgraded to warnings by the resolver; everything
/// else aborts the resolution pass.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// No usable compiler on the explicit path, `CUDACXX`, or `PATH`.
    #[error("no GPU compiler found (checked explicit path, CUDACXX, and PATH)")]
    CompilerNotFound,

    /// The compiler ran but its output carried no release triple.
    #[error("could not determine compiler version from output: {output:?}")]
    VersionUndeterminable {
        /// The raw version text that failed to parse.
        output: String,
    },

    /// The version query subprocess exited non-zero.
    #[error("version query failed with {status}: {stderr}")]
    VersionQueryFailed {
        /// Exit status of the query.
        status: String,
        /// Captured stderr.
        stderr: String,
    },

    /// Detected version is older than the minimum this project supports.
    #[error("compiler version {detected} is below the minimum supported {required}")]
    VersionBelowMinimum {
        /// The version reported by the compiler.
        detected: Version,
        /// The oldest version the kernel catalog supports.
        required: Version,
    },

    /// The capability probe failed to compile.
    #[error("capability probe failed to compile: {stderr}")]
    ProbeCompileFailed {
        /// Captured compiler stderr.
        stderr: String,
    },

    /// The capability probe executable exited non-zero.
    #[error("capability probe exited with {status}")]
    ProbeRunFailed {
        /// Exit status of the probe run.
        status: String,
    },

    /// I/O error while driving the toolchain.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for toolchain operations.
pub type Result<T> = std::result::Result<T, ToolchainError>;
