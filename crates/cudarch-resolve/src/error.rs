//! Resolution pipeline errors.

use thiserror::Error;

/// Fatal conditions that abort the resolution pass with no partial output.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `all-major` would disable architecture-specific optimized kernels.
    #[error(
        "'all-major' is not supported: it would disable architecture-specific optimized kernels"
    )]
    AllMajorUnsupported,

    /// Specifier grammar violation.
    #[error("architecture specifier error: {0}")]
    Arch(#[from] cudarch_core::error::ArchError),

    /// Compiler detection failure.
    #[error("toolchain error: {0}")]
    Toolchain(#[from] cudarch_toolchain::ToolchainError),
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
