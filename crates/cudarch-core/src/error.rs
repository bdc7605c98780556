//! Error types for architecture specifier parsing.

/// Errors produced while decoding architecture specifiers.
#[derive(Debug, thiserror::Error)]
pub enum ArchError {
    /// Token did not match the specifier grammar.
    #[error("unrecognized architecture token: '{token}'")]
    InvalidToken {
        /// The offending token, verbatim.
        token: String,
    },

    /// Token requested a virtual (intermediate-representation) target.
    #[error("virtual architecture '{token}' is not allowed: only real targets are shipped")]
    VirtualTargetDisallowed {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Result type for specifier parsing.
pub type Result<T> = std::result::Result<T, ArchError>;
