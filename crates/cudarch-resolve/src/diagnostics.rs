//! Resolution diagnostics.

use serde::Serialize;

/// Severity of a diagnostic emitted during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A non-fatal condition recorded while resolving.
///
/// Fatal conditions travel as errors; diagnostics carry the degrade path
/// (probe fallback, empty-set substitution) to the caller's log stream.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// How serious the condition is.
    pub severity: Severity,
    /// Human-readable description with enough context to act on.
    pub message: String,
}

impl Diagnostic {
    /// Construct a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}
