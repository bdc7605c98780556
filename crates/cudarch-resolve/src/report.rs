//! Resolution output and its human-readable report.

use std::fmt;

use serde::Serialize;

use cudarch_core::arch::NormalizedArchitecture;
use cudarch_core::version::ToolchainVersion;

use crate::diagnostics::Diagnostic;

/// Output of a resolution run. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Detected toolchain version.
    pub toolchain_version: ToolchainVersion,
    /// Resolved ids before normalization. Diagnostic output only; nothing
    /// downstream computes from it.
    pub requested: Vec<u32>,
    /// Ordered, deduplicated compile targets.
    pub architectures: Vec<NormalizedArchitecture>,
    /// Known-kernel ids not being built, in catalog order. One preprocessor
    /// gate per entry on the consumer side.
    pub excluded: Vec<u32>,
    /// Warnings accumulated along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Architecture Resolution ===")?;
        writeln!(f, "Toolchain version: {}", self.toolchain_version)?;
        writeln!(f, "Requested ids:     {}", join_ids(&self.requested))?;

        let targets: Vec<String> = self
            .architectures
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(f, "Compile targets:   {}", targets.join(" "))?;

        if self.excluded.is_empty() {
            writeln!(f, "Excluded kernels:  (none)")?;
        } else {
            writeln!(f, "Excluded kernels:  {}", join_ids(&self.excluded))?;
        }
        Ok(())
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cudarch_core::arch::normalize;
    use cudarch_core::version::version;

    #[test]
    fn report_renders_all_sections() {
        let resolution = Resolution {
            toolchain_version: version(12, 3, 103),
            requested: vec![90],
            architectures: normalize(&[90]),
            excluded: vec![80, 86, 89, 100, 120],
            diagnostics: Vec::new(),
        };
        let report = resolution.to_string();
        assert!(report.contains("12.3.103"));
        assert!(report.contains("90a-real"));
        assert!(report.contains("80 86 89 100 120"));
    }

    #[test]
    fn report_shows_empty_exclusion() {
        let resolution = Resolution {
            toolchain_version: version(12, 8, 0),
            requested: vec![80, 86, 89, 90, 100, 120],
            architectures: normalize(&[80, 86, 89, 90, 100, 120]),
            excluded: Vec::new(),
            diagnostics: Vec::new(),
        };
        assert!(resolution.to_string().contains("(none)"));
    }
}
