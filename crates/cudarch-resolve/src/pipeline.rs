//! Resolution pipeline orchestrator.

use std::path::PathBuf;

use cudarch_core::arch::{excluded_ids, normalize};
use cudarch_core::defaults::default_architectures;
use cudarch_core::parse::{parse_arch_list, parse_spec, ArchSpec};
use cudarch_toolchain::{
    detect, CapabilityProbe, DeviceQueryProbe, Toolchain, ToolchainConfig,
};

use crate::diagnostics::Diagnostic;
use crate::error::{ResolveError, Result};
use crate::report::Resolution;

/// Raw configuration inputs for one resolution run.
#[derive(Debug, Clone, Default)]
pub struct ResolveConfig {
    /// Requested architecture specifier; empty or missing means the curated
    /// default set.
    pub spec: Option<String>,
    /// Explicit compiler path.
    pub compiler: Option<PathBuf>,
    /// Host-compiler override, preserved across detection retries.
    pub host_compiler: Option<PathBuf>,
}

/// Resolve with production toolchain detection and device probing.
pub fn resolve(config: &ResolveConfig) -> Result<Resolution> {
    let toolchain = detect(&ToolchainConfig {
        compiler: config.compiler.clone(),
        host_compiler: config.host_compiler.clone(),
    })?;
    resolve_with(&toolchain, config.spec.as_deref(), &DeviceQueryProbe)
}

/// Resolve against an already-detected toolchain and a capability probe.
///
/// Dispatch: `native` probes the local device(s) and feeds the captured
/// tokens through the ordinary list parser, falling back to the curated
/// defaults (with a warning) if the probe fails; `all` (or an absent
/// specifier) uses the curated defaults directly; `all-major` is rejected
/// unconditionally; an explicit list goes through the token grammar. A run
/// never produces an empty target list: an empty outcome is substituted
/// with the curated defaults and flagged.
pub fn resolve_with(
    toolchain: &Toolchain,
    spec: Option<&str>,
    probe: &dyn CapabilityProbe,
) -> Result<Resolution> {
    let mut diagnostics = Vec::new();

    let mut ids = match parse_spec(spec) {
        ArchSpec::AllMajor => return Err(ResolveError::AllMajorUnsupported),
        ArchSpec::List(tokens) => parse_arch_list(&tokens)?,
        ArchSpec::All => default_architectures(&toolchain.version),
        ArchSpec::Native => match probe.query(toolchain) {
            Ok(text) => parse_arch_list(&text)?,
            Err(cause) => {
                diagnostics.push(Diagnostic::warning(format!(
                    "no native capability determined ({cause}); using curated defaults"
                )));
                default_architectures(&toolchain.version)
            }
        },
    };

    if ids.is_empty() {
        diagnostics.push(Diagnostic::warning(
            "resolved architecture set is empty; using curated defaults",
        ));
        ids = default_architectures(&toolchain.version);
    }

    let architectures = normalize(&ids);
    let excluded = excluded_ids(&ids);

    Ok(Resolution {
        toolchain_version: toolchain.version.clone(),
        requested: ids,
        architectures,
        excluded,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use cudarch_core::arch::NormalizedArchitecture;
    use cudarch_core::version::{version, ToolchainVersion};
    use cudarch_toolchain::ToolchainError;

    use crate::diagnostics::Severity;

    fn toolchain(v: ToolchainVersion) -> Toolchain {
        Toolchain {
            compiler: PathBuf::from("nvcc"),
            host_compiler: None,
            version: v,
        }
    }

    /// Probe returning canned output, or a canned failure.
    struct FakeProbe(std::result::Result<&'static str, ()>);

    impl CapabilityProbe for FakeProbe {
        fn query(&self, _toolchain: &Toolchain) -> cudarch_toolchain::Result<String> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(ToolchainError::ProbeRunFailed {
                    status: "exit status: 1".to_string(),
                }),
            }
        }
    }

    #[test]
    fn explicit_list_dedups_and_normalizes() {
        let resolution = resolve_with(
            &toolchain(version(12, 3, 0)),
            Some("90,90a,90-real"),
            &FakeProbe(Ok("")),
        )
        .unwrap();

        assert_eq!(resolution.requested, vec![90]);
        assert_eq!(
            resolution.architectures,
            vec![NormalizedArchitecture { id: 90, accelerated: true }]
        );
        assert_eq!(resolution.excluded, vec![80, 86, 89, 100, 120]);
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn all_uses_curated_defaults() {
        let resolution =
            resolve_with(&toolchain(version(11, 9, 0)), Some("all"), &FakeProbe(Ok("")))
                .unwrap();
        assert_eq!(resolution.requested, vec![80, 86, 89, 90]);
        assert_eq!(resolution.excluded, vec![100, 120]);
    }

    #[test]
    fn unspecified_means_all() {
        let resolution =
            resolve_with(&toolchain(version(11, 5, 0)), None, &FakeProbe(Ok(""))).unwrap();
        assert_eq!(resolution.requested, vec![80, 86]);
    }

    #[test]
    fn all_major_is_fatal() {
        let err = resolve_with(
            &toolchain(version(12, 8, 0)),
            Some("all-major"),
            &FakeProbe(Ok("")),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::AllMajorUnsupported));
    }

    #[test]
    fn virtual_token_is_fatal() {
        let err = resolve_with(
            &toolchain(version(12, 3, 0)),
            Some("90-virtual"),
            &FakeProbe(Ok("")),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::Arch(_)));
    }

    #[test]
    fn native_success_feeds_token_parser() {
        let resolution = resolve_with(
            &toolchain(version(12, 3, 0)),
            Some("native"),
            &FakeProbe(Ok("86\n90\n")),
        )
        .unwrap();
        assert_eq!(resolution.requested, vec![86, 90]);
        assert_eq!(
            resolution.architectures,
            vec![
                NormalizedArchitecture { id: 86, accelerated: false },
                NormalizedArchitecture { id: 90, accelerated: true },
            ]
        );
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn native_failure_degrades_to_defaults() {
        let resolution = resolve_with(
            &toolchain(version(11, 9, 0)),
            Some("native"),
            &FakeProbe(Err(())),
        )
        .unwrap();

        assert_eq!(resolution.requested, vec![80, 86, 89, 90]);
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.diagnostics[0].severity, Severity::Warning);
        assert!(resolution.diagnostics[0]
            .message
            .contains("no native capability determined"));
    }

    #[test]
    fn native_empty_output_hits_safeguard() {
        let resolution = resolve_with(
            &toolchain(version(11, 9, 0)),
            Some("native"),
            &FakeProbe(Ok("")),
        )
        .unwrap();

        assert_eq!(resolution.requested, vec![80, 86, 89, 90]);
        assert!(resolution
            .diagnostics
            .iter()
            .any(|d| d.message.contains("empty")));
    }

    #[test]
    fn empty_list_hits_safeguard() {
        let resolution = resolve_with(
            &toolchain(version(11, 5, 0)),
            Some(" ; , "),
            &FakeProbe(Ok("")),
        )
        .unwrap();
        assert_eq!(resolution.requested, vec![80, 86]);
        assert_eq!(resolution.diagnostics.len(), 1);
    }

    #[test]
    fn resolved_ids_outside_catalog_keep_full_exclusion() {
        let resolution = resolve_with(
            &toolchain(version(12, 3, 0)),
            Some("75"),
            &FakeProbe(Ok("")),
        )
        .unwrap();
        assert_eq!(resolution.requested, vec![75]);
        assert_eq!(resolution.excluded, vec![80, 86, 89, 90, 100, 120]);
        assert!(!resolution.architectures[0].accelerated);
    }
}
