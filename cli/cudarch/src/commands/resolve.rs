//! `cudarch resolve` — run the resolution pipeline and print the result.

use std::path::Path;

use anyhow::{bail, Result};
use cudarch_resolve::{resolve, Resolution, ResolveConfig, Severity};

use crate::manifest::CudarchManifest;

/// Run a resolution and print it in the requested format. CLI flags win
/// over manifest values.
pub fn run(
    cwd: &Path,
    arch: Option<&str>,
    compiler: Option<&Path>,
    host_compiler: Option<&Path>,
    format: Option<&str>,
) -> Result<()> {
    let format = format.unwrap_or("human");
    if !matches!(format, "human" | "json") {
        bail!("unknown output format: '{format}'. Choose: human, json");
    }

    let manifest = CudarchManifest::find_and_load(cwd)?.map(|(m, _)| m);
    let config = merge_config(manifest.as_ref(), arch, compiler, host_compiler);

    let resolution = resolve(&config)?;
    print_diagnostics(&resolution);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&resolution)?),
        _ => print!("{resolution}"),
    }
    Ok(())
}

/// Merge manifest values with CLI flags; flags take precedence.
pub(crate) fn merge_config(
    manifest: Option<&CudarchManifest>,
    arch: Option<&str>,
    compiler: Option<&Path>,
    host_compiler: Option<&Path>,
) -> ResolveConfig {
    ResolveConfig {
        spec: arch
            .or_else(|| manifest.and_then(|m| m.arch_spec()))
            .map(str::to_string),
        compiler: compiler
            .or_else(|| manifest.and_then(|m| m.compiler()))
            .map(Path::to_path_buf),
        host_compiler: host_compiler
            .or_else(|| manifest.and_then(|m| m.host_compiler()))
            .map(Path::to_path_buf),
    }
}

fn print_diagnostics(resolution: &Resolution) {
    for diagnostic in &resolution.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("error: {}", diagnostic.message),
            Severity::Warning => eprintln!("warning: {}", diagnostic.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_manifest() {
        let manifest = CudarchManifest::from_str(
            r#"
[toolchain]
compiler = "/opt/cuda/bin/nvcc"

[architectures]
spec = "all"
"#,
        )
        .unwrap();

        let config = merge_config(
            Some(&manifest),
            Some("90a"),
            None,
            Some(Path::new("/usr/bin/g++")),
        );
        assert_eq!(config.spec.as_deref(), Some("90a"));
        assert_eq!(
            config.compiler.as_deref(),
            Some(Path::new("/opt/cuda/bin/nvcc"))
        );
        assert_eq!(
            config.host_compiler.as_deref(),
            Some(Path::new("/usr/bin/g++"))
        );
    }

    #[test]
    fn no_manifest_no_flags_is_empty_config() {
        let config = merge_config(None, None, None, None);
        assert!(config.spec.is_none());
        assert!(config.compiler.is_none());
        assert!(config.host_compiler.is_none());
    }
}
