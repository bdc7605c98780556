//! Native device capability probing.
//!
//! Invoked only for the `native` specifier: compile a fixed detection
//! program against the resolved compiler, run it, and capture its stdout as
//! the capability token text. Failures here are reported as errors but the
//! resolver downgrades them to a warning and falls back to the curated
//! defaults.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::detect::Toolchain;
use crate::error::{Result, ToolchainError};

/// Source of the fixed detection program. Prints one compute-capability id
/// per visible device.
const DETECT_PROGRAM: &str = r#"#include <cstdio>
#include <cuda_runtime.h>

int main() {
    int count = 0;
    if (cudaGetDeviceCount(&count) != cudaSuccess || count == 0) {
        return 1;
    }
    for (int device = 0; device < count; ++device) {
        cudaDeviceProp prop;
        if (cudaGetDeviceProperties(&prop, device) != cudaSuccess) {
            return 1;
        }
        std::printf("%d%d\n", prop.major, prop.minor);
    }
    return 0;
}
"#;

/// Queries the capabilities of the locally installed device(s).
pub trait CapabilityProbe {
    /// Return raw capability token text, fed to the ordinary token parser
    /// as if the user had typed it.
    fn query(&self, toolchain: &Toolchain) -> Result<String>;
}

/// Production probe: compile the detection program in a scratch directory
/// and run the produced executable.
#[derive(Debug, Default)]
pub struct DeviceQueryProbe;

impl CapabilityProbe for DeviceQueryProbe {
    fn query(&self, toolchain: &Toolchain) -> Result<String> {
        let scratch = tempfile::tempdir()?;
        let source = scratch.path().join("detect_capability.cu");
        let binary = scratch.path().join("detect_capability");
        fs::write(&source, DETECT_PROGRAM)?;

        compile_probe(toolchain, &source, &binary)?;
        run_probe(&binary)
    }
}

fn compile_probe(toolchain: &Toolchain, source: &Path, binary: &Path) -> Result<()> {
    let mut command = Command::new(&toolchain.compiler);
    if let Some(host) = &toolchain.host_compiler {
        command.arg("-ccbin").arg(host);
    }
    command.arg("-o").arg(binary).arg(source);

    let output = command.output()?;
    if !output.status.success() {
        return Err(ToolchainError::ProbeCompileFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

fn run_probe(binary: &Path) -> Result<String> {
    let output = Command::new(binary).output()?;
    if !output.status.success() {
        return Err(ToolchainError::ProbeRunFailed {
            status: output.status.to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
