//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use apidecl_core::OutputFile;
use apidecl_schema::InvocationForm;
use eyre::{Result, eyre};

use crate::language::Generator;

/// Generator with canned behavior, for exercising registries and invocation.
pub struct StubGenerator {
    key: &'static str,
    fail: bool,
}

impl StubGenerator {
    /// A generator that emits `<key>.txt` containing the service name.
    pub fn new(key: &'static str) -> Self {
        Self { key, fail: false }
    }

    /// A generator that always fails.
    pub fn failing(key: &'static str) -> Self {
        Self { key, fail: true }
    }
}

impl Generator for StubGenerator {
    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        "Stub"
    }

    fn language(&self) -> &'static str {
        "text"
    }

    fn description(&self) -> &'static str {
        "Writes the service name to a text file"
    }

    fn generate(&self, form: &InvocationForm) -> Result<Vec<OutputFile>> {
        if self.fail {
            return Err(eyre!("stub generator asked to fail"));
        }
        let service = form.service()?;
        Ok(vec![OutputFile::new(
            format!("{}.txt", self.key),
            service.name.clone(),
        )])
    }
}

/// Error from type checking generated files.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Type-check TypeScript declaration files with `tsc --noEmit`.
///
/// The files are written to a scratch directory first. Requires `npx` on the
/// PATH, so callers typically gate this behind `#[ignore]`.
#[cfg(feature = "testing")]
pub fn check_declarations(files: &[OutputFile]) -> Result<(), CompileError> {
    use std::process::Command;

    use apidecl_core::Overwrite;

    let dir = tempfile::TempDir::new().map_err(|e| CompileError {
        message: format!("Failed to create scratch directory: {}", e),
        output: String::new(),
    })?;

    for file in files {
        file.write(dir.path(), Overwrite::Always)
            .map_err(|e| CompileError {
                message: format!("Failed to write {}: {}", file.name, e),
                output: String::new(),
            })?;
    }

    let output = Command::new("npx")
        .args(["tsc", "--noEmit", "--strict"])
        .args(files.iter().map(|f| f.name.as_str()))
        .current_dir(dir.path())
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run tsc: {}", e),
            output: String::new(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        Err(CompileError {
            message: "tsc --noEmit failed".to_string(),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}
