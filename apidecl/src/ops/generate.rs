//! Generate operation - run a generator and write its files.

use std::path::Path;

use apidecl_codegen::{InvocationError, InvocationResponse};
use apidecl_core::{Overwrite, WriteResult};
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::GenerateReport;

/// Turn an invocation outcome into a report, writing files unless `dry_run`.
pub fn generate(
    outcome: Result<InvocationResponse, Vec<InvocationError>>,
    output: &Path,
    dry_run: bool,
    overwrite: Overwrite,
) -> Result<GenerateReport> {
    let response = match outcome {
        Ok(response) => response,
        Err(errors) => return Ok(GenerateReport::Failed { errors }),
    };

    if dry_run {
        return Ok(GenerateReport::Preview {
            files: response.files,
        });
    }

    let mut written = Vec::new();
    let mut skipped = Vec::new();
    for file in &response.files {
        let result = file
            .write(output, overwrite)
            .wrap_err_with(|| format!("Failed to write {}", file.name))?;
        debug!(file = %file.name, ?result, "wrote output file");
        match result {
            WriteResult::Written => written.push(file.name.clone()),
            WriteResult::Skipped => skipped.push(file.name.clone()),
        }
    }

    Ok(GenerateReport::Written {
        output: output.to_path_buf(),
        written,
        skipped,
    })
}
