//! Generate command report data structures.

use std::path::PathBuf;

use apidecl_codegen::InvocationError;
use apidecl_core::OutputFile;

use super::output::{Output, Report};

/// Outcome of running a generator from the command line.
#[derive(Debug)]
pub enum GenerateReport {
    /// The generator could not run, or failed.
    Failed { errors: Vec<InvocationError> },
    /// Files that would be written.
    Preview { files: Vec<OutputFile> },
    /// Files written to disk.
    Written {
        output: PathBuf,
        written: Vec<String>,
        skipped: Vec<String>,
    },
}

impl GenerateReport {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerateReport::Failed { .. })
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Failed { errors } => {
                for error in errors {
                    out.error(&format!("[{}] {}", error.code, error.message));
                }
            }
            GenerateReport::Preview { files } => {
                for file in files {
                    out.divider(&file.name);
                    out.preformatted(&file.contents);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerateReport::Written {
                output,
                written,
                skipped,
            } => {
                out.section(&format!("Generated in {}", output.display()));
                for name in written {
                    out.added_item(name);
                }
                if !skipped.is_empty() {
                    out.newline();
                    out.section("Kept existing");
                    for name in skipped {
                        out.skipped_item(name);
                    }
                }
            }
        }
    }
}
