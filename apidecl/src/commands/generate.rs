use std::path::PathBuf;

use apidecl_codegen::invoke;
use apidecl_codegen_typescript::TsDeclarationsGenerator;
use apidecl_core::Overwrite;
use apidecl_schema::FormFile;
use clap::Args;
use eyre::{Result, bail};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops, registry,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the invocation form json ({service, imported_services, ...})
    #[arg(short, long)]
    pub form: PathBuf,

    /// Key of the generator to run
    #[arg(short, long, default_value = TsDeclarationsGenerator::KEY)]
    pub generator: String,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,

    /// Print the invocation response (or errors) as json instead of writing files
    #[arg(long, conflicts_with_all = ["dry_run", "keep_existing"])]
    pub json: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let form_file = FormFile::open(&self.form).unwrap_or_exit();
        debug!(
            form = %form_file.path().display(),
            generator = %self.generator,
            "loaded invocation form"
        );
        let registry = registry::build();
        let outcome = invoke(&registry, &self.generator, form_file.form());

        if self.json {
            return match outcome {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    Ok(())
                }
                Err(errors) => {
                    println!("{}", serde_json::to_string_pretty(&errors)?);
                    bail!("Generator {} failed", self.generator)
                }
            };
        }

        let overwrite = if self.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let report = ops::generate(outcome, &self.output, self.dry_run, overwrite)?;
        report.render(&mut TerminalOutput::new());

        if report.is_failure() {
            bail!("Generator {} failed", self.generator);
        }
        Ok(())
    }
}
