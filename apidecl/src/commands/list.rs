use apidecl_codegen::generation::DEFAULT_LIMIT;
use clap::Args;
use eyre::Result;

use crate::{
    ops, registry,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Number of generators to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of generators to show
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::list(&registry::build(), self.offset, self.limit);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
