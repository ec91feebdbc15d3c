use clap::Args;
use eyre::Result;

use crate::{
    ops, registry,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Generator key (see `apidecl list`)
    pub key: String,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::info(&registry::build(), &self.key)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
