//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod info;
mod list;
mod output;

pub use generate::GenerateReport;
pub use info::InfoReport;
pub use list::ListReport;
#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Report, TerminalOutput};
