//! Info command report data structures.

use apidecl_codegen::GeneratorSummary;

use super::output::{Output, Report};

/// Details of a single generator.
#[derive(Debug)]
pub struct InfoReport {
    pub summary: GeneratorSummary,
    /// Name of the file the generator would write for a service called `example`.
    pub sample_output: Option<String>,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(self.summary.name);
        out.key_value("Key", self.summary.key);
        out.key_value("Language", self.summary.language);
        out.key_value("Description", self.summary.description);
        if let Some(sample) = &self.sample_output {
            out.key_value("Output", sample);
        }
    }
}
