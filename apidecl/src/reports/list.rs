//! List command report data structures.

use apidecl_codegen::GeneratorSummary;

use super::output::{Output, Report};

/// One page of registered generators.
#[derive(Debug)]
pub struct ListReport {
    pub generators: Vec<GeneratorSummary>,
    /// Number of generators registered in total.
    pub total: usize,
    pub offset: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.generators.is_empty() {
            out.preformatted("No generators found");
            return;
        }

        out.section("Generators");
        for generator in &self.generators {
            out.list_item(&format!(
                "{} ({}): {}",
                generator.key, generator.language, generator.description
            ));
        }

        let shown = self.offset + self.generators.len();
        if shown < self.total {
            out.newline();
            out.preformatted(&format!(
                "Showing {}-{} of {}; use --offset {} for more",
                self.offset + 1,
                shown,
                self.total,
                shown
            ));
        }
    }
}
