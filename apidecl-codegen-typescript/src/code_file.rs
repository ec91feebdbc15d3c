//! Declaration file assembly.
//!
//! Provides a high-level API for rendering a `.d.ts` file from a header
//! comment and any number of top-level nodes.

use apidecl_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a TypeScript declaration file.
///
/// Top-level nodes are rendered in order with a blank line between them.
///
/// # Example
///
/// ```ignore
/// let contents = DeclarationFile::new()
///     .header("Generated by apidecl")
///     .add_all(modules)
///     .render();
/// ```
#[derive(Default)]
pub struct DeclarationFile {
    header: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl DeclarationFile {
    /// Create a new empty file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading JSDoc comment.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Add a top-level node.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple top-level nodes.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            builder.push_jsdoc(header);
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
