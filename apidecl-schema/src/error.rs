use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for apidecl-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(apidecl::io_error),
        help("pass the invocation form with --form <path>")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(apidecl::parse_error))]
    Parse {
        what: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("service json not found in invocation form")]
    #[diagnostic(
        code(apidecl::service_payload_missing),
        help("the form must carry a `service` object produced by apibuilder")
    )]
    ServicePayloadMissing,
}

impl Error {
    /// Create a parse error from a serde_json error with source context.
    pub fn parse(
        what: &'static str,
        source: serde_json::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from(o..o));
        Box::new(Error::Parse {
            what,
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_second_line() {
        let src = "{\n  \"a\": ,\n}";
        assert_eq!(offset_of(src, 2, 8), Some(9));
    }

    #[test]
    fn test_offset_of_clamps_to_len() {
        assert_eq!(offset_of("{}", 1, 40), Some(2));
        assert_eq!(offset_of("{}", 0, 0), None);
    }

    #[test]
    fn test_parse_error_carries_span() {
        let src = "{ \"service\": }";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse("invocation form", err, src, "form.json");
        match *err {
            Error::Parse { span, what, .. } => {
                assert!(span.is_some());
                assert_eq!(what, "invocation form");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
