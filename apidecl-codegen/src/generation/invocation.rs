//! Running a generator on behalf of a caller.
//!
//! This is the boundary the HTTP endpoint (or the CLI) talks to: it looks up
//! the generator, checks the payload, runs it, and maps failures to the
//! `{code, message}` error list callers expect.

use apidecl_core::OutputFile;
use apidecl_schema::InvocationForm;
use serde::Serialize;
use tracing::{error, info};

use super::GeneratorRegistry;

/// Successful invocation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    /// Always empty; kept for compatibility with the response shape.
    pub source: String,
    pub files: Vec<OutputFile>,
}

/// Machine-readable invocation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    GeneratorNotFound,
    ServicePayloadNotFound,
    GeneratorError,
}

impl ErrorCode {
    /// The wire form of this code, e.g. `GENERATOR_NOT_FOUND`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::GeneratorNotFound => "GENERATOR_NOT_FOUND",
            ErrorCode::ServicePayloadNotFound => "SERVICE_PAYLOAD_NOT_FOUND",
            ErrorCode::GeneratorError => "GENERATOR_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an invocation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationError {
    pub code: ErrorCode,
    pub message: String,
}

impl InvocationError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Run the generator registered under `key` on `form`.
pub fn invoke(
    registry: &GeneratorRegistry,
    key: &str,
    form: &InvocationForm,
) -> Result<InvocationResponse, Vec<InvocationError>> {
    let Some(generator) = registry.get(key) else {
        return Err(vec![InvocationError::new(
            ErrorCode::GeneratorNotFound,
            format!("Could not find generator with key: {key}"),
        )]);
    };

    let Some(service) = &form.service else {
        return Err(vec![InvocationError::new(
            ErrorCode::ServicePayloadNotFound,
            format!(
                "Service json not found for key[{key}]. Expected body of request to be a \
                 service spec json file produced by https://app.apibuilder.io."
            ),
        )]);
    };

    let imported: Vec<String> = form
        .imported_services
        .iter()
        .map(|s| s.qualified_name())
        .collect();
    let attributes: Vec<&str> = form.attributes.iter().map(|a| a.name.as_str()).collect();
    info!(
        generator = key,
        service = %service.qualified_name(),
        imported_services = ?imported,
        attributes = ?attributes,
        user_agent = form.user_agent.as_deref().unwrap_or(""),
        "generating"
    );

    match generator.generate(form) {
        Ok(files) => {
            info!(generator = key, files = files.len(), "completed code generation");
            Ok(InvocationResponse {
                source: String::new(),
                files,
            })
        }
        Err(e) => {
            error!(generator = key, error = %e, "could not generate code");
            Err(vec![InvocationError::new(
                ErrorCode::GeneratorError,
                format!("Error in generator {key}: {e:#}"),
            )])
        }
    }
}
