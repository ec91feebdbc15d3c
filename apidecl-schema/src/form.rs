use std::path::{Path, PathBuf};

use apidecl_ir::Context;
use serde::Deserialize;

use crate::{Error, Result, resolve::build_context, spec::ServiceSpec};

/// A generator attribute passed along with the invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// The body of a generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationForm {
    /// The service being generated for. Absent when the caller sent no payload.
    pub service: Option<ServiceSpec>,
    #[serde(default)]
    pub imported_services: Vec<ServiceSpec>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub user_agent: Option<String>,
}

impl InvocationForm {
    /// Parse a form from a string (uses "form.json" as default filename)
    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_json_with_filename(content, "form.json")
    }

    /// Parse a form from a string with a custom filename for error reporting
    pub fn from_json_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::parse("invocation form", e, content, filename))
    }

    /// The root service, or [`Error::ServicePayloadMissing`].
    pub fn service(&self) -> Result<&ServiceSpec> {
        self.service
            .as_ref()
            .ok_or_else(|| Box::new(Error::ServicePayloadMissing))
    }

    /// Resolve the form into the type graph used for lowering.
    pub fn context(&self) -> Result<Context> {
        let service = self.service()?;
        Ok(build_context(service, &self.imported_services))
    }
}

/// An invocation form file and its parsed form.
pub struct FormFile {
    path: PathBuf,
    form: InvocationForm,
}

impl FormFile {
    /// Open and parse a form file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let form = InvocationForm::from_json_with_filename(&content, &filename)?;

        Ok(Self { path, form })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed form.
    pub fn form(&self) -> &InvocationForm {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const FORM: &str = r#"{
        "service": {
            "name": "shop",
            "namespace": "com.example.v0",
            "models": [{ "name": "item", "fields": [{ "name": "id", "type": "string" }] }]
        },
        "attributes": [{ "name": "file_name", "value": "shop" }],
        "user_agent": "apibuilder-cli/0.1"
    }"#;

    #[test]
    fn test_parse_form() {
        let form = InvocationForm::from_json(FORM).unwrap();
        assert_eq!(form.service().unwrap().name, "shop");
        assert!(form.imported_services.is_empty());
        assert_eq!(form.attributes[0].name, "file_name");
        assert_eq!(form.attributes[0].value, "shop");
        assert_eq!(form.user_agent.as_deref(), Some("apibuilder-cli/0.1"));
    }

    #[test]
    fn test_missing_service() {
        let form = InvocationForm::from_json(r#"{ "attributes": [] }"#).unwrap();
        let err = form.context().unwrap_err();
        assert!(matches!(*err, Error::ServicePayloadMissing));
    }

    #[test]
    fn test_malformed_json() {
        let err = InvocationForm::from_json(r#"{ "service": "#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("form.json");
        fs::write(&path, FORM).unwrap();

        let file = FormFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        let ctx = file.form().context().unwrap();
        assert_eq!(ctx.root_service.models.len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = FormFile::open(temp.path().join("nope.json"));
        assert!(matches!(result.map(|_| ()).unwrap_err().as_ref(), Error::Io { .. }));
    }
}
