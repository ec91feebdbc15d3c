use std::path::{Path, PathBuf};

use eyre::Result;
use serde::{Deserialize, Serialize};

/// A generated file, as returned to the caller of a generator.
///
/// Serializes to the `{name, contents}` shape used in invocation responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// File name relative to the output directory.
    pub name: String,
    /// Rendered file contents.
    pub contents: String,
}

impl OutputFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Get the file path relative to the base directory
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }

    /// Write the file under `base` according to the overwrite rule
    pub fn write(&self, base: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        let path = self.path(base);

        match overwrite {
            Overwrite::Always => {
                write_file(&path, &self.contents)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.contents)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = OutputFile::new("types/api.d.ts", "declare namespace a {}\n");

        let result = file.write(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("types/api.d.ts")).unwrap();
        assert_eq!(written, "declare namespace a {}\n");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("api.d.ts"), "original").unwrap();

        let file = OutputFile::new("api.d.ts", "updated");
        let result = file.write(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("api.d.ts")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("api.d.ts"), "original").unwrap();

        let file = OutputFile::new("api.d.ts", "updated");
        let result = file.write(temp.path(), Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("api.d.ts")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_serializes_as_name_and_contents() {
        let file = OutputFile::new("api.d.ts", "x");
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "api.d.ts", "contents": "x" }));
    }
}
