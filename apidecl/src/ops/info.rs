//! Info operation - describe one generator.

use apidecl_codegen::GeneratorRegistry;
use apidecl_schema::InvocationForm;
use eyre::{Result, eyre};

use crate::reports::InfoReport;

const SAMPLE_FORM: &str = r#"{ "service": { "name": "example", "namespace": "com.example.v0" } }"#;

pub fn info(registry: &GeneratorRegistry, key: &str) -> Result<InfoReport> {
    let generator = registry.get(key).ok_or_else(|| {
        let known: Vec<_> = registry.keys().collect();
        eyre!(
            "Could not find generator with key: {key} (available: {})",
            known.join(", ")
        )
    })?;

    let sample_output = InvocationForm::from_json(SAMPLE_FORM)
        .ok()
        .and_then(|form| generator.generate(&form).ok())
        .map(|files| {
            files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        });

    Ok(InfoReport {
        summary: generator.summary(),
        sample_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_info_for_known_generator() {
        let report = info(&registry::build(), "ts_declarations").unwrap();
        assert_eq!(report.summary.language, "typescript");
        assert_eq!(report.sample_output.as_deref(), Some("example.d.ts"));
    }

    #[test]
    fn test_info_for_unknown_generator() {
        let err = info(&registry::build(), "nope").unwrap_err();
        assert!(err.to_string().contains("ts_declarations"));
    }
}
