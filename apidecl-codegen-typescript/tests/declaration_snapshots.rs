//! Snapshot tests for rendered declaration files.
//!
//! These tests verify that the generated declarations match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use apidecl_codegen::Generator;
use apidecl_codegen_typescript::TsDeclarationsGenerator;
use apidecl_schema::InvocationForm;

/// Generate the single declaration file for a form.
fn generate(form_json: &str) -> (String, String) {
    let form = InvocationForm::from_json(form_json).expect("Failed to parse form");
    let mut files = TsDeclarationsGenerator::new()
        .generate(&form)
        .expect("Generation failed");
    assert_eq!(files.len(), 1, "expected exactly one declaration file");
    let file = files.remove(0);
    (file.name, file.contents)
}

#[test]
fn test_shop_service() {
    let (name, contents) = generate(include_str!("forms/shop.json"));
    assert_eq!(name, "shop-api.d.ts");
    insta::assert_snapshot!("shop_service", contents);
}

#[test]
fn test_unresolved_and_reserved_names() {
    let (name, contents) = generate(include_str!("forms/legacy.json"));
    assert_eq!(name, "legacy.d.ts");
    insta::assert_snapshot!("unresolved_and_reserved", contents);
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate(include_str!("forms/shop.json"));
    let second = generate(include_str!("forms/shop.json"));
    assert_eq!(first, second);
}

#[test]
fn test_service_without_declarations() {
    let (name, contents) = generate(
        r#"{ "service": { "name": "Empty", "namespace": "com.empty.v0" } }"#,
    );
    assert_eq!(name, "empty.d.ts");
    assert_eq!(
        contents,
        "/** Declarations for Empty (com.empty.v0). Generated by apidecl; do not edit. */\n"
    );
}
