//! Raw apibuilder service json, as received in an invocation form.
//!
//! Only the parts the declaration generators read are modelled; unknown keys
//! are ignored.

use serde::Deserialize;

/// A service spec produced by apibuilder.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSpec {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub enums: Vec<EnumSpec>,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
    #[serde(default)]
    pub unions: Vec<UnionSpec>,
}

impl ServiceSpec {
    /// `namespace.name`, the form used when logging invocations.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumSpec {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValueSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValueSpec {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnionSpec {
    pub name: String,
    /// Defaults to `discriminator` when the spec leaves it out.
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
    #[serde(default)]
    pub types: Vec<UnionTypeSpec>,
}

fn default_discriminator() -> String {
    "discriminator".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnionTypeSpec {
    #[serde(rename = "type")]
    pub ty: String,
    /// Defaults to the variant's type string.
    pub discriminator_value: Option<String>,
}

impl UnionTypeSpec {
    pub fn discriminator_value(&self) -> &str {
        self.discriminator_value.as_deref().unwrap_or(&self.ty)
    }
}
