//! Turn raw service specs into the resolved type graph.

use std::collections::HashSet;

use apidecl_ir::{
    Context, DeclarationKind, EnumType, EnumValue, Field, ModelType, PrimitiveKind, Service, Type,
    TypeName, UnionType, UnionVariant,
};

use crate::spec::ServiceSpec;

/// Build a [`Context`] from a root service and the services it imports.
///
/// Every field and variant type is resolved here, once. Fully-qualified
/// references that point at a namespace outside the given services, or at a
/// name that namespace does not declare, are collected into
/// `unresolved_types`.
pub fn build_context(root: &ServiceSpec, imported: &[ServiceSpec]) -> Context {
    let all: Vec<&ServiceSpec> = imported.iter().chain(std::iter::once(root)).collect();
    let mut unresolved = HashSet::new();

    let imported_services = imported
        .iter()
        .map(|spec| lower_service(spec, &all, &mut unresolved))
        .collect();
    let root_service = lower_service(root, &all, &mut unresolved);

    Context {
        root_service,
        imported_services,
        unresolved_types: unresolved,
    }
}

fn lower_service(
    spec: &ServiceSpec,
    all: &[&ServiceSpec],
    unresolved: &mut HashSet<String>,
) -> Service {
    let mut resolver = TypeResolver {
        local: spec,
        all,
        unresolved,
    };

    let enums = spec
        .enums
        .iter()
        .map(|e| EnumType {
            short_name: e.name.clone(),
            values: e
                .values
                .iter()
                .map(|v| EnumValue {
                    name: v.name.clone(),
                })
                .collect(),
        })
        .collect();

    let models = spec
        .models
        .iter()
        .map(|m| ModelType {
            short_name: m.name.clone(),
            fields: m
                .fields
                .iter()
                .map(|f| Field {
                    name: f.name.clone(),
                    ty: resolver.resolve(&f.ty),
                    is_required: f.required,
                })
                .collect(),
        })
        .collect();

    let unions = spec
        .unions
        .iter()
        .map(|u| UnionType {
            short_name: u.name.clone(),
            discriminator: u.discriminator.clone(),
            types: u
                .types
                .iter()
                .map(|t| UnionVariant {
                    ty: resolver.resolve(&t.ty),
                    discriminator_value: t.discriminator_value().to_string(),
                })
                .collect(),
        })
        .collect();

    Service {
        name: spec.name.clone(),
        namespace: spec.namespace.clone(),
        enums,
        models,
        unions,
    }
}

struct TypeResolver<'a> {
    local: &'a ServiceSpec,
    all: &'a [&'a ServiceSpec],
    unresolved: &'a mut HashSet<String>,
}

impl TypeResolver<'_> {
    /// Resolve an apibuilder type string such as `[string]`, `map[long]`,
    /// `order` or `com.example.v0.models.order`.
    fn resolve(&mut self, ty: &str) -> Type {
        let ty = ty.trim();

        if let Some(inner) = ty.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Type::array(self.resolve(inner));
        }
        if ty == "map" {
            return Type::map(Type::Primitive(PrimitiveKind::String));
        }
        if let Some(inner) = ty.strip_prefix("map[").and_then(|s| s.strip_suffix(']')) {
            return Type::map(self.resolve(inner));
        }
        if let Some(kind) = PrimitiveKind::from_name(ty) {
            return Type::Primitive(kind);
        }
        if let Some(kind) = kind_of(self.local, ty) {
            return named(kind, TypeName::new(&self.local.namespace, kind, ty));
        }
        if let Some((namespace, kind, short_name)) = split_qualified(ty) {
            let name = TypeName::new(namespace, kind, short_name);
            let declared = self
                .all
                .iter()
                .any(|s| s.namespace == namespace && declares(s, kind, short_name));
            if !declared {
                self.unresolved.insert(name.full_name.clone());
            }
            return named(kind, name);
        }

        Type::Primitive(PrimitiveKind::Other(ty.to_string()))
    }
}

fn named(kind: DeclarationKind, name: TypeName) -> Type {
    match kind {
        DeclarationKind::Enums => Type::Enum(name),
        DeclarationKind::Models => Type::Model(name),
        DeclarationKind::Unions => Type::Union(name),
    }
}

/// Split `a.b.models.c` into (`a.b`, Models, `c`).
fn split_qualified(ty: &str) -> Option<(&str, DeclarationKind, &str)> {
    let (package, short_name) = ty.rsplit_once('.')?;
    let (namespace, label) = package.rsplit_once('.')?;
    let kind = DeclarationKind::from_label(label)?;
    if namespace.is_empty() || short_name.is_empty() {
        return None;
    }
    Some((namespace, kind, short_name))
}

fn kind_of(spec: &ServiceSpec, name: &str) -> Option<DeclarationKind> {
    DeclarationKind::ALL
        .into_iter()
        .find(|&kind| declares(spec, kind, name))
}

fn declares(spec: &ServiceSpec, kind: DeclarationKind, name: &str) -> bool {
    match kind {
        DeclarationKind::Enums => spec.enums.iter().any(|e| e.name == name),
        DeclarationKind::Models => spec.models.iter().any(|m| m.name == name),
        DeclarationKind::Unions => spec.unions.iter().any(|u| u.name == name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> ServiceSpec {
        serde_json::from_str(json).expect("Failed to parse test spec")
    }

    fn root() -> ServiceSpec {
        spec(
            r#"{
                "name": "shop",
                "namespace": "com.example.v0",
                "enums": [{ "name": "color", "values": [{ "name": "red" }] }],
                "models": [{
                    "name": "item",
                    "fields": [
                        { "name": "id", "type": "uuid" },
                        { "name": "tags", "type": "[string]", "required": false },
                        { "name": "attrs", "type": "map[color]" },
                        { "name": "meta", "type": "map" },
                        { "name": "owner", "type": "com.example.users.v0.models.user" },
                        { "name": "ghost", "type": "com.missing.v0.enums.ghost" },
                        { "name": "weight", "type": "float" }
                    ]
                }],
                "unions": [{
                    "name": "thing",
                    "discriminator": "kind",
                    "types": [{ "type": "item" }, { "type": "color", "discriminator_value": "paint" }]
                }]
            }"#,
        )
    }

    fn users() -> ServiceSpec {
        spec(
            r#"{
                "name": "users",
                "namespace": "com.example.users.v0",
                "models": [{ "name": "user", "fields": [{ "name": "id", "type": "string" }] }]
            }"#,
        )
    }

    #[test]
    fn test_resolves_field_types() {
        let ctx = build_context(&root(), &[users()]);
        let fields = &ctx.root_service.models[0].fields;

        assert_eq!(fields[0].ty, Type::Primitive(PrimitiveKind::Uuid));
        assert_eq!(
            fields[1].ty,
            Type::array(Type::Primitive(PrimitiveKind::String))
        );
        assert!(!fields[1].is_required);
        assert_eq!(
            fields[2].ty,
            Type::map(Type::Enum(TypeName::new(
                "com.example.v0",
                DeclarationKind::Enums,
                "color"
            )))
        );
        assert_eq!(
            fields[3].ty,
            Type::map(Type::Primitive(PrimitiveKind::String))
        );
        assert_eq!(
            fields[4].ty,
            Type::Model(TypeName::new(
                "com.example.users.v0",
                DeclarationKind::Models,
                "user"
            ))
        );
        assert_eq!(
            fields[6].ty,
            Type::Primitive(PrimitiveKind::Other("float".into()))
        );
    }

    #[test]
    fn test_collects_unresolved_types() {
        let ctx = build_context(&root(), &[users()]);
        let unresolved: Vec<_> = ctx.unresolved_types.iter().cloned().collect();
        assert_eq!(unresolved, vec!["com.missing.v0.enums.ghost".to_string()]);
    }

    #[test]
    fn test_unlisted_import_is_unresolved() {
        let ctx = build_context(&root(), &[]);
        assert!(
            ctx.unresolved_types
                .contains("com.example.users.v0.models.user")
        );
    }

    #[test]
    fn test_missing_name_in_listed_namespace_is_unresolved() {
        let root = spec(
            r#"{
                "name": "shop",
                "namespace": "com.example.v0",
                "models": [{
                    "name": "order",
                    "fields": [
                        { "name": "buyer", "type": "com.example.users.v0.models.user" },
                        { "name": "seller", "type": "com.example.users.v0.models.nobody" },
                        { "name": "role", "type": "com.example.users.v0.enums.user" }
                    ]
                }]
            }"#,
        );
        let ctx = build_context(&root, &[users()]);

        assert!(
            ctx.unresolved_types
                .contains("com.example.users.v0.models.nobody")
        );
        assert!(
            !ctx.unresolved_types
                .contains("com.example.users.v0.models.user")
        );
        // The name exists there, but as a model, not an enum.
        assert!(
            ctx.unresolved_types
                .contains("com.example.users.v0.enums.user")
        );
        assert_eq!(ctx.unresolved_types.len(), 2);
    }

    #[test]
    fn test_local_lookup_prefers_enum_then_model_then_union() {
        let root = spec(
            r#"{
                "name": "shop",
                "namespace": "com.example.v0",
                "enums": [{ "name": "status", "values": [{ "name": "open" }] }],
                "models": [
                    { "name": "status", "fields": [] },
                    { "name": "shape", "fields": [] },
                    {
                        "name": "order",
                        "fields": [
                            { "name": "status", "type": "status" },
                            { "name": "shape", "type": "shape" }
                        ]
                    }
                ],
                "unions": [
                    { "name": "status", "types": [{ "type": "string" }] },
                    { "name": "shape", "types": [{ "type": "string" }] }
                ]
            }"#,
        );
        let ctx = build_context(&root, &[]);
        let fields = &ctx.root_service.models[2].fields;

        assert_eq!(
            fields[0].ty,
            Type::Enum(TypeName::new("com.example.v0", DeclarationKind::Enums, "status"))
        );
        assert_eq!(
            fields[1].ty,
            Type::Model(TypeName::new("com.example.v0", DeclarationKind::Models, "shape"))
        );
        assert!(ctx.unresolved_types.is_empty());
    }

    #[test]
    fn test_union_variants() {
        let ctx = build_context(&root(), &[]);
        let union = &ctx.root_service.unions[0];

        assert_eq!(union.discriminator, "kind");
        assert_eq!(union.types[0].discriminator_value, "item");
        assert!(matches!(union.types[0].ty, Type::Model(_)));
        assert_eq!(union.types[1].discriminator_value, "paint");
        assert!(matches!(union.types[1].ty, Type::Enum(_)));
    }

    #[test]
    fn test_split_qualified() {
        assert_eq!(
            split_qualified("com.a.v0.unions.pet"),
            Some(("com.a.v0", DeclarationKind::Unions, "pet"))
        );
        assert_eq!(split_qualified("com.a.v0.resources.pet"), None);
        assert_eq!(split_qualified("pet"), None);
        assert_eq!(split_qualified("models.pet"), None);
    }
}
