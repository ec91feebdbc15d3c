//! Namespace tree building.
//!
//! Output order is fixed: imported services in the order given, then the
//! root service; within a service, enums, models, unions. A kind with no
//! members produces no namespace at all.

use apidecl_ir::{DeclarationKind, Service};
use tracing::debug;

use super::Lowerer;
use crate::ast::{ExportDeclaration, Identifier, ModuleDeclaration};

/// Fold a namespace path right to left around its declarations.
///
/// `[a, b, c]` yields `a { b { c { declarations } } }`. Returns `None` for an
/// empty path.
pub fn build_module_declaration(
    path: Vec<Identifier>,
    declarations: Vec<ExportDeclaration>,
) -> Option<ModuleDeclaration> {
    let mut path = path.into_iter().rev();
    let innermost = ModuleDeclaration::block(path.next()?, declarations);
    Some(path.fold(innermost, |inner, name| ModuleDeclaration::wrap(name, inner)))
}

impl Lowerer<'_> {
    /// Sanitized namespace segments followed by the kind label.
    pub fn namespace_path(&self, service: &Service, kind: DeclarationKind) -> Vec<Identifier> {
        service
            .namespace
            .split('.')
            .map(|segment| self.safe_identifier(segment))
            .chain(std::iter::once(Identifier::new(kind.label())))
            .collect()
    }

    /// Exported declarations of one kind, in declared order.
    pub fn kind_declarations(
        &self,
        service: &Service,
        kind: DeclarationKind,
    ) -> Vec<ExportDeclaration> {
        match kind {
            DeclarationKind::Enums => service
                .enums
                .iter()
                .map(|enumeration| ExportDeclaration::new(self.enum_declaration(enumeration)))
                .collect(),
            DeclarationKind::Models => service
                .models
                .iter()
                .map(|model| ExportDeclaration::new(self.model_declaration(model)))
                .collect(),
            DeclarationKind::Unions => service
                .unions
                .iter()
                .map(|union| ExportDeclaration::new(self.union_declaration(union)))
                .collect(),
        }
    }

    /// The namespace for one kind of one service, or `None` if it is empty.
    pub fn module_declaration(
        &self,
        service: &Service,
        kind: DeclarationKind,
    ) -> Option<ModuleDeclaration> {
        if service.count(kind) == 0 {
            return None;
        }
        build_module_declaration(
            self.namespace_path(service, kind),
            self.kind_declarations(service, kind),
        )
    }

    /// Namespaces for one service, in kind order.
    pub fn service_declarations(&self, service: &Service) -> Vec<ModuleDeclaration> {
        DeclarationKind::ALL
            .into_iter()
            .filter_map(|kind| self.module_declaration(service, kind))
            .collect()
    }

    /// Namespaces for every service in the context.
    pub fn module_declarations(&self) -> Vec<ModuleDeclaration> {
        self.context
            .services()
            .flat_map(|service| {
                let modules = self.service_declarations(service);
                debug!(
                    service = %service.name,
                    namespace = %service.namespace,
                    enums = service.enums.len(),
                    models = service.models.len(),
                    unions = service.unions.len(),
                    modules = modules.len(),
                    "lowered service"
                );
                modules
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use apidecl_ir::{Context, EnumType, ModelType};

    use super::*;
    use crate::ast::ModuleBody;

    fn path_of(module: &ModuleDeclaration) -> Vec<&str> {
        module.path().iter().map(|id| id.as_str()).collect()
    }

    fn ids(names: &[&str]) -> Vec<Identifier> {
        names.iter().map(|n| Identifier::new(*n)).collect()
    }

    #[test]
    fn test_build_module_declaration_nests_outer_first() {
        let module = build_module_declaration(ids(&["com", "example", "v0", "models"]), vec![])
            .unwrap();

        assert_eq!(module.name.as_str(), "com");
        let ModuleBody::Module(example) = &module.body else {
            panic!("com should wrap example");
        };
        assert_eq!(example.name.as_str(), "example");
        assert_eq!(path_of(&module), vec!["com", "example", "v0", "models"]);
        assert!(build_module_declaration(vec![], vec![]).is_none());
    }

    #[test]
    fn test_models_namespace_contains_models() {
        let context = crate::lower::fixtures::context();
        let lowerer = Lowerer::new(&context);
        let module = lowerer
            .module_declaration(&context.root_service, DeclarationKind::Models)
            .unwrap();

        assert_eq!(path_of(&module), vec!["com", "example", "v0", "models"]);
        let names: Vec<_> = module
            .declarations()
            .iter()
            .map(|d| d.declaration.name().as_str())
            .collect();
        assert_eq!(names, vec!["Item", "Card"]);
    }

    #[test]
    fn test_empty_kinds_are_skipped() {
        let service = Service::new("colors", "com.colors")
            .with_enum(EnumType::new("color").value("red"));
        let context = Context::new(service);
        let lowerer = Lowerer::new(&context);

        let modules = lowerer.module_declarations();
        assert_eq!(modules.len(), 1);
        assert_eq!(path_of(&modules[0]), vec!["com", "colors", "enums"]);
        assert!(
            lowerer
                .module_declaration(&context.root_service, DeclarationKind::Unions)
                .is_none()
        );
    }

    #[test]
    fn test_empty_service_emits_nothing() {
        let context = Context::new(Service::new("empty", "com.empty"));
        assert!(Lowerer::new(&context).module_declarations().is_empty());
    }

    #[test]
    fn test_imported_services_come_first() {
        let context = crate::lower::fixtures::context();
        let modules = Lowerer::new(&context).module_declarations();
        let paths: Vec<String> = modules.iter().map(|m| path_of(m).join(".")).collect();

        assert_eq!(
            paths,
            vec![
                "com.bank.v1.models",
                "com.example.v0.enums",
                "com.example.v0.models",
                "com.example.v0.unions",
            ]
        );
    }

    #[test]
    fn test_namespace_segments_are_sanitized() {
        let service = Service::new("odd", "org.class.v1").with_model(ModelType::new("thing"));
        let context = Context::new(service);
        let lowerer = Lowerer::new(&context);

        assert_eq!(
            lowerer
                .namespace_path(&context.root_service, DeclarationKind::Models)
                .iter()
                .map(Identifier::as_str)
                .collect::<Vec<_>>(),
            vec!["org", "RESERVED_WORD_class", "v1", "models"]
        );
    }

    #[test]
    fn test_non_ascii_namespace_segments_are_prefixed() {
        let service = Service::new("odd", "com.v²").with_model(ModelType::new("thing"));
        let context = Context::new(service);
        let modules = Lowerer::new(&context).module_declarations();

        assert_eq!(path_of(&modules[0]), vec!["com", "RESERVED_WORD_v²", "models"]);
    }

    #[test]
    fn test_lowering_is_deterministic() {
        let context = crate::lower::fixtures::context();
        let lowerer = Lowerer::new(&context);
        assert_eq!(lowerer.module_declarations(), lowerer.module_declarations());
    }
}
