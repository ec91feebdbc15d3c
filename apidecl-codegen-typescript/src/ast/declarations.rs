//! Declarations and ambient namespace blocks.

use apidecl_codegen::builder::{CodeFragment, Renderable};

use super::{Identifier, TsType, TypeMember};

/// `type Name = ...;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: Identifier,
    pub ty: TsType,
}

/// `interface Name { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: Identifier,
    pub members: Vec<TypeMember>,
}

/// A named type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    TypeAlias(TypeAlias),
    Interface(Interface),
}

impl Declaration {
    pub fn name(&self) -> &Identifier {
        match self {
            Declaration::TypeAlias(alias) => &alias.name,
            Declaration::Interface(interface) => &interface.name,
        }
    }

    fn fragments(&self, modifiers: &str) -> Vec<CodeFragment> {
        match self {
            Declaration::TypeAlias(alias) => vec![CodeFragment::line(format!(
                "{modifiers}type {} = {};",
                alias.name, alias.ty
            ))],
            Declaration::Interface(interface) if interface.members.is_empty() => {
                vec![CodeFragment::line(format!(
                    "{modifiers}interface {} {{}}",
                    interface.name
                ))]
            }
            Declaration::Interface(interface) => vec![CodeFragment::block(
                format!("{modifiers}interface {} {{", interface.name),
                interface
                    .members
                    .iter()
                    .map(|member| CodeFragment::line(format!("{member};")))
                    .collect(),
                Some("}".to_string()),
            )],
        }
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.fragments("")
    }
}

/// `export <declaration>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDeclaration {
    pub declaration: Declaration,
}

impl ExportDeclaration {
    pub fn new(declaration: Declaration) -> Self {
        Self { declaration }
    }
}

impl From<Declaration> for ExportDeclaration {
    fn from(declaration: Declaration) -> Self {
        Self::new(declaration)
    }
}

impl Renderable for ExportDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.declaration.fragments("export ")
    }
}

/// Body of a namespace: either the next namespace in a dotted chain, or the
/// declarations of the innermost one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleBody {
    Module(Box<ModuleDeclaration>),
    Block(Vec<ExportDeclaration>),
}

/// A `namespace` declaration.
///
/// `a.b.c` is represented as three nested declarations; rendering collapses
/// the chain back into one dotted header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDeclaration {
    pub name: Identifier,
    pub body: ModuleBody,
}

impl ModuleDeclaration {
    /// Innermost namespace holding `declarations`.
    pub fn block(name: Identifier, declarations: Vec<ExportDeclaration>) -> Self {
        Self {
            name,
            body: ModuleBody::Block(declarations),
        }
    }

    /// Wrap `inner` in an enclosing namespace.
    pub fn wrap(name: Identifier, inner: ModuleDeclaration) -> Self {
        Self {
            name,
            body: ModuleBody::Module(Box::new(inner)),
        }
    }

    /// Names along the chain, outermost first.
    pub fn path(&self) -> Vec<&Identifier> {
        let mut path = vec![&self.name];
        let mut current = self;
        while let ModuleBody::Module(inner) = &current.body {
            path.push(&inner.name);
            current = inner;
        }
        path
    }

    /// Declarations of the innermost namespace.
    pub fn declarations(&self) -> &[ExportDeclaration] {
        match &self.body {
            ModuleBody::Module(inner) => inner.declarations(),
            ModuleBody::Block(declarations) => declarations,
        }
    }
}

impl Renderable for ModuleDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let path = self
            .path()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(".");

        let mut body = Vec::new();
        for (i, declaration) in self.declarations().iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(declaration.to_fragments());
        }

        vec![CodeFragment::block(
            format!("declare namespace {path} {{"),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use apidecl_codegen::CodeBuilder;

    use super::*;
    use crate::ast::{PropertyKey, PropertySignature};

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(node);
        builder.build()
    }

    fn color() -> Declaration {
        Declaration::TypeAlias(TypeAlias {
            name: Identifier::new("Color"),
            ty: TsType::Union(vec![TsType::literal("red"), TsType::literal("blue")]),
        })
    }

    fn item() -> Declaration {
        Declaration::Interface(Interface {
            name: Identifier::new("Item"),
            members: vec![
                TypeMember::Property(
                    PropertySignature::new(PropertyKey::StringLiteral("id".into()), TsType::String)
                        .readonly(),
                ),
                TypeMember::Property(
                    PropertySignature::new(
                        PropertyKey::StringLiteral("tags".into()),
                        TsType::array(TsType::String),
                    )
                    .optional(true)
                    .readonly(),
                ),
            ],
        })
    }

    #[test]
    fn test_type_alias() {
        assert_eq!(render(&color()), "type Color = \"red\" | \"blue\";\n");
        assert_eq!(
            render(&ExportDeclaration::new(color())),
            "export type Color = \"red\" | \"blue\";\n"
        );
    }

    #[test]
    fn test_interface() {
        assert_eq!(
            render(&ExportDeclaration::new(item())),
            "export interface Item {\n  readonly \"id\": string;\n  readonly \"tags\"?: string[];\n}\n"
        );
    }

    #[test]
    fn test_empty_interface() {
        let empty = Declaration::Interface(Interface {
            name: Identifier::new("Empty"),
            members: vec![],
        });
        assert_eq!(render(&empty), "interface Empty {}\n");
    }

    #[test]
    fn test_module_chain_collapses() {
        let module = ModuleDeclaration::wrap(
            Identifier::new("com"),
            ModuleDeclaration::wrap(
                Identifier::new("shop"),
                ModuleDeclaration::block(
                    Identifier::new("enums"),
                    vec![color().into()],
                ),
            ),
        );

        let path: Vec<_> = module.path().iter().map(|id| id.as_str()).collect();
        assert_eq!(path, vec!["com", "shop", "enums"]);
        assert_eq!(module.declarations().len(), 1);
        assert_eq!(
            render(&module),
            "declare namespace com.shop.enums {\n  export type Color = \"red\" | \"blue\";\n}\n"
        );
    }

    #[test]
    fn test_module_separates_declarations() {
        let module = ModuleDeclaration::block(
            Identifier::new("models"),
            vec![item().into(), color().into()],
        );
        assert_eq!(
            render(&module),
            "declare namespace models {\n  export interface Item {\n    readonly \"id\": string;\n    readonly \"tags\"?: string[];\n  }\n\n  export type Color = \"red\" | \"blue\";\n}\n"
        );
    }
}
