//! TypeScript declaration syntax tree.
//!
//! Lowering produces these nodes; rendering goes through
//! [`Renderable`](apidecl_codegen::Renderable) for declarations and
//! [`Display`](std::fmt::Display) for types.

mod declarations;
mod types;

pub use declarations::{
    Declaration, ExportDeclaration, Interface, ModuleBody, ModuleDeclaration, TypeAlias,
};
pub use types::{
    Identifier, IndexSignature, PropertyKey, PropertySignature, QualifiedName, TsType, TypeMember,
    quote,
};
