//! Loading of generation requests for apidecl.
//!
//! An invocation form carries the apibuilder service json for the root
//! service and the services it imports. This crate parses it and resolves the
//! raw type strings into the [`apidecl_ir`] type graph.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod form;
mod resolve;
mod spec;

pub use error::{Error, Result};
pub use form::{Attribute, FormFile, InvocationForm};
pub use resolve::build_context;
pub use spec::{
    EnumSpec, EnumValueSpec, FieldSpec, ModelSpec, ServiceSpec, UnionSpec, UnionTypeSpec,
};
