//! Type graph for the apidecl generator.
//!
//! This crate holds the already-resolved object graph that the declaration
//! lowering consumes: services and the enums, models and unions they declare.
//!
//! # Architecture
//!
//! ```text
//! service JSON → apidecl-schema (loading) → apidecl-ir (type graph) → codegen
//! ```
//!
//! The IR types are:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Eagerly materialized (field and variant lists are built once at load time)
//! - Self-contained (no external dependencies beyond std)

mod context;
mod service;
mod types;

pub use context::Context;
pub use service::{EnumType, EnumValue, Field, ModelType, Service, UnionType, UnionVariant};
pub use types::{DeclarationKind, PrimitiveKind, Type, TypeName};
