//! Shared code generation utilities for apidecl.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `apidecl-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Generator registry and invocation
//! - [`language`] - Language-specific abstractions (Generator, IdentifierChecker, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::{GeneratorRegistry, InvocationError, InvocationResponse, invoke};
pub use language::{
    Generator, GeneratorSummary, IdentifierCheck, IdentifierChecker, IdentifierRules,
};
