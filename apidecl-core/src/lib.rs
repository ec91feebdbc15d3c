//! Core utilities and types for the apidecl generator.
//!
//! This crate provides the string case helpers and the generated file
//! abstraction shared by the rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, upper_first, words};
