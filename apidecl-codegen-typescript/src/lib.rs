//! TypeScript declaration generator for apidecl.
//!
//! Lowers an apibuilder type graph into ambient TypeScript declarations:
//! one `declare namespace <service namespace>.<kind>` block per non-empty
//! declaration kind, holding an exported type per enum, model and union.
//!
//! # Usage
//!
//! ```ignore
//! use apidecl_codegen::GeneratorRegistry;
//! use apidecl_codegen_typescript::TsDeclarationsGenerator;
//!
//! let registry = GeneratorRegistry::new().with(TsDeclarationsGenerator::new());
//! let files = registry.get("ts_declarations").unwrap().generate(&form)?;
//! ```
//!
//! The syntax trees are available directly for callers that render them
//! some other way:
//!
//! ```ignore
//! let modules = apidecl_codegen_typescript::build_module_declarations(&context);
//! ```
//!
//! # Generated Output
//!
//! ```text
//! declare namespace com.example.v0.enums {
//!   export type Color = "red" | "blue";
//! }
//!
//! declare namespace com.example.v0.models {
//!   export interface Item {
//!     readonly "id": string;
//!     readonly "tags"?: string[];
//!   }
//! }
//! ```

mod code_file;
mod generator;
mod naming;

pub mod ast;
pub mod lower;

pub use code_file::DeclarationFile;
pub use generator::{TsDeclarationsGenerator, register};
pub use lower::{Lowerer, build_module_declarations};
pub use naming::ES3_IDENTIFIERS;
