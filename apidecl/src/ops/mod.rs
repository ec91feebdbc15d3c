//! Core operations.
//!
//! This module contains the business logic for apidecl commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod info;
pub mod list;

pub use generate::generate;
pub use info::info;
pub use list::list;
