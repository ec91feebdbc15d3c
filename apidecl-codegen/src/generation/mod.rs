//! Generator registration and invocation.
//!
//! - [`GeneratorRegistry`] - Explicitly constructed table of generators
//! - [`invoke`] - Run a generator and map failures to invocation error codes

mod invocation;
mod registry;

pub use invocation::{ErrorCode, InvocationError, InvocationResponse, invoke};
pub use registry::{DEFAULT_LIMIT, GeneratorRegistry};
