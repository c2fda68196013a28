//! Mocked response registry.
//!
//! - [`registry::MockRegistry`]: lock-guarded table of mocked endpoints
//! - [`generator`]: ready-made response generators
//! - [`global`]: the process-wide registry consulted by the request path

pub mod error;
pub mod generator;
pub mod global;
pub mod registry;
