// Library root: exposes internals for integration tests.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod cli;
pub mod core;
pub mod greeting;
pub mod members;

pub use bootstrap::logger;
pub use crate::core::{config, error};
