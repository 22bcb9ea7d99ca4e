//! Bootstrap layer: runs before any member crate is called.
//!
//! - **logger**: tracing-subscriber initialisation.

pub mod logger;
