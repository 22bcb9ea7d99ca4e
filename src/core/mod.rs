//! Core infrastructure shared by the binary and the library.
//!
//! - **config**: configuration loading and resolved types.
//! - **error**: application-wide error enum.

pub mod config;
pub mod error;
