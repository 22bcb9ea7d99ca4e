//! Bridge between module A and module B.
//!
//! Module A never names `workbridge-module-b` in its manifest; every call
//! into module B goes through this crate.

pub const PACKAGE: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Forward to [`workbridge_module_b::hello`], returning its result unchanged.
pub fn module_b_hello() -> &'static str {
    workbridge_module_b::hello()
}
