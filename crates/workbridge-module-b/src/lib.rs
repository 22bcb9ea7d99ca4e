//! Module B: the leaf of the workspace call chain.
//!
//! Nothing here knows about module A; callers reach [`hello`] either
//! directly or through `workbridge-bridge`.

/// Crate name as published in this member's manifest.
pub const PACKAGE: &str = env!("CARGO_PKG_NAME");
/// Version of this member, independent of the rest of the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identity string for module B.
pub fn hello() -> &'static str {
    "Hello from module B"
}
