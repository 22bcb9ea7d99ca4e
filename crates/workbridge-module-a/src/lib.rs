//! Module A: calls into module B only via `workbridge-bridge`.

use tracing::trace;

pub const PACKAGE: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix prepended to whatever the bridge returns.
pub const BRIDGE_PREFIX: &str = "Module A via bridge: ";

/// Identity string for module A.
pub fn hello() -> &'static str {
    "Hello from module A"
}

/// Module B's identity string, fetched through the bridge and prefixed
/// with [`BRIDGE_PREFIX`].
pub fn hello_via_bridge() -> String {
    let bridged = workbridge_bridge::module_b_hello();
    trace!(
        bridge = workbridge_bridge::PACKAGE,
        bridge_version = workbridge_bridge::VERSION,
        "module B reached through bridge"
    );
    format!("{BRIDGE_PREFIX}{bridged}")
}
