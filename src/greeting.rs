//! The three lines printed by a default run.
//!
//! Line order follows the call depth: module A directly, module B directly,
//! then module A reaching module B through the bridge crate.

use std::io::Write;

use tracing::debug;

pub fn lines() -> [String; 3] {
    let direct_a = workbridge_module_a::hello();
    debug!(member = workbridge_module_a::PACKAGE, "called directly");
    let direct_b = workbridge_module_b::hello();
    debug!(member = workbridge_module_b::PACKAGE, "called directly");
    let bridged = workbridge_module_a::hello_via_bridge();
    debug!(
        path = "root -> module-a -> bridge -> module-b",
        "called through bridge"
    );

    [direct_a.to_string(), direct_b.to_string(), bridged]
}

/// Write each line followed by `\n`.
pub fn write_to<W: Write>(out: &mut W) -> std::io::Result<()> {
    for line in lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
