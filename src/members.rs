//! Workspace member info: which crates this binary was composed from.
//!
//! Each member reports its own Cargo version, so the report shows that
//! members are versioned independently even when built together.

use serde::{Deserialize, Serialize};

// ── MemberRole ────────────────────────────────────────────────────────────────

/// Position of a member in the call chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Root binary; calls the others.
    Entry,
    /// Module reached directly from the entry point.
    Module,
    /// Forwards calls from one module to another.
    Bridge,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Entry => "entry",
            MemberRole::Module => "module",
            MemberRole::Bridge => "bridge",
        }
    }
}

// ── MemberInfo ────────────────────────────────────────────────────────────────

/// One workspace member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    /// Short identifier (e.g. `"module-a"`, `"bridge"`).
    pub id: String,
    /// Cargo package name.
    pub package: String,
    /// Cargo package version.
    pub version: String,
    pub role: MemberRole,
    /// Ids of the members this one calls into.
    pub depends_on: Vec<String>,
}

impl MemberInfo {
    fn new(id: &str, package: &str, version: &str, role: MemberRole, depends_on: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            package: package.to_string(),
            version: version.to_string(),
            role,
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// All workspace members in call order: root, module A, bridge, module B.
pub fn members() -> Vec<MemberInfo> {
    vec![
        MemberInfo::new(
            "root",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            MemberRole::Entry,
            &["module-a", "module-b"],
        ),
        MemberInfo::new(
            "module-a",
            workbridge_module_a::PACKAGE,
            workbridge_module_a::VERSION,
            MemberRole::Module,
            &["bridge"],
        ),
        MemberInfo::new(
            "bridge",
            workbridge_bridge::PACKAGE,
            workbridge_bridge::VERSION,
            MemberRole::Bridge,
            &["module-b"],
        ),
        MemberInfo::new(
            "module-b",
            workbridge_module_b::PACKAGE,
            workbridge_module_b::VERSION,
            MemberRole::Module,
            &[],
        ),
    ]
}

/// Render members as aligned rows: `id  package  version  role  -> deps`.
pub fn render_table(members: &[MemberInfo]) -> String {
    let id_w = members.iter().map(|m| m.id.len()).max().unwrap_or(0);
    let pkg_w = members.iter().map(|m| m.package.len()).max().unwrap_or(0);
    let ver_w = members.iter().map(|m| m.version.len()).max().unwrap_or(0);
    let role_w = members.iter().map(|m| m.role.as_str().len()).max().unwrap_or(0);

    let mut out = String::new();
    for m in members {
        let deps = if m.depends_on.is_empty() {
            "-".to_string()
        } else {
            m.depends_on.join(", ")
        };
        out.push_str(&format!(
            "{:<id_w$}  {:<pkg_w$}  {:<ver_w$}  {:<role_w$}  -> {deps}\n",
            m.id,
            m.package,
            m.version,
            m.role.as_str(),
        ));
    }
    out
}
