//! Version-migration pass-through
//!
//! Migration work is owned by external per-direction scripts; this module
//! only describes which script to invoke. The engine has no migration
//! logic of its own.

use serde::Serialize;

/// Hook invoking the external migration script for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptHook {
    /// Version pattern the hook applies to.
    pub version: &'static str,
    /// Arguments passed to the external script.
    pub args: &'static [&'static str],
}

/// The per-direction migration hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationPlan {
    pub from: ScriptHook,
    pub to: ScriptHook,
}

/// Every version, both directions, maps to the external script.
pub fn plan() -> MigrationPlan {
    MigrationPlan {
        from: ScriptHook {
            version: "*",
            args: &["from"],
        },
        to: ScriptHook {
            version: "*",
            args: &["to"],
        },
    }
}
