//! Stage 4b: artifact emission
//!
//! Writes the four artifacts in fixed order: environment file, import
//! relay list, blastr relay list, YAML snapshot. Each write is atomic on
//! its own; there is no cross-file rollback. A failure partway leaves
//! earlier artifacts updated and later ones untouched.

use std::path::{Path, PathBuf};

use haven_fs::io;
use haven_schema::{CanonicalConfig, PersistedSnapshot};

use crate::env::render_env;
use crate::error::{Error, Result};
use crate::validate::ValidatedArtifacts;

/// Fixed artifact-root-relative location of the environment file.
pub const ENV_FILE: &str = "start9/haven.env";
pub use haven_schema::snapshot::SNAPSHOT_FILE;

/// Where each artifact of a successful submission landed.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactPaths {
    pub env_file: PathBuf,
    pub import_relays: PathBuf,
    pub blastr_relays: PathBuf,
    pub snapshot: PathBuf,
}

/// Render a relay list as a pretty-printed JSON array with a trailing
/// newline.
fn render_relay_list(relays: &[String]) -> Result<String> {
    let json = serde_json::to_string_pretty(relays).map_err(|e| Error::Render {
        artifact: "relay list",
        message: e.to_string(),
    })?;
    Ok(format!("{json}\n"))
}

/// Write all artifacts for a validated configuration under `root`.
pub fn emit(
    config: &CanonicalConfig,
    artifacts: &ValidatedArtifacts,
    root: &Path,
) -> Result<ArtifactPaths> {
    let env_file = root.join(ENV_FILE);
    io::write_text(&env_file, &render_env(config))?;

    let import_relays = artifacts.import_relays_file.resolve_under(root);
    io::write_text(&import_relays, &render_relay_list(&config.import.relays)?)?;

    let blastr_relays = artifacts.blastr_relays_file.resolve_under(root);
    io::write_text(&blastr_relays, &render_relay_list(&config.blastr.relays)?)?;

    let snapshot_file = root.join(SNAPSHOT_FILE);
    let snapshot = PersistedSnapshot::from_canonical(config);
    let yaml = serde_yaml::to_string(&snapshot).map_err(|e| Error::Render {
        artifact: "configuration snapshot",
        message: e.to_string(),
    })?;
    io::write_text(&snapshot_file, &yaml)?;

    tracing::debug!(root = %root.display(), "artifacts emitted");
    Ok(ArtifactPaths {
        env_file,
        import_relays,
        blastr_relays,
        snapshot: snapshot_file,
    })
}
