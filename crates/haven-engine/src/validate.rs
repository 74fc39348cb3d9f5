//! Stage 3: semantic validation
//!
//! Runs after resolution and before any write. A validation failure aborts
//! the submission with nothing touched on disk.

use haven_fs::DataPath;
use haven_schema::CanonicalConfig;

use crate::error::{Error, Result};

/// The declared paths, containment-checked and ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedArtifacts {
    pub import_relays_file: DataPath,
    pub blastr_relays_file: DataPath,
    pub blossom_path: DataPath,
}

/// Enforce the hard invariants: owner key present and `npub1`-prefixed,
/// every declared path `/data`-rooted with a file-name component.
pub fn validate(config: &CanonicalConfig) -> Result<ValidatedArtifacts> {
    if config.owner.npub.is_empty() {
        return Err(Error::MissingOwnerNpub);
    }
    if !config.owner.npub.starts_with("npub1") {
        return Err(Error::InvalidOwnerNpub);
    }

    let import_relays_file = DataPath::parse(&config.import.relays_file, "Import relays file")?;
    let blastr_relays_file = DataPath::parse(&config.blastr.relays_file, "Blastr relays file")?;
    let blossom_path = DataPath::parse(&config.blossom_path, "Blossom media path")?;

    tracing::debug!("submission validated");
    Ok(ValidatedArtifacts {
        import_relays_file,
        blastr_relays_file,
        blossom_path,
    })
}
