//! Validated `/data`-rooted artifact paths

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Root of the persistent data volume inside the container.
pub const DATA_ROOT: &str = "/data";

/// An operator-declared artifact path, validated to live under `/data`.
///
/// Stores both the absolute form (written into generated files) and the
/// root-relative form (used for directory creation and writes relative to
/// the artifact root).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataPath {
    absolute: String,
    relative: String,
}

impl DataPath {
    /// Parse and validate a raw path value.
    ///
    /// `field` is the human-readable field label used in error messages,
    /// e.g. "Import relays file".
    pub fn parse(raw: &str, field: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let Some(relative) = trimmed.strip_prefix("/data/") else {
            return Err(Error::OutsideDataRoot {
                field: field.to_string(),
                path: trimmed.to_string(),
            });
        };
        let relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            return Err(Error::MissingFileName {
                field: field.to_string(),
                path: trimmed.to_string(),
            });
        }
        Ok(Self {
            absolute: trimmed.to_string(),
            relative: relative.to_string(),
        })
    }

    /// Absolute form, e.g. `/data/start9/relays_import.json`.
    pub fn absolute(&self) -> &str {
        &self.absolute
    }

    /// Root-relative form, e.g. `start9/relays_import.json`.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Final path component.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative)
    }

    /// Resolve the relative form under a concrete artifact root.
    pub fn resolve_under(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }
}

impl std::fmt::Display for DataPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.absolute)
    }
}
