//! Format-agnostic document loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Extension-keyed document store.
///
/// Detects format from the file extension and handles
/// serialization/deserialization transparently:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default)]
pub struct ArtifactStore;

impl ArtifactStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document from a file, format detected from the extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = extension_of(path);

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension,
            }),
        }
    }

    /// Save a document to a file, format determined from the extension.
    ///
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let extension = extension_of(path);

        let content = match extension.as_str() {
            "toml" => toml::to_string_pretty(value).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::to_string_pretty(value).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::to_string(value).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension,
                });
            }
        };

        io::write_atomic(path, content.as_bytes())
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        port: u16,
    }

    fn sample() -> Doc {
        Doc {
            name: "haven".into(),
            port: 3355,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        let store = ArtifactStore::new();

        store.save(&path, &sample()).unwrap();
        let loaded: Doc = store.load(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.yaml");
        let store = ArtifactStore::new();

        store.save(&path, &sample()).unwrap();
        let loaded: Doc = store.load(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_toml_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.toml");
        let store = ArtifactStore::new();

        store.save(&path, &sample()).unwrap();
        let loaded: Doc = store.load(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.ini");
        let store = ArtifactStore::new();

        let err = store.save(&path, &sample()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = ArtifactStore::new();

        let err = store.load::<Doc>(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
