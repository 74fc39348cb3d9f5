//! Status properties derived from the persisted snapshot

use std::path::Path;

use serde::Serialize;

use haven_fs::ArtifactStore;
use haven_schema::PersistedSnapshot;
use haven_schema::snapshot::SNAPSHOT_FILE;

/// Message shown while the service has not produced a snapshot yet.
pub const NOT_READY_MESSAGE: &str =
    "Could not load properties. The service is still starting...";

/// Human-readable status fields for the operator panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatusProperties {
    /// Main relay endpoint over Tor, recommended for privacy.
    pub tor_websocket: Option<String>,
    /// LAN relay endpoint, for local testing.
    pub lan_websocket: Option<String>,
    pub owner_npub: String,
    pub configuration_mode: String,
    pub relay_url: String,
    pub backup_provider: String,
    pub import_relay_count: usize,
    pub blastr_relay_count: usize,
}

/// Either the derived status fields or the fixed not-ready payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertiesOutcome {
    NotReady {
        #[serde(rename = "not-ready")]
        message: String,
    },
    Ready(StatusProperties),
}

impl PropertiesOutcome {
    fn not_ready() -> Self {
        PropertiesOutcome::NotReady {
            message: NOT_READY_MESSAGE.to_string(),
        }
    }
}

/// Derive status properties from the snapshot under `root`.
///
/// Any read failure (absent directory, absent file, unparsable YAML)
/// degrades to the not-ready payload rather than an error.
pub fn derive_properties(root: &Path) -> PropertiesOutcome {
    let path = root.join(SNAPSHOT_FILE);
    let snapshot: PersistedSnapshot = match ArtifactStore::new().load(&path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not load snapshot");
            return PropertiesOutcome::not_ready();
        }
    };

    PropertiesOutcome::Ready(StatusProperties {
        tor_websocket: snapshot.tor_address.as_deref().map(|a| format!("ws://{a}")),
        lan_websocket: snapshot.lan_address.as_deref().map(|a| format!("wss://{a}")),
        owner_npub: snapshot.haven.owner.npub,
        configuration_mode: snapshot.configuration_mode.to_string(),
        relay_url: snapshot.haven.relay.url,
        backup_provider: snapshot.haven.backup.provider,
        import_relay_count: snapshot.haven.import.relays.len(),
        blastr_relay_count: snapshot.haven.blastr.relays.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_schema::ConfigMode;
    use haven_schema::snapshot::{
        BackupSnapshot, HavenSnapshot, ImportSnapshot, OwnerSnapshot, RelayListSnapshot,
        RelaySnapshot,
    };
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_snapshot() -> PersistedSnapshot {
        PersistedSnapshot {
            configuration_mode: ConfigMode::Full,
            tor_address: Some("havenabc.onion".into()),
            lan_address: Some("haven.local".into()),
            haven: HavenSnapshot {
                owner: OwnerSnapshot {
                    npub: "npub1abc".into(),
                    username: "Alice".into(),
                },
                relay: RelaySnapshot {
                    url: "wss://relay.example.com".into(),
                    port: 3355,
                },
                backup: BackupSnapshot {
                    provider: "s3".into(),
                    interval_hours: 24,
                },
                blastr: RelayListSnapshot {
                    relays: vec!["a.com".into(), "b.com".into()],
                    file: "/data/start9/relays_blastr.json".into(),
                },
                import: ImportSnapshot {
                    relays: vec!["a.com".into()],
                    file: "/data/start9/relays_import.json".into(),
                    start_date: "2023-01-20".into(),
                },
            },
            simple_config: None,
        }
    }

    #[test]
    fn test_missing_snapshot_degrades_to_not_ready() {
        let temp = TempDir::new().unwrap();
        let outcome = derive_properties(temp.path());
        assert_eq!(
            outcome,
            PropertiesOutcome::NotReady {
                message: NOT_READY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_unparsable_snapshot_degrades_to_not_ready() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("start9");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yaml"), ": not yaml :\n\t-").unwrap();

        let outcome = derive_properties(temp.path());
        assert!(matches!(outcome, PropertiesOutcome::NotReady { .. }));
    }

    #[test]
    fn test_properties_derived_from_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);
        ArtifactStore::new().save(&path, &sample_snapshot()).unwrap();

        let PropertiesOutcome::Ready(props) = derive_properties(temp.path()) else {
            panic!("expected ready properties");
        };
        assert_eq!(props.tor_websocket.as_deref(), Some("ws://havenabc.onion"));
        assert_eq!(props.lan_websocket.as_deref(), Some("wss://haven.local"));
        assert_eq!(props.owner_npub, "npub1abc");
        assert_eq!(props.configuration_mode, "full");
        assert_eq!(props.relay_url, "wss://relay.example.com");
        assert_eq!(props.backup_provider, "s3");
        assert_eq!(props.import_relay_count, 1);
        assert_eq!(props.blastr_relay_count, 2);
    }

    #[test]
    fn test_not_ready_serializes_with_fixed_key() {
        let json = serde_json::to_string(&PropertiesOutcome::not_ready()).unwrap();
        assert!(json.contains("\"not-ready\""));
        assert!(json.contains("still starting"));
    }
}
