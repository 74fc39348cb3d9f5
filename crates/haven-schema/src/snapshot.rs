//! The persisted YAML snapshot
//!
//! Written in full after every successful submission and read back by the
//! properties derivation and the simple-mode form pre-fill. The key layout
//! is load-bearing: kebab-case at the top level, snake_case inside the
//! `haven` sub-document.

use serde::{Deserialize, Serialize};

use crate::canonical::{CanonicalConfig, SimplePersist};
use crate::mode::ConfigMode;

/// Fixed artifact-root-relative location of the snapshot.
pub const SNAPSHOT_FILE: &str = "start9/config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PersistedSnapshot {
    pub configuration_mode: ConfigMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tor_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lan_address: Option<String>,
    pub haven: HavenSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_config: Option<SimplePersist>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HavenSnapshot {
    pub owner: OwnerSnapshot,
    pub relay: RelaySnapshot,
    pub backup: BackupSnapshot,
    pub blastr: RelayListSnapshot,
    pub import: ImportSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSnapshot {
    pub npub: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelaySnapshot {
    pub url: String,
    pub port: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub provider: String,
    pub interval_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayListSnapshot {
    pub relays: Vec<String>,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSnapshot {
    pub relays: Vec<String>,
    pub file: String,
    pub start_date: String,
}

impl PersistedSnapshot {
    /// Reduce a resolved configuration to the persisted subset.
    pub fn from_canonical(config: &CanonicalConfig) -> Self {
        Self {
            configuration_mode: config.mode,
            tor_address: config.tor_address.clone(),
            lan_address: config.lan_address.clone(),
            haven: HavenSnapshot {
                owner: OwnerSnapshot {
                    npub: config.owner.npub.clone(),
                    username: config.owner.username.clone(),
                },
                relay: RelaySnapshot {
                    url: config.relay.url.clone(),
                    port: config.relay.port,
                },
                backup: BackupSnapshot {
                    provider: config.backup.provider.to_string(),
                    interval_hours: config.backup.interval_hours,
                },
                blastr: RelayListSnapshot {
                    relays: config.blastr.relays.clone(),
                    file: config.blastr.relays_file.clone(),
                },
                import: ImportSnapshot {
                    relays: config.import.relays.clone(),
                    file: config.import.relays_file.clone(),
                    start_date: config.import.start_date.clone(),
                },
            },
            simple_config: config.simple_persist.clone(),
        }
    }
}
