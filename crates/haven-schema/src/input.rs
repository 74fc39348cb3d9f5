//! The raw configuration object submitted by the operator
//!
//! Field names follow the host platform's kebab-case form schema. Every
//! section and leaf is optional: the form may omit anything, and the
//! resolver owns all defaulting. Numeric and boolean leaves are kept as
//! `serde_json::Value` because the form layer may deliver them as numbers,
//! booleans, or strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The untyped submission, keyed by `configuration-mode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawInput {
    pub configuration_mode: Option<String>,
    pub tor_address: Option<String>,
    pub lan_address: Option<String>,
    pub simple_config: Option<SimpleInput>,
    pub full_config: Option<FullInput>,
}

/// The three-field wizard shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SimpleInput {
    pub npub: Option<String>,
    pub username: Option<String>,
    pub relay_url: Option<String>,
}

/// The expert shape: every Haven option, section by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FullInput {
    pub owner: Option<OwnerSection>,
    pub relay: Option<RelaySection>,
    pub database: Option<DatabaseSection>,
    pub paths: Option<PathsSection>,
    pub private_relay: Option<RelayGroupSection>,
    pub private_rate_limits: Option<RateLimitSection>,
    pub chat_relay: Option<ChatRelaySection>,
    pub chat_rate_limits: Option<RateLimitSection>,
    pub outbox_relay: Option<RelayGroupSection>,
    pub outbox_rate_limits: Option<RateLimitSection>,
    pub inbox_relay: Option<InboxRelaySection>,
    pub inbox_rate_limits: Option<RateLimitSection>,
    pub import: Option<ImportSection>,
    pub backup: Option<BackupSection>,
    pub blastr: Option<BlastrSection>,
    pub wot: Option<WotSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OwnerSection {
    pub npub: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RelaySection {
    pub url: Option<String>,
    pub port: Option<Value>,
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DatabaseSection {
    pub engine: Option<String>,
    pub lmdb_mapsize: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PathsSection {
    pub blossom_path: Option<String>,
}

/// Identity fields shared by all four relay groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RelayGroupSection {
    pub name: Option<String>,
    pub npub: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Chat relay: group identity plus web-of-trust scoping knobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChatRelaySection {
    #[serde(flatten)]
    pub group: RelayGroupSection,
    pub wot_depth: Option<Value>,
    pub wot_refresh_interval_hours: Option<Value>,
    pub minimum_followers: Option<Value>,
}

/// Inbox relay: group identity plus the pull interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InboxRelaySection {
    #[serde(flatten)]
    pub group: RelayGroupSection,
    pub pull_interval_seconds: Option<Value>,
}

/// Event and connection token buckets plus filter-permission flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RateLimitSection {
    pub event_ip_tokens_per_interval: Option<Value>,
    pub event_ip_interval_seconds: Option<Value>,
    pub event_ip_max_tokens: Option<Value>,
    pub allow_empty_filters: Option<Value>,
    pub allow_complex_filters: Option<Value>,
    pub connection_tokens_per_interval: Option<Value>,
    pub connection_interval_seconds: Option<Value>,
    pub connection_max_tokens: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ImportSection {
    pub start_date: Option<String>,
    pub query_interval_seconds: Option<Value>,
    pub owner_fetch_timeout_seconds: Option<Value>,
    pub tagged_fetch_timeout_seconds: Option<Value>,
    /// Free text, one relay per line or comma-separated.
    pub relays: Option<String>,
    pub relays_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackupSection {
    pub provider: Option<String>,
    pub interval_hours: Option<Value>,
    pub s3: Option<S3Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct S3Section {
    pub access_key_id: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlastrSection {
    /// Free text, one relay per line or comma-separated.
    pub relays: Option<String>,
    pub relays_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WotSection {
    pub fetch_timeout_seconds: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingSection {
    pub level: Option<String>,
    pub timezone: Option<String>,
}
