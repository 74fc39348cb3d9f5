//! The fully-resolved configuration record
//!
//! Output of the normalizer + resolver stages: every field is typed, every
//! default applied, every fallback computed. Paths are still plain strings
//! here; the validator turns them into `DataPath` values before emission.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::ConfigMode;

/// Storage engine for the relay's event database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbEngine {
    #[default]
    Badger,
    Lmdb,
}

impl DbEngine {
    /// Parse the submitted value; anything unrecognized resolves to the
    /// default engine.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("lmdb") => DbEngine::Lmdb,
            _ => DbEngine::Badger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DbEngine::Badger => "badger",
            DbEngine::Lmdb => "lmdb",
        }
    }
}

impl fmt::Display for DbEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backup destination provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupProvider {
    #[default]
    None,
    S3,
}

impl BackupProvider {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("s3") => BackupProvider::S3,
            _ => BackupProvider::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BackupProvider::None => "none",
            BackupProvider::S3 => "s3",
        }
    }
}

impl fmt::Display for BackupProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relay process log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_uppercase()).as_deref() {
            Some("TRACE") => LogLevel::Trace,
            Some("DEBUG") => LogLevel::Debug,
            Some("WARN") => LogLevel::Warn,
            Some("ERROR") => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owner identity applied across all relay groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub npub: String,
    pub username: String,
}

/// Network binding and advertised URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayEndpoint {
    pub url: String,
    pub port: i64,
    pub bind_address: String,
}

/// Event database configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub engine: DbEngine,
    pub lmdb_mapsize: i64,
}

/// A refill-rate / refill-interval / burst-capacity triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBucket {
    pub tokens_per_interval: i64,
    pub interval_seconds: i64,
    pub max_tokens: i64,
}

/// Rate limiting for one relay group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimits {
    pub event: TokenBucket,
    pub allow_empty_filters: bool,
    pub allow_complex_filters: bool,
    pub connection: TokenBucket,
}

/// One of the four relay groups (private, chat, outbox, inbox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayGroup {
    pub name: String,
    /// Owner-override key; already resolved against the global owner.
    pub npub: String,
    pub description: String,
    pub icon: String,
    pub limits: RateLimits,
}

/// Web-of-trust scoping for the chat relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWot {
    pub depth: i64,
    pub refresh_interval_hours: i64,
    pub minimum_followers: i64,
}

/// Historical-note import settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub start_date: String,
    pub query_interval_seconds: i64,
    pub owner_fetch_timeout_seconds: i64,
    pub tagged_fetch_timeout_seconds: i64,
    pub relays: Vec<String>,
    pub relays_file: String,
}

/// S3 credentials; only meaningful when the provider is `s3`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct S3Settings {
    pub access_key_id: String,
    pub secret_key: String,
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSettings {
    pub provider: BackupProvider,
    pub interval_hours: i64,
    pub s3: S3Settings,
}

/// Broadcast fan-out list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlastrSettings {
    pub relays: Vec<String>,
    pub relays_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub timezone: String,
}

/// The wizard triple, captured in simple mode for form pre-fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SimplePersist {
    pub npub: String,
    pub username: String,
    pub relay_url: String,
}

/// The fully-resolved, internally consistent configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalConfig {
    pub mode: ConfigMode,
    pub tor_address: Option<String>,
    pub lan_address: Option<String>,
    pub owner: Owner,
    pub relay: RelayEndpoint,
    pub database: Database,
    pub blossom_path: String,
    pub private: RelayGroup,
    pub chat: RelayGroup,
    pub chat_wot: ChatWot,
    pub outbox: RelayGroup,
    pub inbox: RelayGroup,
    pub inbox_pull_interval_seconds: i64,
    pub import: ImportSettings,
    pub backup: BackupSettings,
    pub blastr: BlastrSettings,
    pub wot_fetch_timeout_seconds: i64,
    pub logging: LoggingSettings,
    /// Present only when the submission came through the wizard.
    pub simple_persist: Option<SimplePersist>,
}
