//! Declared defaults for every resolvable field
//!
//! Single source of truth for the fallback side of the resolver's
//! "explicit value -> computed fallback -> declared default" chain.

/// Built-in seed list used when the operator leaves a relay list empty.
pub const DEFAULT_RELAY_LIST: [&str; 20] = [
    "relay.damus.io",
    "nos.lol",
    "relay.nostr.band",
    "relay.snort.social",
    "nostr.land",
    "nostr.mom",
    "relay.nos.social",
    "relay.primal.net",
    "no.str.cr",
    "nostr21.com",
    "nostrue.com",
    "wot.utxo.one",
    "nostrelites.org",
    "wot.nostr.party",
    "wot.sovbit.host",
    "wot.girino.org",
    "relay.lexingtonbitcoin.org",
    "zap.watch",
    "satsage.xyz",
    "wons.calva.dev",
];

pub const DEFAULT_RELAY_PORT: i64 = 3355;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub const DEFAULT_LMDB_MAPSIZE: i64 = 273_000_000_000;
pub const DEFAULT_BLOSSOM_PATH: &str = "/data/blossom";

pub const DEFAULT_IMPORT_START_DATE: &str = "2023-01-20";
pub const DEFAULT_IMPORT_QUERY_INTERVAL_SECONDS: i64 = 600;
pub const DEFAULT_IMPORT_OWNER_FETCH_TIMEOUT_SECONDS: i64 = 60;
pub const DEFAULT_IMPORT_TAGGED_FETCH_TIMEOUT_SECONDS: i64 = 120;
pub const DEFAULT_IMPORT_RELAYS_FILE: &str = "/data/start9/relays_import.json";

pub const DEFAULT_BLASTR_RELAYS_FILE: &str = "/data/start9/relays_blastr.json";

pub const DEFAULT_BACKUP_INTERVAL_HOURS: i64 = 24;

pub const DEFAULT_WOT_FETCH_TIMEOUT_SECONDS: i64 = 60;

pub const DEFAULT_TIMEZONE: &str = "UTC";

pub const DEFAULT_CHAT_WOT_DEPTH: i64 = 3;
pub const DEFAULT_CHAT_WOT_REFRESH_INTERVAL_HOURS: i64 = 24;
pub const DEFAULT_CHAT_MINIMUM_FOLLOWERS: i64 = 3;

pub const DEFAULT_INBOX_PULL_INTERVAL_SECONDS: i64 = 600;

/// Per-group fixed label, default description, and rate-limit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDefaults {
    pub label: &'static str,
    pub description: &'static str,
    pub event_tokens_per_interval: i64,
    pub event_interval_seconds: i64,
    pub event_max_tokens: i64,
    pub allow_empty_filters: bool,
    pub allow_complex_filters: bool,
    pub connection_tokens_per_interval: i64,
    pub connection_interval_seconds: i64,
    pub connection_max_tokens: i64,
}

pub const PRIVATE_RELAY: GroupDefaults = GroupDefaults {
    label: "Private Relay",
    description: "A safe place to store my drafts and ecash",
    event_tokens_per_interval: 50,
    event_interval_seconds: 1,
    event_max_tokens: 100,
    allow_empty_filters: true,
    allow_complex_filters: true,
    connection_tokens_per_interval: 3,
    connection_interval_seconds: 5,
    connection_max_tokens: 9,
};

pub const CHAT_RELAY: GroupDefaults = GroupDefaults {
    label: "Chat Relay",
    description: "A relay for private chats",
    event_tokens_per_interval: 50,
    event_interval_seconds: 1,
    event_max_tokens: 100,
    allow_empty_filters: false,
    allow_complex_filters: false,
    connection_tokens_per_interval: 3,
    connection_interval_seconds: 3,
    connection_max_tokens: 9,
};

pub const OUTBOX_RELAY: GroupDefaults = GroupDefaults {
    label: "Outbox Relay",
    description: "A relay and Blossom server for public messages and media",
    event_tokens_per_interval: 10,
    event_interval_seconds: 60,
    event_max_tokens: 100,
    allow_empty_filters: false,
    allow_complex_filters: false,
    connection_tokens_per_interval: 3,
    connection_interval_seconds: 1,
    connection_max_tokens: 9,
};

pub const INBOX_RELAY: GroupDefaults = GroupDefaults {
    label: "Inbox Relay",
    description: "Send your interactions with my notes here",
    event_tokens_per_interval: 10,
    event_interval_seconds: 1,
    event_max_tokens: 20,
    allow_empty_filters: false,
    allow_complex_filters: false,
    connection_tokens_per_interval: 3,
    connection_interval_seconds: 1,
    connection_max_tokens: 9,
};

/// Default relay list materialized as owned strings.
pub fn default_relay_list() -> Vec<String> {
    DEFAULT_RELAY_LIST.iter().map(|s| s.to_string()).collect()
}
