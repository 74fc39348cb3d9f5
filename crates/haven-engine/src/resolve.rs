//! Stage 2: field resolution
//!
//! Applies, per field: explicit submitted value -> computed fallback ->
//! declared default, and coerces every leaf to its target type. Coercion
//! never fails the submission; malformed values log a warning and resolve
//! to the declared default.

use chrono::NaiveDate;
use serde_json::Value;

use haven_schema::canonical::{
    BackupProvider, BackupSettings, BlastrSettings, CanonicalConfig, ChatWot, Database, DbEngine,
    ImportSettings, LogLevel, LoggingSettings, Owner, RateLimits, RelayEndpoint, RelayGroup,
    S3Settings, TokenBucket,
};
use haven_schema::defaults::{self, GroupDefaults};
use haven_schema::input::{RateLimitSection, RelayGroupSection};

use crate::normalize::{ConfigSource, NormalizedInput};

/// Normalize an advertised relay URL.
///
/// Empty input synthesizes `ws://localhost:<port>`. `http`/`https` schemes
/// are rewritten to their websocket counterparts; bare hosts get `ws://`
/// prepended. Trailing slashes and padding are stripped, which makes the
/// function idempotent.
pub fn normalize_relay_url(raw: &str, port: i64) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return format!("ws://localhost:{port}");
    }
    let (scheme, rest) = if let Some(rest) = trimmed.strip_prefix("ws://") {
        ("ws", rest)
    } else if let Some(rest) = trimmed.strip_prefix("wss://") {
        ("wss", rest)
    } else if let Some(rest) = trimmed.strip_prefix("http://") {
        ("ws", rest)
    } else if let Some(rest) = trimmed.strip_prefix("https://") {
        ("wss", rest)
    } else {
        ("ws", trimmed)
    };
    let body = rest.trim_end_matches(|c: char| c == '/' || c.is_whitespace());
    format!("{scheme}://{body}")
}

/// Parse a free-text relay list: split on commas and line breaks, trim,
/// drop empties. Absent or empty input substitutes the built-in list.
pub fn parse_relay_list(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => defaults::default_relay_list(),
        Some(raw) => raw
            .split([',', '\n', '\r'])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Coerce a loose value to an integer; unparsable input resolves to the
/// declared default.
fn coerce_i64(value: Option<&Value>, field: &str, fallback: i64) -> i64 {
    let Some(value) = value else {
        return fallback;
    };
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let t = s.trim();
            t.parse::<i64>()
                .ok()
                .or_else(|| t.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(field, fallback, "malformed numeric value, using default");
        fallback
    })
}

/// Coerce a loose value to a boolean; accepts native booleans and
/// case-insensitive `"true"`/`"false"` strings.
fn coerce_bool(value: Option<&Value>, field: &str, fallback: bool) -> bool {
    let Some(value) = value else {
        return fallback;
    };
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(field, fallback, "malformed boolean value, using default");
        fallback
    })
}

/// Validate an ISO date string; empty or malformed input resolves to the
/// declared default.
fn coerce_date(raw: Option<&str>, field: &str, fallback: &str) -> String {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(_) => trimmed.to_string(),
        Err(_) => {
            tracing::warn!(field, fallback, "malformed date value, using default");
            fallback.to_string()
        }
    }
}

/// Blank custom name falls back to `"<username>'s <Label>"`, or the bare
/// label when no display name is set.
fn fallback_name(custom: Option<&str>, username: &str, label: &str) -> String {
    let trimmed = custom.unwrap_or("").trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    if !username.is_empty() {
        return format!("{username}'s {label}");
    }
    label.to_string()
}

/// Blank relay-group override resolves to the global owner key.
fn owner_or(value: Option<&str>, owner: &str) -> String {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        owner.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trimmed value, or the declared default when blank.
fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

fn resolve_limits(
    section: Option<&RateLimitSection>,
    spec: &GroupDefaults,
    prefix: &str,
) -> RateLimits {
    let s = section.cloned().unwrap_or_default();
    RateLimits {
        event: TokenBucket {
            tokens_per_interval: coerce_i64(
                s.event_ip_tokens_per_interval.as_ref(),
                &format!("{prefix}.event-ip-tokens-per-interval"),
                spec.event_tokens_per_interval,
            ),
            interval_seconds: coerce_i64(
                s.event_ip_interval_seconds.as_ref(),
                &format!("{prefix}.event-ip-interval-seconds"),
                spec.event_interval_seconds,
            ),
            max_tokens: coerce_i64(
                s.event_ip_max_tokens.as_ref(),
                &format!("{prefix}.event-ip-max-tokens"),
                spec.event_max_tokens,
            ),
        },
        allow_empty_filters: coerce_bool(
            s.allow_empty_filters.as_ref(),
            &format!("{prefix}.allow-empty-filters"),
            spec.allow_empty_filters,
        ),
        allow_complex_filters: coerce_bool(
            s.allow_complex_filters.as_ref(),
            &format!("{prefix}.allow-complex-filters"),
            spec.allow_complex_filters,
        ),
        connection: TokenBucket {
            tokens_per_interval: coerce_i64(
                s.connection_tokens_per_interval.as_ref(),
                &format!("{prefix}.connection-tokens-per-interval"),
                spec.connection_tokens_per_interval,
            ),
            interval_seconds: coerce_i64(
                s.connection_interval_seconds.as_ref(),
                &format!("{prefix}.connection-interval-seconds"),
                spec.connection_interval_seconds,
            ),
            max_tokens: coerce_i64(
                s.connection_max_tokens.as_ref(),
                &format!("{prefix}.connection-max-tokens"),
                spec.connection_max_tokens,
            ),
        },
    }
}

fn resolve_group(
    section: Option<&RelayGroupSection>,
    limits: Option<&RateLimitSection>,
    spec: &GroupDefaults,
    owner: &Owner,
    prefix: &str,
) -> RelayGroup {
    let s = section.cloned().unwrap_or_default();
    RelayGroup {
        name: fallback_name(s.name.as_deref(), &owner.username, spec.label),
        npub: owner_or(s.npub.as_deref(), &owner.npub),
        description: non_empty_or(s.description.as_deref(), spec.description),
        icon: trimmed(s.icon.as_deref()),
        limits: resolve_limits(limits, spec, prefix),
    }
}

/// Resolve every field of the normalized submission into the canonical
/// configuration record.
pub fn resolve(input: NormalizedInput) -> CanonicalConfig {
    let (seed, simple_persist) = match input.source {
        ConfigSource::Simple(seed) => {
            let persist = seed.persist();
            (seed.into_full(), Some(persist))
        }
        ConfigSource::Full(full) => (*full, None),
    };

    let owner_section = seed.owner.unwrap_or_default();
    let owner = Owner {
        npub: trimmed(owner_section.npub.as_deref()),
        username: trimmed(owner_section.username.as_deref()),
    };

    let relay_section = seed.relay.unwrap_or_default();
    let port = coerce_i64(
        relay_section.port.as_ref(),
        "relay.port",
        defaults::DEFAULT_RELAY_PORT,
    );
    let relay = RelayEndpoint {
        url: normalize_relay_url(relay_section.url.as_deref().unwrap_or(""), port),
        port,
        bind_address: non_empty_or(
            relay_section.bind_address.as_deref(),
            defaults::DEFAULT_BIND_ADDRESS,
        ),
    };

    let database_section = seed.database.unwrap_or_default();
    let database = Database {
        engine: DbEngine::from_raw(database_section.engine.as_deref()),
        lmdb_mapsize: coerce_i64(
            database_section.lmdb_mapsize.as_ref(),
            "database.lmdb-mapsize",
            defaults::DEFAULT_LMDB_MAPSIZE,
        ),
    };

    let paths_section = seed.paths.unwrap_or_default();
    let blossom_path = non_empty_or(
        paths_section.blossom_path.as_deref(),
        defaults::DEFAULT_BLOSSOM_PATH,
    );

    let private = resolve_group(
        seed.private_relay.as_ref(),
        seed.private_rate_limits.as_ref(),
        &defaults::PRIVATE_RELAY,
        &owner,
        "private-rate-limits",
    );

    let chat_section = seed.chat_relay.unwrap_or_default();
    let chat = resolve_group(
        Some(&chat_section.group),
        seed.chat_rate_limits.as_ref(),
        &defaults::CHAT_RELAY,
        &owner,
        "chat-rate-limits",
    );
    let chat_wot = ChatWot {
        depth: coerce_i64(
            chat_section.wot_depth.as_ref(),
            "chat-relay.wot-depth",
            defaults::DEFAULT_CHAT_WOT_DEPTH,
        ),
        refresh_interval_hours: coerce_i64(
            chat_section.wot_refresh_interval_hours.as_ref(),
            "chat-relay.wot-refresh-interval-hours",
            defaults::DEFAULT_CHAT_WOT_REFRESH_INTERVAL_HOURS,
        ),
        minimum_followers: coerce_i64(
            chat_section.minimum_followers.as_ref(),
            "chat-relay.minimum-followers",
            defaults::DEFAULT_CHAT_MINIMUM_FOLLOWERS,
        ),
    };

    let outbox = resolve_group(
        seed.outbox_relay.as_ref(),
        seed.outbox_rate_limits.as_ref(),
        &defaults::OUTBOX_RELAY,
        &owner,
        "outbox-rate-limits",
    );

    let inbox_section = seed.inbox_relay.unwrap_or_default();
    let inbox = resolve_group(
        Some(&inbox_section.group),
        seed.inbox_rate_limits.as_ref(),
        &defaults::INBOX_RELAY,
        &owner,
        "inbox-rate-limits",
    );
    let inbox_pull_interval_seconds = coerce_i64(
        inbox_section.pull_interval_seconds.as_ref(),
        "inbox-relay.pull-interval-seconds",
        defaults::DEFAULT_INBOX_PULL_INTERVAL_SECONDS,
    );

    let import_section = seed.import.unwrap_or_default();
    let import = ImportSettings {
        start_date: coerce_date(
            import_section.start_date.as_deref(),
            "import.start-date",
            defaults::DEFAULT_IMPORT_START_DATE,
        ),
        query_interval_seconds: coerce_i64(
            import_section.query_interval_seconds.as_ref(),
            "import.query-interval-seconds",
            defaults::DEFAULT_IMPORT_QUERY_INTERVAL_SECONDS,
        ),
        owner_fetch_timeout_seconds: coerce_i64(
            import_section.owner_fetch_timeout_seconds.as_ref(),
            "import.owner-fetch-timeout-seconds",
            defaults::DEFAULT_IMPORT_OWNER_FETCH_TIMEOUT_SECONDS,
        ),
        tagged_fetch_timeout_seconds: coerce_i64(
            import_section.tagged_fetch_timeout_seconds.as_ref(),
            "import.tagged-fetch-timeout-seconds",
            defaults::DEFAULT_IMPORT_TAGGED_FETCH_TIMEOUT_SECONDS,
        ),
        relays: parse_relay_list(import_section.relays.as_deref()),
        relays_file: import_section
            .relays_file
            .unwrap_or_else(|| defaults::DEFAULT_IMPORT_RELAYS_FILE.to_string()),
    };

    let backup_section = seed.backup.unwrap_or_default();
    let s3_section = backup_section.s3.unwrap_or_default();
    let backup = BackupSettings {
        provider: BackupProvider::from_raw(backup_section.provider.as_deref()),
        interval_hours: coerce_i64(
            backup_section.interval_hours.as_ref(),
            "backup.interval-hours",
            defaults::DEFAULT_BACKUP_INTERVAL_HOURS,
        ),
        s3: S3Settings {
            access_key_id: trimmed(s3_section.access_key_id.as_deref()),
            secret_key: trimmed(s3_section.secret_key.as_deref()),
            endpoint: trimmed(s3_section.endpoint.as_deref()),
            region: trimmed(s3_section.region.as_deref()),
            bucket: trimmed(s3_section.bucket.as_deref()),
        },
    };

    let blastr_section = seed.blastr.unwrap_or_default();
    let blastr = BlastrSettings {
        relays: parse_relay_list(blastr_section.relays.as_deref()),
        relays_file: blastr_section
            .relays_file
            .unwrap_or_else(|| defaults::DEFAULT_BLASTR_RELAYS_FILE.to_string()),
    };

    let wot_section = seed.wot.unwrap_or_default();
    let wot_fetch_timeout_seconds = coerce_i64(
        wot_section.fetch_timeout_seconds.as_ref(),
        "wot.fetch-timeout-seconds",
        defaults::DEFAULT_WOT_FETCH_TIMEOUT_SECONDS,
    );

    let logging_section = seed.logging.unwrap_or_default();
    let logging = LoggingSettings {
        level: LogLevel::from_raw(logging_section.level.as_deref()),
        timezone: non_empty_or(
            logging_section.timezone.as_deref(),
            defaults::DEFAULT_TIMEZONE,
        ),
    };

    CanonicalConfig {
        mode: input.mode,
        tor_address: input.tor_address,
        lan_address: input.lan_address,
        owner,
        relay,
        database,
        blossom_path,
        private,
        chat,
        chat_wot,
        outbox,
        inbox,
        inbox_pull_interval_seconds,
        import,
        backup,
        blastr,
        wot_fetch_timeout_seconds,
        logging,
        simple_persist,
    }
}
