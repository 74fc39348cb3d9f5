//! Stage 4a: environment-file rendering
//!
//! The file format is single-sourced here as an ordered line template.
//! String values are double-quoted with backslash, quote, and newline
//! escaped; integers and booleans are written bare. Downstream readers
//! depend on stable `KEY=value` syntax, so the template order and key set
//! are load-bearing.

use haven_schema::canonical::{BackupProvider, CanonicalConfig, RateLimits, RelayGroup};

/// One line of the rendered environment file.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvLine {
    Comment(&'static str),
    Blank,
    Str(String, String),
    Int(String, i64),
    Bool(String, bool),
}

impl EnvLine {
    fn str(key: impl Into<String>, value: impl Into<String>) -> Self {
        EnvLine::Str(key.into(), value.into())
    }

    fn int(key: impl Into<String>, value: i64) -> Self {
        EnvLine::Int(key.into(), value)
    }

    fn bool(key: impl Into<String>, value: bool) -> Self {
        EnvLine::Bool(key.into(), value)
    }
}

/// Escape and double-quote a string value.
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

fn group_settings(prefix: &str, group: &RelayGroup) -> Vec<EnvLine> {
    vec![
        EnvLine::str(format!("{prefix}_NAME"), &group.name),
        EnvLine::str(format!("{prefix}_NPUB"), &group.npub),
        EnvLine::str(format!("{prefix}_DESCRIPTION"), &group.description),
        EnvLine::str(format!("{prefix}_ICON"), &group.icon),
    ]
}

fn group_limiters(prefix: &str, limits: &RateLimits) -> Vec<EnvLine> {
    vec![
        EnvLine::int(
            format!("{prefix}_EVENT_IP_LIMITER_TOKENS_PER_INTERVAL"),
            limits.event.tokens_per_interval,
        ),
        EnvLine::int(
            format!("{prefix}_EVENT_IP_LIMITER_INTERVAL"),
            limits.event.interval_seconds,
        ),
        EnvLine::int(
            format!("{prefix}_EVENT_IP_LIMITER_MAX_TOKENS"),
            limits.event.max_tokens,
        ),
        EnvLine::bool(
            format!("{prefix}_ALLOW_EMPTY_FILTERS"),
            limits.allow_empty_filters,
        ),
        EnvLine::bool(
            format!("{prefix}_ALLOW_COMPLEX_FILTERS"),
            limits.allow_complex_filters,
        ),
        EnvLine::int(
            format!("{prefix}_CONNECTION_RATE_LIMITER_TOKENS_PER_INTERVAL"),
            limits.connection.tokens_per_interval,
        ),
        EnvLine::int(
            format!("{prefix}_CONNECTION_RATE_LIMITER_INTERVAL"),
            limits.connection.interval_seconds,
        ),
        EnvLine::int(
            format!("{prefix}_CONNECTION_RATE_LIMITER_MAX_TOKENS"),
            limits.connection.max_tokens,
        ),
    ]
}

/// Build the ordered line template for a resolved configuration.
pub fn env_template(config: &CanonicalConfig) -> Vec<EnvLine> {
    let mut lines = vec![
        EnvLine::Comment("# Haven Configuration - Generated by Start9"),
        EnvLine::Comment("# Owner Configuration"),
        EnvLine::str("OWNER_NPUB", &config.owner.npub),
        EnvLine::str("OWNER_USERNAME", &config.owner.username),
        EnvLine::Blank,
        EnvLine::Comment("# Relay Configuration"),
        EnvLine::str("RELAY_URL", &config.relay.url),
        EnvLine::int("RELAY_PORT", config.relay.port),
        EnvLine::str("RELAY_BIND_ADDRESS", &config.relay.bind_address),
        EnvLine::Blank,
        EnvLine::Comment("# Database Configuration"),
        EnvLine::str("DB_ENGINE", config.database.engine.as_str()),
        EnvLine::int("LMDB_MAPSIZE", config.database.lmdb_mapsize),
        EnvLine::Blank,
        EnvLine::Comment("# Storage Paths"),
        EnvLine::str("BLOSSOM_PATH", &config.blossom_path),
        EnvLine::Blank,
        EnvLine::Comment("## Private Relay Settings"),
    ];
    lines.extend(group_settings("PRIVATE_RELAY", &config.private));
    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Private Relay Rate Limiters"));
    lines.extend(group_limiters("PRIVATE_RELAY", &config.private.limits));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Chat Relay Settings"));
    lines.extend(group_settings("CHAT_RELAY", &config.chat));
    lines.push(EnvLine::int("CHAT_RELAY_WOT_DEPTH", config.chat_wot.depth));
    lines.push(EnvLine::int(
        "CHAT_RELAY_WOT_REFRESH_INTERVAL_HOURS",
        config.chat_wot.refresh_interval_hours,
    ));
    lines.push(EnvLine::int(
        "CHAT_RELAY_MINIMUM_FOLLOWERS",
        config.chat_wot.minimum_followers,
    ));
    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Chat Relay Rate Limiters"));
    lines.extend(group_limiters("CHAT_RELAY", &config.chat.limits));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Outbox Relay Settings"));
    lines.extend(group_settings("OUTBOX_RELAY", &config.outbox));
    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Outbox Relay Rate Limiters"));
    lines.extend(group_limiters("OUTBOX_RELAY", &config.outbox.limits));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Inbox Relay Settings"));
    lines.extend(group_settings("INBOX_RELAY", &config.inbox));
    lines.push(EnvLine::int(
        "INBOX_PULL_INTERVAL_SECONDS",
        config.inbox_pull_interval_seconds,
    ));
    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Inbox Relay Rate Limiters"));
    lines.extend(group_limiters("INBOX_RELAY", &config.inbox.limits));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Import Settings"));
    lines.push(EnvLine::str("IMPORT_START_DATE", &config.import.start_date));
    lines.push(EnvLine::int(
        "IMPORT_QUERY_INTERVAL_SECONDS",
        config.import.query_interval_seconds,
    ));
    lines.push(EnvLine::int(
        "IMPORT_OWNER_NOTES_FETCH_TIMEOUT_SECONDS",
        config.import.owner_fetch_timeout_seconds,
    ));
    lines.push(EnvLine::int(
        "IMPORT_TAGGED_NOTES_FETCH_TIMEOUT_SECONDS",
        config.import.tagged_fetch_timeout_seconds,
    ));
    lines.push(EnvLine::str(
        "IMPORT_SEED_RELAYS_FILE",
        &config.import.relays_file,
    ));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Backup Settings"));
    lines.push(EnvLine::str(
        "BACKUP_PROVIDER",
        config.backup.provider.as_str(),
    ));
    lines.push(EnvLine::int(
        "BACKUP_INTERVAL_HOURS",
        config.backup.interval_hours,
    ));

    if config.backup.provider == BackupProvider::S3 {
        lines.push(EnvLine::Blank);
        lines.push(EnvLine::Comment("## S3 Backup Settings"));
        lines.push(EnvLine::str("S3_ACCESS_KEY_ID", &config.backup.s3.access_key_id));
        lines.push(EnvLine::str("S3_SECRET_KEY", &config.backup.s3.secret_key));
        lines.push(EnvLine::str("S3_ENDPOINT", &config.backup.s3.endpoint));
        lines.push(EnvLine::str("S3_REGION", &config.backup.s3.region));
        lines.push(EnvLine::str("S3_BUCKET_NAME", &config.backup.s3.bucket));
    }

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Blastr Settings"));
    lines.push(EnvLine::str(
        "BLASTR_RELAYS_FILE",
        &config.blastr.relays_file,
    ));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## WOT Settings"));
    lines.push(EnvLine::int(
        "WOT_FETCH_TIMEOUT_SECONDS",
        config.wot_fetch_timeout_seconds,
    ));

    lines.push(EnvLine::Blank);
    lines.push(EnvLine::Comment("## Logging"));
    lines.push(EnvLine::str("HAVEN_LOG_LEVEL", config.logging.level.as_str()));
    lines.push(EnvLine::str("TZ", &config.logging.timezone));

    lines
}

/// Render the template to the line-oriented text document.
pub fn render(lines: &[EnvLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            EnvLine::Comment(text) => out.push_str(text),
            EnvLine::Blank => {}
            EnvLine::Str(key, value) => {
                out.push_str(key);
                out.push('=');
                out.push_str(&quote(value));
            }
            EnvLine::Int(key, value) => {
                out.push_str(&format!("{key}={value}"));
            }
            EnvLine::Bool(key, value) => {
                out.push_str(&format!("{key}={value}"));
            }
        }
        out.push('\n');
    }
    out
}

/// Render the environment file for a resolved configuration.
pub fn render_env(config: &CanonicalConfig) -> String {
    render(&env_template(config))
}
