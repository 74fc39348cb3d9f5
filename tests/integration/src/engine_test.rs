//! End-to-end submission scenarios against a temp artifact root

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use haven_engine::apply;
use haven_schema::{PersistedSnapshot, RawInput};

fn submission(json: serde_json::Value) -> RawInput {
    serde_json::from_value(json).unwrap()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn artifact_count(root: &Path) -> usize {
    if !root.exists() {
        return 0;
    }
    walk(root)
}

fn walk(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() { walk(&path) } else { 1 }
        })
        .sum()
}

#[test]
fn simple_mode_pins_port_and_bind_address() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "simple",
        "tor-address": "havenabc.onion",
        "lan-address": "haven.local",
        "simple-config": {
            "npub": "npub1ownerkey",
            "username": "Alice",
            "relay-url": "relay.example.com"
        }
    }));

    let outcome = apply(input, temp.path()).unwrap();

    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("RELAY_PORT=3355\n"));
    assert!(env.contains("RELAY_BIND_ADDRESS=\"0.0.0.0\"\n"));
    assert!(env.contains("RELAY_URL=\"ws://relay.example.com\"\n"));
    assert!(env.contains("OWNER_USERNAME=\"Alice\"\n"));
    assert_eq!(outcome.config.relay.port, 3355);
}

#[test]
fn invalid_owner_key_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "simple",
        "simple-config": { "npub": "hex0123456789" }
    }));

    let err = apply(input, temp.path()).unwrap_err();
    assert_eq!(err.to_string(), "Owner npub must begin with npub1.");
    assert_eq!(artifact_count(temp.path()), 0);
}

#[test]
fn missing_owner_key_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {}
    }));

    let err = apply(input, temp.path()).unwrap_err();
    assert_eq!(err.to_string(), "Owner npub is required (npub1...).");
    assert_eq!(artifact_count(temp.path()), 0);
}

#[test]
fn path_outside_data_root_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "blastr": { "relays-file": "/etc/relays.json" }
        }
    }));

    let err = apply(input, temp.path()).unwrap_err();
    assert!(err.to_string().contains("Blastr relays file"));
    assert!(err.to_string().contains("/etc/relays.json"));
    assert_eq!(artifact_count(temp.path()), 0);
}

#[test]
fn relay_lists_are_parsed_and_emitted_as_json() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "import": { "relays": "a.com, b.com\nc.com" }
        }
    }));

    apply(input, temp.path()).unwrap();

    let import: Vec<String> =
        serde_json::from_str(&read(temp.path(), "start9/relays_import.json")).unwrap();
    assert_eq!(import, vec!["a.com", "b.com", "c.com"]);

    // Blastr was left empty and falls back to the built-in list.
    let blastr: Vec<String> =
        serde_json::from_str(&read(temp.path(), "start9/relays_blastr.json")).unwrap();
    assert_eq!(blastr.len(), 20);
    assert_eq!(blastr[0], "relay.damus.io");
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "relay": { "port": "abc" },
            "chat-relay": { "wot-depth": "many" },
            "backup": { "interval-hours": {} }
        }
    }));

    apply(input, temp.path()).unwrap();

    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("RELAY_PORT=3355\n"));
    assert!(env.contains("CHAT_RELAY_WOT_DEPTH=3\n"));
    assert!(env.contains("BACKUP_INTERVAL_HOURS=24\n"));
}

#[test]
fn s3_backup_section_is_conditional() {
    let temp = TempDir::new().unwrap();
    let with_s3 = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "backup": {
                "provider": "s3",
                "s3": {
                    "access-key-id": "AKIA123",
                    "secret-key": "shh",
                    "endpoint": "https://s3.example.com",
                    "region": "us-east-1",
                    "bucket": "haven-backups"
                }
            }
        }
    }));

    apply(with_s3, temp.path()).unwrap();
    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("## S3 Backup Settings\n"));
    assert!(env.contains("S3_ACCESS_KEY_ID=\"AKIA123\"\n"));
    assert!(env.contains("S3_SECRET_KEY=\"shh\"\n"));
    assert!(env.contains("S3_ENDPOINT=\"https://s3.example.com\"\n"));
    assert!(env.contains("S3_REGION=\"us-east-1\"\n"));
    assert!(env.contains("S3_BUCKET_NAME=\"haven-backups\"\n"));

    let without_s3 = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "backup": { "provider": "none" }
        }
    }));

    apply(without_s3, temp.path()).unwrap();
    let env = read(temp.path(), "start9/haven.env");
    assert!(!env.contains("S3 Backup Settings"));
    assert!(!env.contains("S3_ACCESS_KEY_ID"));
}

#[test]
fn blank_group_names_derive_from_display_name() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey", "username": "Alice" },
            "chat-relay": { "name": "" },
            "private-relay": { "name": "Vault" }
        }
    }));

    apply(input, temp.path()).unwrap();

    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("CHAT_RELAY_NAME=\"Alice's Chat Relay\"\n"));
    assert!(env.contains("PRIVATE_RELAY_NAME=\"Vault\"\n"));
    assert!(env.contains("OUTBOX_RELAY_NAME=\"Alice's Outbox Relay\"\n"));
    assert!(env.contains("INBOX_RELAY_NAME=\"Alice's Inbox Relay\"\n"));
}

#[test]
fn snapshot_captures_the_persisted_subset() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "simple",
        "tor-address": "havenabc.onion",
        "lan-address": "haven.local",
        "simple-config": {
            "npub": "npub1ownerkey",
            "username": "Alice",
            "relay-url": "https://relay.example.com/"
        }
    }));

    apply(input, temp.path()).unwrap();

    let snapshot: PersistedSnapshot =
        serde_yaml::from_str(&read(temp.path(), "start9/config.yaml")).unwrap();
    assert_eq!(snapshot.configuration_mode.as_str(), "simple");
    assert_eq!(snapshot.tor_address.as_deref(), Some("havenabc.onion"));
    assert_eq!(snapshot.haven.owner.npub, "npub1ownerkey");
    assert_eq!(snapshot.haven.relay.url, "wss://relay.example.com");
    assert_eq!(snapshot.haven.import.start_date, "2023-01-20");

    let simple = snapshot.simple_config.unwrap();
    assert_eq!(simple.npub, "npub1ownerkey");
    assert_eq!(simple.username, "Alice");
    assert_eq!(simple.relay_url, "wss://relay.example.com");
}

#[test]
fn resubmission_overwrites_artifacts_in_full() {
    let temp = TempDir::new().unwrap();
    let first = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1first" },
            "import": { "relays": "first.com" }
        }
    }));
    apply(first, temp.path()).unwrap();

    let second = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1second" },
            "import": { "relays": "second.com" }
        }
    }));
    apply(second, temp.path()).unwrap();

    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("OWNER_NPUB=\"npub1second\"\n"));
    assert!(!env.contains("npub1first"));

    let import: Vec<String> =
        serde_json::from_str(&read(temp.path(), "start9/relays_import.json")).unwrap();
    assert_eq!(import, vec!["second.com"]);
}

#[test]
fn custom_data_paths_are_respected() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "full-config": {
            "owner": { "npub": "npub1ownerkey" },
            "import": { "relays-file": "/data/custom/import.json" },
            "blastr": { "relays-file": "/data/custom/blastr.json" }
        }
    }));

    let outcome = apply(input, temp.path()).unwrap();

    assert!(temp.path().join("custom/import.json").is_file());
    assert!(temp.path().join("custom/blastr.json").is_file());
    let env = read(temp.path(), "start9/haven.env");
    assert!(env.contains("IMPORT_SEED_RELAYS_FILE=\"/data/custom/import.json\"\n"));
    assert!(env.contains("BLASTR_RELAYS_FILE=\"/data/custom/blastr.json\"\n"));
    assert_eq!(
        outcome.paths.import_relays,
        temp.path().join("custom/import.json")
    );
}
