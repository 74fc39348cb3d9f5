//! Read-side flows against artifacts produced by the engine

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use haven_engine::apply;
use haven_schema::RawInput;
use haven_status::{PropertiesOutcome, derive_properties};

fn submission(json: serde_json::Value) -> RawInput {
    serde_json::from_value(json).unwrap()
}

#[test]
fn properties_before_first_submission_are_not_ready() {
    let temp = TempDir::new().unwrap();
    let outcome = derive_properties(temp.path());
    let PropertiesOutcome::NotReady { message } = outcome else {
        panic!("expected not-ready payload");
    };
    assert_eq!(
        message,
        "Could not load properties. The service is still starting..."
    );
}

#[test]
fn properties_reflect_the_last_submission() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "full",
        "tor-address": "havenabc.onion",
        "lan-address": "haven.local",
        "full-config": {
            "owner": { "npub": "npub1ownerkey", "username": "Alice" },
            "relay": { "url": "wss://relay.example.com" },
            "backup": { "provider": "s3" },
            "import": { "relays": "a.com,b.com" },
            "blastr": { "relays": "c.com" }
        }
    }));
    apply(input, temp.path()).unwrap();

    let PropertiesOutcome::Ready(props) = derive_properties(temp.path()) else {
        panic!("expected ready properties");
    };
    assert_eq!(props.tor_websocket.as_deref(), Some("ws://havenabc.onion"));
    assert_eq!(props.lan_websocket.as_deref(), Some("wss://haven.local"));
    assert_eq!(props.owner_npub, "npub1ownerkey");
    assert_eq!(props.configuration_mode, "full");
    assert_eq!(props.relay_url, "wss://relay.example.com");
    assert_eq!(props.backup_provider, "s3");
    assert_eq!(props.import_relay_count, 2);
    assert_eq!(props.blastr_relay_count, 1);
}

#[test]
fn corrupt_snapshot_degrades_to_not_ready() {
    let temp = TempDir::new().unwrap();
    let input = submission(serde_json::json!({
        "configuration-mode": "simple",
        "simple-config": { "npub": "npub1ownerkey" }
    }));
    apply(input, temp.path()).unwrap();

    std::fs::write(temp.path().join("start9/config.yaml"), "{{{").unwrap();
    assert!(matches!(
        derive_properties(temp.path()),
        PropertiesOutcome::NotReady { .. }
    ));
}
