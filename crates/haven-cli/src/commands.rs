//! Command implementations

use std::path::Path;

use colored::Colorize;

use haven_fs::ArtifactStore;
use haven_schema::RawInput;
use haven_schema::defaults::DEFAULT_RELAY_LIST;

use crate::error::{CliError, Result};

pub fn run_apply(input: &Path, root: &Path) -> Result<()> {
    let raw: RawInput = ArtifactStore::new().load(input)?;
    let outcome = haven_engine::apply(raw, root)?;

    println!(
        "{} {} configuration for {}",
        "applied".green().bold(),
        outcome.config.mode,
        outcome.config.owner.npub
    );
    for path in [
        &outcome.paths.env_file,
        &outcome.paths.import_relays,
        &outcome.paths.blastr_relays,
        &outcome.paths.snapshot,
    ] {
        println!("  wrote {}", path.display());
    }
    Ok(())
}

pub fn run_properties(root: &Path) -> Result<()> {
    let outcome = haven_status::derive_properties(root);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

pub fn run_health(url: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(haven_status::probe(url));
    if report.is_healthy() {
        println!("{}", "healthy".green());
        Ok(())
    } else {
        Err(CliError::user(report.to_string()))
    }
}

pub fn run_defaults() -> Result<()> {
    for relay in DEFAULT_RELAY_LIST {
        println!("{relay}");
    }
    Ok(())
}

pub fn run_migrations() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&haven_status::migrations::plan())?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_submission(dir: &Path) -> std::path::PathBuf {
        let input = dir.join("submission.json");
        std::fs::write(
            &input,
            r#"{
                "configuration-mode": "simple",
                "simple-config": {
                    "npub": "npub1abc",
                    "username": "Alice",
                    "relay-url": ""
                }
            }"#,
        )
        .unwrap();
        input
    }

    #[test]
    fn test_apply_writes_artifacts() {
        let temp = TempDir::new().unwrap();
        let input = write_submission(temp.path());
        let root = temp.path().join("data");

        run_apply(&input, &root).unwrap();

        assert!(root.join("start9/haven.env").is_file());
        assert!(root.join("start9/config.yaml").is_file());
    }

    #[test]
    fn test_apply_rejects_bad_npub() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("submission.json");
        std::fs::write(
            &input,
            r#"{"configuration-mode": "simple", "simple-config": {"npub": "nsec1abc"}}"#,
        )
        .unwrap();
        let root = temp.path().join("data");

        let err = run_apply(&input, &root).unwrap_err();
        assert!(err.to_string().contains("npub1"));
        assert!(!root.exists());
    }

    #[test]
    fn test_properties_before_apply_reports_not_ready() {
        let temp = TempDir::new().unwrap();
        run_properties(temp.path()).unwrap();
    }
}
