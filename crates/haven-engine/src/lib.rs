//! Configuration translation and validation engine for Haven
//!
//! Accepts the operator's mode-dependent submission and deterministically
//! produces the artifacts the relay reads at startup: the environment
//! file, two JSON relay lists, and the persisted YAML snapshot.
//!
//! Control flows strictly forward through four stages:
//!
//! 1. [`normalize`] - resolve the configuration mode and flatten
//!    mode-specific input into one seed.
//! 2. [`resolve`] - apply explicit value -> fallback -> declared default
//!    per field, with tolerant coercion.
//! 3. [`validate`] - enforce the hard invariants before any write.
//! 4. [`emit`] - render and write the artifacts in fixed order.

pub mod emit;
pub mod env;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod validate;

use std::path::Path;

use haven_schema::{CanonicalConfig, RawInput};

pub use emit::ArtifactPaths;
pub use error::{Error, Result};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    pub config: CanonicalConfig,
    pub paths: ArtifactPaths,
}

/// Process one configuration submission end to end.
///
/// Validation completes before the first write; a validation failure
/// leaves the artifact root untouched.
pub fn apply(input: RawInput, root: &Path) -> Result<ApplyOutcome> {
    let normalized = normalize::normalize(input)?;
    let config = resolve::resolve(normalized);
    let artifacts = validate::validate(&config)?;
    let paths = emit::emit(&config, &artifacts, root)?;
    tracing::debug!(mode = %config.mode, "submission applied");
    Ok(ApplyOutcome { config, paths })
}
