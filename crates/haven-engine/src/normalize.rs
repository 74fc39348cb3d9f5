//! Stage 1: input normalization
//!
//! Resolves the configuration mode once and produces a tagged source the
//! resolver consumes without any further mode checks. Simple-mode input is
//! mapped onto the expert shape here: fixed port, fixed bind address,
//! normalized relay URL, everything else left for defaulting.

use haven_schema::canonical::SimplePersist;
use haven_schema::defaults;
use haven_schema::input::{FullInput, OwnerSection, RawInput, RelaySection};
use haven_schema::mode::ConfigMode;

use crate::error::{Error, Result};
use crate::resolve::normalize_relay_url;

/// The normalizer's output: mode, host-injected addresses, and the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub mode: ConfigMode,
    pub tor_address: Option<String>,
    pub lan_address: Option<String>,
    pub source: ConfigSource,
}

/// Mode-resolved configuration source.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Simple(SimpleSeed),
    Full(Box<FullInput>),
}

/// The wizard's three fields, already trimmed and URL-normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleSeed {
    pub npub: String,
    pub username: String,
    pub relay_url: String,
}

impl SimpleSeed {
    /// Expand the wizard triple into an expert-shape seed: owner and relay
    /// endpoint populated, every other section absent.
    pub fn into_full(self) -> FullInput {
        FullInput {
            owner: Some(OwnerSection {
                npub: Some(self.npub),
                username: Some(self.username),
            }),
            relay: Some(RelaySection {
                url: Some(self.relay_url),
                port: Some(defaults::DEFAULT_RELAY_PORT.into()),
                bind_address: Some(defaults::DEFAULT_BIND_ADDRESS.to_string()),
            }),
            ..FullInput::default()
        }
    }

    /// The snapshot block used to re-populate the wizard form.
    pub fn persist(&self) -> SimplePersist {
        SimplePersist {
            npub: self.npub.clone(),
            username: self.username.clone(),
            relay_url: self.relay_url.clone(),
        }
    }
}

/// Resolve the mode and flatten mode-specific input into one seed.
pub fn normalize(input: RawInput) -> Result<NormalizedInput> {
    let mode = ConfigMode::from_raw(input.configuration_mode.as_deref());
    tracing::debug!(%mode, "normalizing submission");

    let source = match mode {
        ConfigMode::Simple => {
            let simple = input.simple_config.ok_or(Error::MissingSimpleConfig)?;
            let npub = simple.npub.as_deref().unwrap_or("").trim().to_string();
            let username = simple.username.as_deref().unwrap_or("").trim().to_string();
            let relay_url = normalize_relay_url(
                simple.relay_url.as_deref().unwrap_or(""),
                defaults::DEFAULT_RELAY_PORT,
            );
            ConfigSource::Simple(SimpleSeed {
                npub,
                username,
                relay_url,
            })
        }
        ConfigMode::Full => {
            let full = input.full_config.ok_or(Error::MissingFullConfig)?;
            ConfigSource::Full(Box::new(full))
        }
    };

    Ok(NormalizedInput {
        mode,
        tor_address: input.tor_address,
        lan_address: input.lan_address,
        source,
    })
}
