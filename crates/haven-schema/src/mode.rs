//! Configuration mode selection

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which configuration shape the operator submitted.
///
/// Anything other than the literal `"full"` resolves to `Simple`; the
/// wizard is the safe default for unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMode {
    #[default]
    Simple,
    Full,
}

impl ConfigMode {
    /// Resolve the mode from the raw `configuration-mode` field.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("full") => ConfigMode::Full,
            _ => ConfigMode::Simple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigMode::Simple => "simple",
            ConfigMode::Full => "full",
        }
    }
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
