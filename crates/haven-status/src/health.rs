//! Relay reachability probe

use std::time::Duration;

use serde::Serialize;

/// Endpoint the relay serves websocket upgrades on inside the container.
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:3355";

/// Fixed operator-facing message for an unreachable relay.
pub const UNREACHABLE_MESSAGE: &str =
    "Haven relay is not responding on port 3355. Check logs for details.";

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HealthReport {
    Healthy,
    Unreachable { error: String },
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthReport::Healthy)
    }
}

impl std::fmt::Display for HealthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthReport::Healthy => write!(f, "healthy"),
            HealthReport::Unreachable { error } => write!(f, "{error}"),
        }
    }
}

/// Probe the relay endpoint once.
///
/// Any response counts as healthy; this is a reachability check, not a
/// protocol handshake. Connection errors and timeouts map to the fixed
/// unreachable message.
pub async fn probe(url: &str) -> HealthReport {
    let client = match reqwest::Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!(%err, "could not build http client");
            return HealthReport::Unreachable {
                error: UNREACHABLE_MESSAGE.to_string(),
            };
        }
    };

    match client.get(url).send().await {
        Ok(_) => HealthReport::Healthy,
        Err(err) => {
            tracing::debug!(url, %err, "health probe failed");
            HealthReport::Unreachable {
                error: UNREACHABLE_MESSAGE.to_string(),
            }
        }
    }
}
