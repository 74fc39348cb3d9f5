//! Read-side collaborators for the Haven configuration engine
//!
//! Everything here degrades instead of failing: a missing or unreadable
//! snapshot yields the fixed not-ready payload, and an unreachable relay
//! yields the fixed unreachable message.

pub mod health;
pub mod migrations;
pub mod properties;

pub use health::{DEFAULT_HEALTH_URL, HealthReport, probe};
pub use properties::{PropertiesOutcome, StatusProperties, derive_properties};
