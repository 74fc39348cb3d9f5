//! Configuration data models for the Haven configuration engine
//!
//! Three layers:
//! - [`input`]: the loose, mode-dependent shape submitted by the operator.
//!   Numeric and boolean leaves stay untyped (`serde_json::Value`) here;
//!   coercion is the resolver's job.
//! - [`canonical`]: the fully-resolved configuration record.
//! - [`snapshot`]: the persisted YAML document written after a successful
//!   submission.

pub mod canonical;
pub mod defaults;
pub mod input;
pub mod mode;
pub mod snapshot;

pub use canonical::CanonicalConfig;
pub use input::{FullInput, RawInput, SimpleInput};
pub use mode::ConfigMode;
pub use snapshot::PersistedSnapshot;
