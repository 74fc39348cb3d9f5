//! Filesystem layer for the Haven configuration engine
//!
//! Provides `/data`-rooted path validation and safe artifact I/O.

pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use path::{DATA_ROOT, DataPath};
pub use store::ArtifactStore;
