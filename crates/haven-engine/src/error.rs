//! Error types for haven-engine

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal submission errors.
///
/// Messages are operator-facing and surface verbatim in the host
/// platform's configuration dialog. Coercion problems (malformed numbers,
/// booleans, dates, lists) are never errors; they fall back to declared
/// defaults inside the resolver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Simple configuration values are missing.")]
    MissingSimpleConfig,

    #[error("Missing Haven configuration. Please configure the service before starting.")]
    MissingFullConfig,

    #[error("Owner npub is required (npub1...).")]
    MissingOwnerNpub,

    #[error("Owner npub must begin with npub1.")]
    InvalidOwnerNpub,

    #[error("Filesystem error: {0}")]
    Fs(#[from] haven_fs::Error),

    #[error("Failed to render {artifact}: {message}")]
    Render {
        artifact: &'static str,
        message: String,
    },
}
