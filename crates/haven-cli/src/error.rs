//! Error types for the CLI

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    User(String),

    #[error(transparent)]
    Engine(#[from] haven_engine::Error),

    #[error(transparent)]
    Fs(#[from] haven_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User(message.into())
    }
}
