use jnr_store_catalog::LoadError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded
    #[error("{0}")]
    Load(#[from] LoadError),

    /// No game with the requested id
    #[error("No game with id '{0}'")]
    NotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
