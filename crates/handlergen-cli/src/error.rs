//! Error types for handlergen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from handlergen-registry
    #[error(transparent)]
    Registry(#[from] handlergen_registry::Error),

    /// Error from handlergen-template
    #[error(transparent)]
    Template(#[from] handlergen_template::Error),

    /// Error from handlergen-blocks
    #[error(transparent)]
    Blocks(#[from] handlergen_blocks::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
