//! Error types for handlergen-registry

use std::path::PathBuf;

use crate::types::ToolCategory;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Duplicate tool '{name}': already registered as {existing}, cannot register as {attempted}")]
    DuplicateTool {
        name: String,
        existing: ToolCategory,
        attempted: ToolCategory,
    },

    #[error("Write tool '{name}' is missing its {field}")]
    MissingWriteField { name: String, field: &'static str },

    #[error("Invalid tool name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid title for '{name}': {reason}")]
    InvalidTitle { name: String, reason: String },

    #[error("Invalid color '{value}'. Valid: amber, blue, green")]
    InvalidColor { value: String },

    #[error("Invalid category '{value}'. Valid: write, read, factory, utility")]
    InvalidCategory { value: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
