//! Error types for handlergen-template

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Registry error: {0}")]
    Registry(#[from] handlergen_registry::Error),

    #[error("Template '{template}' is malformed: {message}")]
    TemplateSyntax {
        template: &'static str,
        message: String,
    },

    #[error("Template '{template}' has no value for slot '{slot}'")]
    MissingSlot {
        template: &'static str,
        slot: String,
    },

    #[error("Value for slot '{slot}' contains '{found}', which would break the generated markup: {value:?}")]
    UnsafeValue {
        slot: String,
        value: String,
        found: char,
    },
}
