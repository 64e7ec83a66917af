//! Error types for registry operations.

/// Errors raised while registering, encoding or decoding typed messages.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No codec is registered for the type URL.
    #[error("unregistered type url: {0}")]
    UnknownTypeUrl(String),

    /// A codec for the type URL already exists.
    #[error("type url already registered: {0}")]
    DuplicateTypeUrl(String),

    /// The bytes or value did not match the type registered for the URL.
    #[error("codec error for {type_url}: {message}")]
    Codec {
        /// The type URL being encoded or decoded.
        type_url: String,
        /// What went wrong.
        message: String,
    },
}

impl RegistryError {
    pub(crate) fn codec(type_url: &str, message: impl ToString) -> Self {
        RegistryError::Codec {
            type_url: type_url.to_string(),
            message: message.to_string(),
        }
    }
}
