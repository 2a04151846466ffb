use thiserror::Error;

#[derive(Debug, Error)]
pub enum DreError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Validation failed: {}", messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Unknown tax regime: {0}")]
    UnknownRegime(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DreError {
    fn from(e: serde_json::Error) -> Self {
        DreError::SerializationError(e.to_string())
    }
}
