use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FinCalcError {
    #[error("Invalid input: {0}")]
    InvalidNumber(String),

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Overflow: {context} exceeds the supported decimal range")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinCalcError {
    fn from(e: serde_json::Error) -> Self {
        FinCalcError::SerializationError(e.to_string())
    }
}
