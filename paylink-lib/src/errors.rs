//! Error types for paylink operations.

use crate::keygen::KeyGenerationError;
use std::fmt;

/// Comprehensive error type for paylink operations.
#[derive(Debug)]
pub enum PaylinkError {
    /// Key generation failed in the underlying primitive.
    ///
    /// This is not resolved by retrying with the same parameters; callers
    /// should surface it rather than loop.
    KeyGeneration(String),

    /// Invalid data provided.
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A pay-link URI could not be parsed.
    Uri(String),

    /// Serialization/deserialization error.
    Serialization(String),
}

impl PaylinkError {
    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a URI error.
    pub fn uri(reason: impl Into<String>) -> Self {
        Self::Uri(reason.into())
    }

    /// Get the error message as an owned String.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaylinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyGeneration(msg) => write!(f, "key generation error: {}", msg),
            Self::InvalidData { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            Self::Uri(msg) => write!(f, "URI error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PaylinkError {}

impl From<serde_json::Error> for PaylinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<KeyGenerationError> for PaylinkError {
    fn from(err: KeyGenerationError) -> Self {
        Self::KeyGeneration(err.to_string())
    }
}
