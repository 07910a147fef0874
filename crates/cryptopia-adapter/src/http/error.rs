/*
[INPUT]:  Error sources (HTTP, envelope rejection, serialization, credentials)
[OUTPUT]: Structured error types with operation context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::types::Operation;

/// Main error type for the Cryptopia adapter
#[derive(Error, Debug)]
pub enum CryptopiaError {
    /// Operation name is not part of the public or private catalog
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// The response envelope carried `Success: false`
    #[error(
        "{operation} rejected by Cryptopia: {}",
        .error.as_deref().unwrap_or("no error detail")
    )]
    RemoteRejection {
        operation: Operation,
        error: Option<String>,
    },

    /// The API secret is not valid base64
    #[error("Failed to decode API secret: {0}")]
    CredentialDecode(#[from] base64::DecodeError),

    /// A private operation was requested on a client without credentials
    #[error("{operation} requires API credentials")]
    MissingCredentials { operation: Operation },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Signed header could not be encoded
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Request parameters could not be turned into a body
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CryptopiaError {
    /// Check if error indicates missing or malformed credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            CryptopiaError::CredentialDecode(_) | CryptopiaError::MissingCredentials { .. }
        )
    }

    /// Operation the error is attached to, when known
    pub fn operation(&self) -> Option<Operation> {
        match self {
            CryptopiaError::RemoteRejection { operation, .. }
            | CryptopiaError::MissingCredentials { operation } => Some(*operation),
            _ => None,
        }
    }
}

/// Result type alias for Cryptopia operations
pub type Result<T> = std::result::Result<T, CryptopiaError>;
