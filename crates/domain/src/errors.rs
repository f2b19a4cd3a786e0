//! Error types used throughout the adapter

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the MyGLS adapter.
///
/// Callers branch on the variant rather than parsing message strings:
/// `Transport` means the carrier endpoint answered with a non-success HTTP
/// status, `Carrier` means the request was accepted at the transport level
/// but the response body reported label errors.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GlsError {
    #[error("Carrier returned HTTP {status}")]
    Transport { status: u16 },

    #[error("Carrier reported label errors: {details}")]
    Carrier { details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, GlsError>;
