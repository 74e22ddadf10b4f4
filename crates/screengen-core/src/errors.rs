//! Error types for reading layout documents.

use thiserror::Error;

/// Errors at the document input boundary.
///
/// Everything below the document root degrades softly and never produces
/// one of these.
#[derive(Debug, Error)]
pub enum DslError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document structure: {0}")]
    InvalidDocument(String),
}
