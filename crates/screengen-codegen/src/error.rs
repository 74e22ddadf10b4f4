//! Error types for code generation.

use screengen_core::DslError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// Only the input and output boundaries fail. Problems inside the layout tree
/// are emitted as inert markers instead.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Malformed or structurally invalid input document.
    #[error(transparent)]
    Dsl(#[from] DslError),

    /// Unknown target framework name.
    #[error("Unknown target framework: {0}")]
    UnknownTarget(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
