//! Error types for document rendering

use thiserror::Error;

/// Document rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output sink refused a write
    #[error("error executing the template: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, RenderError>;
