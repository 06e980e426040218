//! UI error types

use thiserror::Error;

/// Errors that can occur in the terminal UI
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing, or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
