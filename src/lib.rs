//! Shelfr - a terminal viewer for remote product catalogs
//!
//! This library fetches a product catalog from an HTTP API once, holds it in
//! memory, and exposes search, pagination, and local add/edit/delete
//! operations over it. Edits are never written back to the remote source.

use thiserror::Error;

pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShelfrError {
    /// Remote catalog fetch error
    #[error("API error: {0}")]
    ApiError(#[from] api::ApiError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
