//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when shelfr is run for the first time.

use super::ShelfrConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the catalog endpoint and page size
///
/// Guides the user through creating the initial configuration:
/// 1. Prompts for the catalog API URL (default: fakestoreapi.com)
/// 2. Prompts for the page size
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup() -> Result<ShelfrConfig, ConfigError> {
    println!("Welcome to shelfr! Let's set up your catalog source.\n");

    let defaults = ShelfrConfig::default();

    let api_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Catalog API URL")
        .default(defaults.api_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let items_per_page: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Products per page")
        .default(defaults.items_per_page)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = ShelfrConfig {
        api_url,
        items_per_page: items_per_page.max(1),
        ..defaults
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
