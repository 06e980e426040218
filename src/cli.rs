//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for shelfr using the
//! `clap` crate. Every invocation fetches the catalog once and then runs a
//! single operation against the in-memory copy; mutations are local to the
//! invocation and never reach the remote API.
//!
//! # Commands
//!
//! - **browse**: interactive TUI over the catalog (default)
//! - **list** / **search** / **show**: read-only views of the catalog
//! - **add** / **edit** / **delete**: local mutations, printed after applying
//! - **config**: manage the configuration file
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--json` flag to emit raw records instead of formatted text
//! - `--api-url` to override the configured endpoint for one invocation
//! - Command aliases (e.g., `b` for `browse`, `ls` for `list`)

use clap::{Args, Parser, Subcommand};

use crate::catalog::ProductDraft;

/// Terminal product catalog viewer
#[derive(Parser, Debug)]
#[command(name = "shelfr", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Suppress informational output (results only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the configured catalog endpoint for this invocation
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to interactive browse
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Print one page of the catalog
    #[command(visible_alias = "ls")]
    List {
        /// Page to print (1-based, clamped to the available range)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Filter the catalog by a case-insensitive title substring
    #[command(visible_alias = "s")]
    Search {
        /// Substring to look for in product titles
        query: String,

        /// Page of results to print
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Print one product in full
    Show {
        /// Product id
        id: u64,
    },

    /// Add a product to the local catalog and print the result
    #[command(visible_alias = "a")]
    Add {
        #[command(flatten)]
        fields: DraftArgs,
    },

    /// Edit a product in the local catalog and print the result
    #[command(visible_alias = "e")]
    Edit {
        /// Id of the product to edit
        id: u64,

        #[command(flatten)]
        fields: DraftArgs,
    },

    /// Delete a product from the local catalog
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the product to delete
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Product fields shared by `add` and `edit`
///
/// Omitted fields stay absent in the draft; the store applies the
/// create/edit defaulting rules at commit time.
#[derive(Args, Debug, Clone, Default)]
pub struct DraftArgs {
    /// Product title
    #[arg(long)]
    pub title: Option<String>,

    /// Price
    #[arg(long)]
    pub price: Option<f64>,

    /// Long description
    #[arg(long)]
    pub description: Option<String>,

    /// Category label
    #[arg(long)]
    pub category: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Average rating score
    #[arg(long, value_name = "RATE")]
    pub rate: Option<f64>,

    /// Number of ratings
    #[arg(long, value_name = "COUNT")]
    pub count: Option<u64>,
}

impl From<&DraftArgs> for ProductDraft {
    fn from(args: &DraftArgs) -> Self {
        Self {
            title: args.title.clone(),
            price: args.price,
            description: args.description.clone(),
            category: args.category.clone(),
            image: args.image.clone(),
            rating_rate: args.rate,
            rating_count: args.count,
        }
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., items_per_page=10)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., api_url)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the path of the configuration file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::try_parse_from(["shelfr"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Browse));
    }

    #[test]
    fn test_list_with_page() {
        let cli = Cli::try_parse_from(["shelfr", "list", "--page", "3"]).unwrap();
        match cli.get_command() {
            Commands::List { page } => assert_eq!(page, 3),
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_search_alias() {
        let cli = Cli::try_parse_from(["shelfr", "s", "shirt"]).unwrap();
        match cli.get_command() {
            Commands::Search { query, page } => {
                assert_eq!(query, "shirt");
                assert_eq!(page, 1);
            }
            other => panic!("Expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_add_collects_draft_fields() {
        let cli = Cli::try_parse_from([
            "shelfr", "add", "--title", "Mug", "--price", "4.5", "--rate", "3.0",
        ])
        .unwrap();

        match cli.get_command() {
            Commands::Add { fields } => {
                let draft = ProductDraft::from(&fields);
                assert_eq!(draft.title.as_deref(), Some("Mug"));
                assert_eq!(draft.price, Some(4.5));
                assert_eq!(draft.rating_rate, Some(3.0));
                assert_eq!(draft.rating_count, None);
                assert_eq!(draft.description, None);
            }
            other => panic!("Expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_requires_id() {
        assert!(Cli::try_parse_from(["shelfr", "edit", "--title", "x"]).is_err());

        let cli = Cli::try_parse_from(["shelfr", "edit", "7", "--title", "x"]).unwrap();
        match cli.get_command() {
            Commands::Edit { id, .. } => assert_eq!(id, 7),
            other => panic!("Expected edit, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_with_yes_flag() {
        let cli = Cli::try_parse_from(["shelfr", "rm", "2", "-y"]).unwrap();
        match cli.get_command() {
            Commands::Delete { id, yes } => {
                assert_eq!(id, 2);
                assert!(yes);
            }
            other => panic!("Expected delete, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "shelfr",
            "--quiet",
            "--json",
            "--api-url",
            "http://localhost:9/products",
            "list",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert!(cli.json);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9/products"));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["shelfr", "config", "set", "quiet=true"]).unwrap();
        match cli.get_command() {
            Commands::Config {
                command: ConfigCommands::Set { setting },
            } => assert_eq!(setting, "quiet=true"),
            other => panic!("Expected config set, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["shelfr", "config", "path"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Path
            }
        ));
    }
}
