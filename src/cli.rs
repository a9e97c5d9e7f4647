use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

/// mealsteps - find recipes by ingredient and cook them step by step
#[derive(Parser)]
#[command(name = "mealsteps")]
#[command(about = "Find recipes by ingredient and follow them one step at a time")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the recipe API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override the HTTP timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive recipe browser
    Browse {
        /// Ingredient to search for immediately on startup
        #[arg(short, long)]
        ingredient: Option<String>,
    },
    /// Search meals by main ingredient and print them
    Search {
        /// Ingredient to search for (e.g., chicken)
        ingredient: String,
        /// Output format
        #[arg(short, long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show one meal with its ingredients and numbered steps
    Show {
        /// Meal id from a search result
        id: String,
        /// Output format
        #[arg(short, long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Split instruction text into steps (reads stdin when no file is given)
    Steps {
        /// File containing instruction text
        file: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_json_format() {
        let cli = Cli::try_parse_from(["mealsteps", "search", "chicken", "--format", "json"])
            .unwrap();
        match cli.command {
            Some(Commands::Search { ingredient, format }) => {
                assert_eq!(ingredient, "chicken");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from(["mealsteps", "show", "52772", "--timeout", "3"]).unwrap();
        assert_eq!(cli.timeout, Some(3));
        assert!(matches!(cli.command, Some(Commands::Show { .. })));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["mealsteps"]).unwrap();
        assert!(cli.command.is_none());
    }
}
