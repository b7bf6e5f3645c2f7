// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-ranker")]
#[command(about = "Recipe ranking by ingredient overlap", long_about = None)]
pub struct Cli {
    /// Recipe CSV file (overrides RECIPES_PATH)
    #[arg(long, global = true)]
    pub recipes: Option<PathBuf>,

    /// Number of top recipes to keep per query (overrides TOP_K)
    #[arg(long, global = true)]
    pub top_k: Option<usize>,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the demo query, then evaluate every test query and write all outputs
    Run,

    /// Rank recipes for the given ingredients
    Search {
        /// Query ingredients
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Also show suggested ingredients and the best recipe using the first one
        #[arg(long)]
        expand: bool,
    },

    /// Evaluate the test queries and write the raw and fixed reports
    Batch {
        /// Raw report file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report file with NaN replaced by null
        #[arg(long)]
        fixed_output: Option<PathBuf>,
    },

    /// Compute precision, recall and F1 for two label lists
    Metrics {
        /// Ground-truth labels, e.g. 1,1,0,0,0
        #[arg(long, default_value = "1,1,0,0,0")]
        truth: String,

        /// Predicted labels, e.g. 1,1,1,0,0
        #[arg(long, default_value = "1,1,1,0,0")]
        predicted: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["recipe-ranker"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "recipe-ranker",
            "search",
            "chicken",
            "soy sauce",
            "--expand",
            "--top-k",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.top_k, Some(3));
        match cli.command {
            Some(Commands::Search {
                ingredients,
                expand,
            }) => {
                assert_eq!(ingredients, vec!["chicken", "soy sauce"]);
                assert!(expand);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_requires_ingredients() {
        assert!(Cli::try_parse_from(["recipe-ranker", "search"]).is_err());
    }
}
