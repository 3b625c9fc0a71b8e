use clap::{Parser, Subcommand, ValueEnum};

use crate::ui::{Locale, Theme};

#[derive(Parser)]
#[command(name = "cogito")]
#[command(about = "Browse a collection of attributed quotations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the collection document (a JSON array of thoughts)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Color palette for the interactive browser
    #[arg(long, global = true, value_enum)]
    pub theme: Option<Theme>,

    /// Language of the interface labels
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (the default when no command is given)
    Browse,

    /// Print matching thoughts
    List {
        /// Case-insensitive search over text and author
        #[arg(long, default_value = "")]
        search: String,

        /// Category name, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Cap the number of thoughts printed (defaults to one batch)
        #[arg(long)]
        limit: Option<usize>,

        /// Print the entire filtered view
        #[arg(long)]
        all: bool,

        #[arg(long, default_value = "plain", value_enum)]
        format: OutputFormat,
    },

    /// Print one randomly chosen matching thought
    Random {
        /// Case-insensitive search over text and author
        #[arg(long, default_value = "")]
        search: String,

        /// Category name, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "plain", value_enum)]
        format: OutputFormat,
    },

    /// Print the categories observed in the collection
    Categories {
        #[arg(long, default_value = "plain", value_enum)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
