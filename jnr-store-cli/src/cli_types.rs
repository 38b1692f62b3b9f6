//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jnr-store")]
#[command(about = "Browse and query a JNR game store catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog file or http(s) URL (defaults to the saved setting, then ./games.json)
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List games one page at a time, the way the games page does
    List {
        /// Only games whose title, tags, or genres contain this text
        #[arg(short, long)]
        filter: Option<String>,

        /// popular, newest, oldest, title-asc, title-desc, size-asc, size-desc
        #[arg(short, long, default_value = "popular")]
        sort: String,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Games per page (defaults to the saved setting, then 12)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Quick title/tag search, like the header search box
    Search {
        /// Text to look for (at least 2 characters)
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = jnr_store_catalog::LIVE_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Show the detail page for one game
    Show {
        /// Game id
        id: String,

        /// Number of related games (defaults to the saved setting, then 4)
        #[arg(short, long)]
        related: Option<usize>,

        /// Seed for picking related games, for repeatable output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the home page rows
    Home,

    /// Summary numbers for the whole catalog
    Stats,

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the saved settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the default catalog source (omit to clear it)
    SetCatalog {
        /// Catalog file or http(s) URL
        source: Option<String>,
    },
}
