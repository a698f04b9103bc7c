//! Command line argument definitions.

use clap::{Parser, Subcommand};

/// usePopcorn - Search movies and keep a rated watched list
#[derive(Parser, Debug)]
#[command(name = "popcorn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the movie catalog
    Search {
        /// Free-text query (minimum 3 characters)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show full details for one movie
    Detail {
        /// Catalog id (e.g. tt1375666)
        #[arg(value_name = "IMDB_ID")]
        imdb_id: String,
    },

    /// Interactive session: search, open, rate, and track watched movies
    Session,
}
