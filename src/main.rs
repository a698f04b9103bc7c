//! usePopcorn CLI
//!
//! Search the OMDb movie catalog, inspect details, and keep a rated watched
//! list for the session.

use clap::Parser;
use popcorn::cli::{
    args::{Cli, Commands},
    commands::{detail, search, session},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Search { query, limit }) => {
            search::run(&query, limit).await?;
        }
        Some(Commands::Detail { imdb_id }) => {
            detail::run(&imdb_id).await?;
        }
        Some(Commands::Session) | None => {
            session::run().await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("popcorn=debug")
    } else {
        EnvFilter::new("popcorn=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
