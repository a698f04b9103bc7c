//! One-shot search command.

use anyhow::Result;
use colored::Colorize;

use crate::app::MIN_QUERY_LEN;
use crate::models::MovieSummary;
use crate::services::Catalog;

/// Execute the search command.
pub async fn run(query: &str, limit: Option<usize>) -> Result<()> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
        println!(
            "{}",
            format!("Query must be at least {} characters", MIN_QUERY_LEN).yellow()
        );
        return Ok(());
    }

    let client = super::build_client()?;
    match client.search(query.trim()).await {
        Ok(results) => {
            let shown = limit.unwrap_or(results.len());
            print_results(&results[..shown.min(results.len())]);
            Ok(())
        }
        Err(err) => {
            println!("{}", err.user_message().red());
            Ok(())
        }
    }
}

/// Print a numbered result table.
pub fn print_results(results: &[MovieSummary]) {
    println!("{}", format!("Found {} movie(s)", results.len()).bold());
    for (index, movie) in results.iter().enumerate() {
        println!(
            "{:>3}. {} ({}) [{}]",
            index + 1,
            movie.title.bold(),
            movie.year,
            movie.imdb_id.dimmed()
        );
    }
}
