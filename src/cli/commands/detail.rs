//! One-shot detail lookup command.

use anyhow::Result;
use colored::Colorize;

use crate::models::MovieDetail;
use crate::services::Catalog;

/// Execute the detail command.
pub async fn run(imdb_id: &str) -> Result<()> {
    let client = super::build_client()?;
    match client.lookup(imdb_id).await {
        Ok(detail) => {
            print_detail(&detail);
            Ok(())
        }
        Err(err) => {
            println!("{}", err.user_message().red());
            Ok(())
        }
    }
}

/// Print a detail block.
pub fn print_detail(detail: &MovieDetail) {
    println!("{} ({})", detail.title.bold(), detail.year);

    let runtime = detail
        .runtime_minutes
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "unknown runtime".to_string());
    println!("{} • {}", detail.released, runtime);
    println!("{}", detail.genre.dimmed());

    if let Some(rating) = detail.imdb_rating {
        println!("{} {} IMDb rating", "★".yellow(), rating);
    }

    println!();
    println!("{}", detail.plot.italic());
    println!("Starring {}", detail.actors);
    println!("Directed by {}", detail.director);
}
