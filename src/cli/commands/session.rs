//! Interactive session: the full search / open / rate / watched-list flow.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use crate::app::{App, DetailPhase, SearchPhase};

/// Run the interactive session until the user quits.
pub async fn run() -> Result<()> {
    let client = super::build_client()?;
    let mut app = App::new(Arc::new(client));

    println!("{}", "usePopcorn session".bold());
    println!("Type {} for the command list.", "help".bold());

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "popcorn>".bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "search" | "s" => {
                app.set_query(rest).await;
                print_search_state(&app);
            }
            "open" | "o" => handle_open(&mut app, rest).await,
            "close" | "c" => {
                app.close_detail();
                println!("Detail view closed.");
            }
            "add" | "a" => handle_add(&mut app, rest),
            "rm" => handle_remove(&mut app, rest),
            "list" | "l" => print_watched(&app),
            "stats" => print_stats(&app),
            "help" | "h" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            other => println!("Unknown command: {} (try {})", other, "help".bold()),
        }
    }

    Ok(())
}

fn print_help() {
    println!("  {}  free-text catalog search (min 3 characters)", "search <text>".bold());
    println!("  {}  open a result by number or catalog id", "open <n|id>   ".bold());
    println!("  {}  close the detail view", "close         ".bold());
    println!("  {}  rate the open movie 1-10 and add it to the list", "add <rating>  ".bold());
    println!("  {}  remove a watched movie by number or id", "rm <n|id>     ".bold());
    println!("  {}  show the watched list", "list          ".bold());
    println!("  {}  show watched-list statistics", "stats         ".bold());
    println!("  {}  leave the session", "quit          ".bold());
}

fn print_search_state(app: &App) {
    match app.search.phase() {
        SearchPhase::Idle => println!("(type at least 3 characters to search)"),
        SearchPhase::Loading => println!("Loading..."),
        SearchPhase::Ready(results) => super::search::print_results(results),
        SearchPhase::Failed(message) => println!("{}", message.red()),
    }
}

/// Resolve "open 2" against the current results, or accept a raw catalog id.
async fn handle_open(app: &mut App, arg: &str) {
    let id = if let Ok(index) = arg.parse::<usize>() {
        match app.search.results().get(index.wrapping_sub(1)) {
            Some(movie) => movie.imdb_id.clone(),
            None => {
                println!("No result number {}", arg);
                return;
            }
        }
    } else if !arg.is_empty() {
        arg.to_string()
    } else {
        println!("Usage: open <n|id>");
        return;
    };

    app.select(&id).await;

    match app.detail.phase() {
        DetailPhase::Ready(detail) => {
            super::detail::print_detail(detail);
            if let Some(rating) = app.watched.rating_for(&detail.imdb_id) {
                println!("{}", format!("You rated this movie {} ★", rating).yellow());
            } else {
                println!("Rate it with {}.", "add <1-10>".bold());
            }
        }
        DetailPhase::Failed(message) => println!("{}", message.red()),
        // Toggled off by re-opening the same movie.
        DetailPhase::Empty => println!("Detail view closed."),
        DetailPhase::Loading => println!("Loading..."),
    }
}

fn handle_add(app: &mut App, arg: &str) {
    let rating = match arg.parse::<u8>() {
        Ok(rating) => rating,
        Err(_) => {
            println!("Usage: add <1-10>");
            return;
        }
    };

    match app.add_watched(rating) {
        Ok(()) => println!("{}", "Added to watched list.".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn handle_remove(app: &mut App, arg: &str) {
    let id = if let Ok(index) = arg.parse::<usize>() {
        match app.watched.iter().nth(index.wrapping_sub(1)) {
            Some(entry) => entry.imdb_id.clone(),
            None => {
                println!("No watched movie number {}", arg);
                return;
            }
        }
    } else if !arg.is_empty() {
        arg.to_string()
    } else {
        println!("Usage: rm <n|id>");
        return;
    };

    app.remove_watched(&id);
    println!("Removed {} (if it was listed).", id);
}

fn print_watched(app: &App) {
    if app.watched.is_empty() {
        println!("No watched movies yet.");
        return;
    }

    println!("{}", "Movies you watched".bold());
    for (index, entry) in app.watched.iter().enumerate() {
        println!(
            "{:>3}. {} ({}) ★ {:.1}  you: {}  {} min",
            index + 1,
            entry.title.bold(),
            entry.year,
            entry.imdb_rating,
            entry.user_rating,
            entry.runtime_minutes
        );
    }
}

fn print_stats(app: &App) {
    let summary = app.summary();
    println!("{}", "Movies you watched".bold());
    println!("  movies   {}", summary.count);
    println!("  ★ imdb   {:.1}", summary.avg_imdb_rating);
    println!("  ★ yours  {:.1}", summary.avg_user_rating);
    println!("  minutes  {:.0}", summary.avg_runtime_minutes);
}
