//! Movie-related data models.

use serde::Deserialize;

use crate::{Error, Result};

/// One row of a catalog search result set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    /// Catalog-unique identifier (e.g. "tt1375666").
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year, as the catalog reports it (may be a range for series).
    #[serde(rename = "Year")]
    pub year: String,
    /// Poster image URL.
    #[serde(rename = "Poster")]
    pub poster_url: String,
}

/// Full record for a single selected movie.
///
/// Replaced wholesale on each new selection and discarded when the selection
/// clears. Numeric fields are `None` when the catalog reports "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// Runtime in minutes, parsed from strings like "148 min".
    pub runtime_minutes: Option<u32>,
    /// IMDb rating on a 0-10 scale.
    pub imdb_rating: Option<f64>,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

/// A movie the user rated and added to the watched list.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    /// IMDb rating; 0 when the catalog had none.
    pub imdb_rating: f64,
    /// Runtime in minutes; 0 when the catalog had none.
    pub runtime_minutes: u32,
    /// User-supplied rating, 1-10.
    pub user_rating: u8,
}

impl WatchedEntry {
    /// Build a watched entry from a loaded detail record and a user rating.
    ///
    /// The rating must be in 1..=10; anything else is a precondition violation.
    pub fn from_detail(detail: &MovieDetail, user_rating: u8) -> Result<Self> {
        if !(1..=10).contains(&user_rating) {
            return Err(Error::InvalidRating(user_rating));
        }

        Ok(Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating: detail.imdb_rating.unwrap_or(0.0),
            runtime_minutes: detail.runtime_minutes.unwrap_or(0),
            user_rating,
        })
    }
}

/// Parse the leading integer out of a catalog runtime string ("148 min" -> 148).
///
/// Returns `None` for "N/A" or anything that does not start with a digit.
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parse a catalog rating string ("8.8" -> 8.8). `None` for "N/A".
pub fn parse_imdb_rating(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
