//! Aggregate statistics over the watched list.

use crate::app::watched::WatchedCollection;

/// Derived statistics for the watched list. Recomputed on demand; rounding is
/// left to display code.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime_minutes: f64,
}

impl WatchedSummary {
    /// Compute the summary for a collection.
    pub fn of(watched: &WatchedCollection) -> Self {
        Self {
            count: watched.len(),
            avg_imdb_rating: average(watched.iter().map(|e| e.imdb_rating)),
            avg_user_rating: average(watched.iter().map(|e| f64::from(e.user_rating))),
            avg_runtime_minutes: average(watched.iter().map(|e| f64::from(e.runtime_minutes))),
        }
    }
}

/// Arithmetic mean; an empty input averages to 0, not NaN.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}
