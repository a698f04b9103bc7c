//! Tests for the watched collection and its summary statistics.

use popcorn::app::{average, WatchedCollection, WatchedSummary};
use popcorn::models::WatchedEntry;
use popcorn::Error;

fn entry(id: &str, user_rating: u8, imdb_rating: f64, runtime: u32) -> WatchedEntry {
    WatchedEntry {
        imdb_id: id.to_string(),
        title: format!("Movie {}", id),
        year: "2010".to_string(),
        poster_url: String::new(),
        imdb_rating,
        runtime_minutes: runtime,
        user_rating,
    }
}

// ========== COLLECTION TESTS ==========

#[test]
fn test_add_preserves_insertion_order() {
    let mut watched = WatchedCollection::new();
    watched.add(entry("tt1", 7, 7.0, 100)).unwrap();
    watched.add(entry("tt2", 8, 8.0, 110)).unwrap();
    watched.add(entry("tt3", 9, 9.0, 120)).unwrap();

    let ids: Vec<&str> = watched.iter().map(|e| e.imdb_id.as_str()).collect();
    assert_eq!(ids, ["tt1", "tt2", "tt3"]);
}

#[test]
fn test_add_rejects_duplicate_id() {
    let mut watched = WatchedCollection::new();
    watched.add(entry("tt1", 7, 7.0, 100)).unwrap();

    let err = watched.add(entry("tt1", 9, 7.0, 100)).unwrap_err();
    assert!(matches!(err, Error::AlreadyWatched(id) if id == "tt1"));
    assert_eq!(watched.len(), 1);
    assert_eq!(watched.rating_for("tt1"), Some(7));
}

#[test]
fn test_remove_filters_by_id() {
    let mut watched = WatchedCollection::new();
    watched.add(entry("tt1", 7, 7.0, 100)).unwrap();
    watched.add(entry("tt2", 8, 8.0, 110)).unwrap();

    watched.remove("tt1");
    assert!(!watched.contains("tt1"));
    assert!(watched.contains("tt2"));
    assert_eq!(watched.len(), 1);
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let mut watched = WatchedCollection::new();
    watched.add(entry("tt1", 7, 7.0, 100)).unwrap();
    watched.add(entry("tt2", 8, 8.0, 110)).unwrap();

    watched.remove("tt9");

    let ids: Vec<&str> = watched.iter().map(|e| e.imdb_id.as_str()).collect();
    assert_eq!(ids, ["tt1", "tt2"]);
}

#[test]
fn test_rating_for_unknown_id_is_none() {
    let watched = WatchedCollection::new();
    assert_eq!(watched.rating_for("tt1"), None);
    assert!(!watched.contains("tt1"));
}

// ========== AVERAGE TESTS ==========

#[test]
fn test_average_of_empty_is_zero() {
    assert_eq!(average(std::iter::empty::<f64>()), 0.0);
}

#[test]
fn test_average_of_single_value_is_that_value() {
    assert_eq!(average([8.8]), 8.8);
}

#[test]
fn test_average_of_pair_is_order_independent() {
    assert_eq!(average([4.0, 6.0]), 5.0);
    assert_eq!(average([6.0, 4.0]), 5.0);
}

// ========== SUMMARY TESTS ==========

#[test]
fn test_summary_of_empty_collection() {
    let summary = WatchedSummary::of(&WatchedCollection::new());

    assert_eq!(summary.count, 0);
    assert_eq!(summary.avg_imdb_rating, 0.0);
    assert_eq!(summary.avg_user_rating, 0.0);
    assert_eq!(summary.avg_runtime_minutes, 0.0);
}

#[test]
fn test_summary_averages_all_fields() {
    let mut watched = WatchedCollection::new();
    watched.add(entry("tt1", 6, 7.0, 100)).unwrap();
    watched.add(entry("tt2", 8, 9.0, 140)).unwrap();

    let summary = WatchedSummary::of(&watched);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.avg_imdb_rating, 8.0);
    assert_eq!(summary.avg_user_rating, 7.0);
    assert_eq!(summary.avg_runtime_minutes, 120.0);
}
