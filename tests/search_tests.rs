//! Tests for the search controller: query gating, error mapping, and the
//! stale-response / cancellation guarantees.

use popcorn::app::search::{self, SearchController, SearchPhase};
use popcorn::models::MovieSummary;
use popcorn::services::mocks::{MockCatalog, MockFailure};

fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster_url: String::new(),
    }
}

async fn run_query(controller: &mut SearchController, catalog: &MockCatalog, query: &str) {
    if let Some(request) = controller.set_query(query) {
        let (generation, result) = search::execute(catalog, request).await;
        controller.commit(generation, result);
    }
}

// ========== QUERY GATE TESTS ==========

#[tokio::test]
async fn test_short_query_never_hits_the_catalog() {
    let catalog = MockCatalog::new();
    let mut controller = SearchController::new();

    for query in ["", "i", "in", "  in  "] {
        run_query(&mut controller, &catalog, query).await;
        assert_eq!(*controller.phase(), SearchPhase::Idle);
    }

    assert!(catalog.search_calls().is_empty());
}

#[tokio::test]
async fn test_short_query_clears_previous_results_and_error() {
    let catalog = MockCatalog::new();
    catalog.insert_search("inception", vec![summary("tt1375666", "Inception")]);
    let mut controller = SearchController::new();

    run_query(&mut controller, &catalog, "inception").await;
    assert_eq!(controller.results().len(), 1);

    run_query(&mut controller, &catalog, "in").await;
    assert!(controller.results().is_empty());
    assert!(controller.error().is_none());

    // Same reset from a failed state.
    catalog.set_failure(Some(MockFailure::Transport));
    run_query(&mut controller, &catalog, "inception").await;
    assert!(controller.error().is_some());

    run_query(&mut controller, &catalog, "in").await;
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn test_query_is_trimmed_before_search() {
    let catalog = MockCatalog::new();
    catalog.insert_search("inception", vec![summary("tt1375666", "Inception")]);
    let mut controller = SearchController::new();

    run_query(&mut controller, &catalog, "  inception  ").await;
    assert_eq!(controller.results().len(), 1);
    assert_eq!(catalog.search_calls(), ["inception"]);
}

// ========== ERROR MAPPING TESTS ==========

#[tokio::test]
async fn test_no_match_surfaces_movie_not_found() {
    let catalog = MockCatalog::new();
    let mut controller = SearchController::new();

    run_query(&mut controller, &catalog, "zzzzzz").await;
    assert_eq!(controller.error(), Some("Movie not found"));
}

#[tokio::test]
async fn test_empty_result_set_surfaces_movie_not_found() {
    let catalog = MockCatalog::new();
    catalog.insert_search("blank", Vec::new());
    let mut controller = SearchController::new();

    run_query(&mut controller, &catalog, "blank").await;
    assert_eq!(controller.error(), Some("Movie not found"));
    assert!(controller.results().is_empty());
}

#[tokio::test]
async fn test_transport_failure_surfaces_generic_message() {
    let catalog = MockCatalog::new();
    catalog.set_failure(Some(MockFailure::Transport));
    let mut controller = SearchController::new();

    run_query(&mut controller, &catalog, "inception").await;
    assert_eq!(controller.error(), Some("Something went wrong"));
}

// ========== LOADING FLAG TESTS ==========

#[tokio::test]
async fn test_loading_flag_wraps_the_fetch() {
    let catalog = MockCatalog::new();
    catalog.insert_search("inception", vec![summary("tt1375666", "Inception")]);
    let mut controller = SearchController::new();

    let request = controller.set_query("inception").unwrap();
    assert!(controller.is_loading());

    let (generation, result) = search::execute(&catalog, request).await;
    controller.commit(generation, result);
    assert!(!controller.is_loading());
}

// ========== STALE-RESPONSE TESTS ==========

#[tokio::test]
async fn test_stale_response_cannot_overwrite_newer_state() {
    let catalog = MockCatalog::new();
    catalog.insert_search("inception", vec![summary("tt1375666", "Inception")]);
    catalog.insert_search("interstellar", vec![summary("tt0816692", "Interstellar")]);
    let mut controller = SearchController::new();

    // First request is issued but its outcome arrives after a newer query.
    let stale = controller.set_query("inception").unwrap();
    let stale_outcome = search::execute(&catalog, stale).await;

    run_query(&mut controller, &catalog, "interstellar").await;
    assert_eq!(controller.results()[0].imdb_id, "tt0816692");

    controller.commit(stale_outcome.0, stale_outcome.1);
    assert_eq!(controller.results()[0].imdb_id, "tt0816692");
}

#[tokio::test]
async fn test_superseded_request_is_aborted() {
    let catalog = MockCatalog::new();
    catalog.set_hang(true);
    let mut controller = SearchController::new();

    let request = controller.set_query("inception").unwrap();
    let task = {
        let catalog = catalog.clone();
        tokio::spawn(async move { search::execute(&catalog, request).await })
    };

    // Give the hung fetch a chance to start, then supersede it.
    tokio::task::yield_now().await;
    catalog.set_hang(false);
    catalog.insert_search("interstellar", vec![summary("tt0816692", "Interstellar")]);
    run_query(&mut controller, &catalog, "interstellar").await;

    let (generation, result) = task.await.unwrap();
    assert!(result.as_ref().err().is_some_and(|e| e.is_cancelled()));

    controller.commit(generation, result);
    assert_eq!(controller.results()[0].imdb_id, "tt0816692");
    assert!(controller.error().is_none());
}

#[tokio::test]
async fn test_cancellation_never_sets_the_error_field() {
    let catalog = MockCatalog::new();
    catalog.set_hang(true);
    let mut controller = SearchController::new();

    let request = controller.set_query("inception").unwrap();
    let task = {
        let catalog = catalog.clone();
        tokio::spawn(async move { search::execute(&catalog, request).await })
    };

    tokio::task::yield_now().await;

    // Shrinking below the threshold aborts the in-flight fetch.
    assert!(controller.set_query("in").is_none());

    let (generation, result) = task.await.unwrap();
    assert!(result.as_ref().err().is_some_and(|e| e.is_cancelled()));

    controller.commit(generation, result);
    assert_eq!(*controller.phase(), SearchPhase::Idle);
    assert!(controller.error().is_none());
}
