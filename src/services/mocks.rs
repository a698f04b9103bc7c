//! Mock catalog implementation for testing.
//!
//! `MockCatalog` lets tests seed search results and detail records, script
//! failures, and stall requests forever to exercise cancellation, while
//! recording every call for verification.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::{MovieDetail, MovieSummary};
use crate::services::Catalog;
use crate::{Error, Result};

/// Failure the mock should return instead of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Non-2xx HTTP status.
    Transport,
    /// API-level "no match" signal.
    NotFound,
}

impl MockFailure {
    fn into_error(self, subject: &str) -> Error {
        match self {
            MockFailure::Transport => Error::Transport("500 Internal Server Error".to_string()),
            MockFailure::NotFound => Error::MovieNotFound(subject.to_string()),
        }
    }
}

/// Mock implementation of `Catalog` for testing.
#[derive(Clone, Default)]
pub struct MockCatalog {
    search_results: Arc<Mutex<HashMap<String, Vec<MovieSummary>>>>,
    details: Arc<Mutex<HashMap<String, MovieDetail>>>,
    failure: Arc<Mutex<Option<MockFailure>>>,
    hang: Arc<Mutex<bool>>,
    search_calls: Arc<Mutex<Vec<String>>>,
    lookup_calls: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the result set for a query.
    pub fn insert_search(&self, query: &str, results: Vec<MovieSummary>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_string(), results);
    }

    /// Seed the detail record for an id.
    pub fn insert_detail(&self, detail: MovieDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.imdb_id.clone(), detail);
    }

    /// Make every subsequent call fail with the given failure.
    pub fn set_failure(&self, failure: Option<MockFailure>) {
        *self.failure.lock().unwrap() = failure;
    }

    /// Make every subsequent call stall until it is aborted.
    pub fn set_hang(&self, hang: bool) {
        *self.hang.lock().unwrap() = hang;
    }

    /// Queries received so far (for verification).
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Ids looked up so far (for verification).
    pub fn lookup_calls(&self) -> Vec<String> {
        self.lookup_calls.lock().unwrap().clone()
    }

    async fn stall_if_hanging(&self) {
        let hang = *self.hang.lock().unwrap();
        if hang {
            futures::future::pending::<()>().await;
        }
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        self.stall_if_hanging().await;

        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure.into_error(query));
        }

        self.search_results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .ok_or_else(|| Error::MovieNotFound(query.to_string()))
    }

    async fn lookup(&self, id: &str) -> Result<MovieDetail> {
        self.lookup_calls.lock().unwrap().push(id.to_string());
        self.stall_if_hanging().await;

        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure.into_error(id));
        }

        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::MovieNotFound(id.to_string()))
    }
}
