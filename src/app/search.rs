//! Search controller: query gating, fetch lifecycle, stale-response guarding.

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::models::MovieSummary;
use crate::services::Catalog;
use crate::{Error, Result};

/// Queries shorter than this (trimmed) never reach the catalog.
pub const MIN_QUERY_LEN: usize = 3;

/// Where the search currently stands. Exactly one branch is displayed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    /// Query below the minimum length; nothing fetched, nothing to show.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// A completed fetch with at least one match.
    Ready(Vec<MovieSummary>),
    /// A completed fetch that failed; holds the user-visible message.
    Failed(String),
}

/// A fetch the controller has issued but not yet committed.
///
/// Carries the generation that must still be current at commit time and the
/// abort registration pairing it with the controller's stored handle.
pub struct SearchRequest {
    pub query: String,
    generation: u64,
    registration: AbortRegistration,
}

/// Owns the current query string and the cancellable fetch lifecycle.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    phase: SearchPhase,
    generation: u64,
    inflight: Option<AbortHandle>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw query as last entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading)
    }

    /// Current result set; empty unless a fetch has completed successfully.
    pub fn results(&self) -> &[MovieSummary] {
        match &self.phase {
            SearchPhase::Ready(results) => results,
            _ => &[],
        }
    }

    /// Current user-visible error message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Record a query change.
    ///
    /// Any in-flight request is aborted and its eventual outcome invalidated.
    /// A trimmed query under [`MIN_QUERY_LEN`] clears results and error without
    /// touching the network; otherwise the controller enters `Loading` and the
    /// returned request must be run through [`execute`] and [`commit`].
    pub fn set_query(&mut self, query: &str) -> Option<SearchRequest> {
        self.query = query.to_string();
        self.cancel_inflight();
        self.generation += 1;

        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            self.phase = SearchPhase::Idle;
            return None;
        }

        self.phase = SearchPhase::Loading;
        let (handle, registration) = AbortHandle::new_pair();
        self.inflight = Some(handle);

        Some(SearchRequest {
            query: trimmed.to_string(),
            generation: self.generation,
            registration,
        })
    }

    /// Commit the outcome of an issued request.
    ///
    /// Outcomes from superseded generations are dropped on the floor; a stale
    /// response can never overwrite newer state. Cancellation never produces a
    /// user-visible error.
    pub fn commit(&mut self, generation: u64, result: Result<Vec<MovieSummary>>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale search result");
            return;
        }

        self.inflight = None;
        self.phase = match result {
            Ok(results) if results.is_empty() => {
                SearchPhase::Failed(Error::MovieNotFound(self.query.clone()).user_message())
            }
            Ok(results) => SearchPhase::Ready(results),
            Err(err) if err.is_cancelled() => SearchPhase::Idle,
            Err(err) => SearchPhase::Failed(err.user_message()),
        };
    }

    fn cancel_inflight(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}

/// Run an issued request against the catalog.
///
/// The catalog future is wrapped in `Abortable` so a superseding `set_query`
/// stops the underlying network operation; an abort surfaces as
/// `Error::Cancelled`, which [`SearchController::commit`] swallows.
pub async fn execute(
    catalog: &dyn Catalog,
    request: SearchRequest,
) -> (u64, Result<Vec<MovieSummary>>) {
    let SearchRequest {
        query,
        generation,
        registration,
    } = request;

    let result = match Abortable::new(catalog.search(&query), registration).await {
        Ok(result) => result,
        Err(futures::future::Aborted) => Err(Error::Cancelled),
    };

    (generation, result)
}
