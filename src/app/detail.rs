//! Detail loader: fetches the full record for the currently selected movie.
//!
//! Independent lifecycle from the search controller, with the same stale-
//! response guard: each `load` supersedes the previous one, aborting its fetch
//! and invalidating its generation.

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::models::MovieDetail;
use crate::services::Catalog;
use crate::{Error, Result};

/// Where the detail view currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    /// No selection.
    #[default]
    Empty,
    /// A fetch for the selected id is in flight.
    Loading,
    /// The selected movie's full record.
    Ready(MovieDetail),
    /// The fetch failed; holds the user-visible message.
    Failed(String),
}

/// A detail fetch issued for one selected id.
pub struct DetailRequest {
    pub imdb_id: String,
    generation: u64,
    registration: AbortRegistration,
}

/// Owns the detail fetch lifecycle for the current selection.
#[derive(Debug, Default)]
pub struct DetailLoader {
    phase: DetailPhase,
    generation: u64,
    inflight: Option<AbortHandle>,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading)
    }

    /// The loaded record, if the last fetch completed successfully.
    pub fn detail(&self) -> Option<&MovieDetail> {
        match &self.phase {
            DetailPhase::Ready(detail) => Some(detail),
            _ => None,
        }
    }

    /// React to a new selected id: abort any previous fetch and issue one for
    /// exactly this id.
    pub fn load(&mut self, imdb_id: &str) -> DetailRequest {
        self.cancel_inflight();
        self.generation += 1;
        self.phase = DetailPhase::Loading;

        let (handle, registration) = AbortHandle::new_pair();
        self.inflight = Some(handle);

        DetailRequest {
            imdb_id: imdb_id.to_string(),
            generation: self.generation,
            registration,
        }
    }

    /// Commit the outcome of an issued fetch; stale generations are dropped.
    pub fn commit(&mut self, generation: u64, result: Result<MovieDetail>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale detail result");
            return;
        }

        self.inflight = None;
        self.phase = match result {
            Ok(detail) => DetailPhase::Ready(detail),
            Err(err) if err.is_cancelled() => DetailPhase::Empty,
            Err(err) => DetailPhase::Failed(err.user_message()),
        };
    }

    /// Drop the current record and abort any in-flight fetch.
    pub fn clear(&mut self) {
        self.cancel_inflight();
        self.generation += 1;
        self.phase = DetailPhase::Empty;
    }

    fn cancel_inflight(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}

/// Run an issued detail fetch against the catalog.
pub async fn execute(catalog: &dyn Catalog, request: DetailRequest) -> (u64, Result<MovieDetail>) {
    let DetailRequest {
        imdb_id,
        generation,
        registration,
    } = request;

    let result = match Abortable::new(catalog.lookup(&imdb_id), registration).await {
        Ok(result) => result,
        Err(futures::future::Aborted) => Err(Error::Cancelled),
    };

    (generation, result)
}
