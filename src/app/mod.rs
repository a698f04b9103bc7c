//! Application state: one owned store tying search, selection, detail and the
//! watched list together.
//!
//! All state lives in explicit structs and changes only through the methods
//! below; derived views (the watched summary) are recomputed on demand.

pub mod detail;
pub mod search;
pub mod selection;
pub mod summary;
pub mod watched;

use std::sync::Arc;

pub use detail::{DetailLoader, DetailPhase};
pub use search::{SearchController, SearchPhase, MIN_QUERY_LEN};
pub use selection::SelectionState;
pub use summary::{average, WatchedSummary};
pub use watched::WatchedCollection;

use crate::models::WatchedEntry;
use crate::services::Catalog;
use crate::{Error, Result};

/// The whole application state for one session.
pub struct App {
    catalog: Arc<dyn Catalog>,
    pub search: SearchController,
    pub selection: SelectionState,
    pub detail: DetailLoader,
    pub watched: WatchedCollection,
}

impl App {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            search: SearchController::new(),
            selection: SelectionState::new(),
            detail: DetailLoader::new(),
            watched: WatchedCollection::new(),
        }
    }

    /// Handle a query change: gate, fetch, commit.
    pub async fn set_query(&mut self, query: &str) {
        if let Some(request) = self.search.set_query(query) {
            let (generation, result) = search::execute(self.catalog.as_ref(), request).await;
            self.search.commit(generation, result);
        }
    }

    /// Handle a selection: toggle, and load or drop the detail record as a
    /// reaction to the new selection value.
    pub async fn select(&mut self, imdb_id: &str) {
        self.selection.select(imdb_id);

        match self.selection.selected() {
            Some(id) => {
                let request = self.detail.load(id);
                let (generation, result) = detail::execute(self.catalog.as_ref(), request).await;
                self.detail.commit(generation, result);
            }
            None => self.detail.clear(),
        }
    }

    /// Close the detail view without touching the watched list.
    pub fn close_detail(&mut self) {
        self.selection.clear();
        self.detail.clear();
    }

    /// Rate the currently loaded detail and append it to the watched list,
    /// closing the detail view on success.
    pub fn add_watched(&mut self, user_rating: u8) -> Result<()> {
        let detail = self
            .detail
            .detail()
            .ok_or_else(|| Error::other("no movie detail loaded"))?;

        let entry = WatchedEntry::from_detail(detail, user_rating)?;
        self.watched.add(entry)?;
        self.close_detail();
        Ok(())
    }

    /// Drop an entry from the watched list.
    pub fn remove_watched(&mut self, imdb_id: &str) {
        self.watched.remove(imdb_id);
    }

    /// Aggregate statistics over the watched list.
    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary::of(&self.watched)
    }
}
