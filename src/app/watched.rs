//! The session-scoped watched list.

use crate::models::WatchedEntry;
use crate::{Error, Result};

/// Ordered collection of movies the user has marked watched.
///
/// Insertion order is preserved for rendering. Ids are unique within the
/// collection. Lives only for the session; nothing is persisted.
#[derive(Debug, Default)]
pub struct WatchedCollection {
    entries: Vec<WatchedEntry>,
}

impl WatchedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate ids are rejected.
    pub fn add(&mut self, entry: WatchedEntry) -> Result<()> {
        if self.contains(&entry.imdb_id) {
            return Err(Error::AlreadyWatched(entry.imdb_id));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove all entries with the given id. Absence is not an error.
    pub fn remove(&mut self, imdb_id: &str) {
        self.entries.retain(|entry| entry.imdb_id != imdb_id);
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.imdb_id == imdb_id)
    }

    /// The user's rating for an id, if it is in the collection.
    pub fn rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.imdb_id == imdb_id)
            .map(|entry| entry.user_rating)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
