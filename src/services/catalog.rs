//! Catalog trait abstraction.
//!
//! The search/detail controllers talk to the catalog through this trait so
//! tests can substitute a mock for the real HTTP client.

use async_trait::async_trait;

use crate::models::{MovieDetail, MovieSummary};
use crate::Result;

/// A remote movie catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Free-text search returning summary rows.
    ///
    /// An empty result set is reported as `Error::MovieNotFound`, matching the
    /// catalog's own "no match" signal.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>>;

    /// Fetch the full record for one catalog id.
    async fn lookup(&self, id: &str) -> Result<MovieDetail>;
}
