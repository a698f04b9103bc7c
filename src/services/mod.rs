//! External service clients.

pub mod catalog;
pub mod mocks;
pub mod omdb;

pub use catalog::Catalog;
pub use omdb::{OmdbClient, OmdbConfig};
