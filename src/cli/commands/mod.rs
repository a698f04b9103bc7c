//! CLI command implementations.

pub mod detail;
pub mod search;
pub mod session;

use crate::models;
use crate::services::{OmdbClient, OmdbConfig};

/// Build the OMDb client from config file and environment.
pub fn build_client() -> crate::Result<OmdbClient> {
    let config = models::load_config();
    let omdb = OmdbConfig::from_settings(&config).or_else(|_| OmdbConfig::from_env())?;
    Ok(OmdbClient::new(omdb))
}
