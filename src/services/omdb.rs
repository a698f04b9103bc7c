//! OMDb API client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::{
    parse_imdb_rating, parse_runtime_minutes, Config, MovieDetail, MovieSummary,
};
use crate::services::Catalog;
use crate::{Error, Result};

/// OMDb client configuration.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key.
    pub api_key: String,
    /// Base URL of the catalog endpoint.
    pub base_url: String,
}

impl OmdbConfig {
    /// Create config from environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OMDB_API_KEY").map_err(|_| Error::ApiKeyMissing)?;
        Ok(Self {
            api_key,
            base_url: "https://www.omdbapi.com/".to_string(),
        })
    }

    /// Create config from loaded application settings.
    pub fn from_settings(config: &Config) -> Result<Self> {
        let api_key = config.omdb.api_key.clone().ok_or(Error::ApiKeyMissing)?;
        Ok(Self {
            api_key,
            base_url: config.omdb.base_url.clone(),
        })
    }
}

/// OMDb API client.
pub struct OmdbClient {
    config: OmdbConfig,
    client: reqwest::Client,
}

/// Search response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "Response")]
    response: String,
}

/// Detail response payload. Numeric fields arrive as strings ("148 min", "8.8").
#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Released", default)]
    released: String,
    #[serde(rename = "Actors", default)]
    actors: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Genre", default)]
    genre: String,
    #[serde(rename = "Response")]
    response: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Create a new OMDb client from environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OmdbConfig::from_env()?))
    }

    /// Build a full request URL for the given query parameter pair.
    fn build_url(&self, param: &str, value: &str) -> String {
        format!(
            "{}?apikey={}&{}={}",
            self.config.base_url,
            self.config.api_key,
            param,
            urlencoding::encode(value)
        )
    }

    /// Issue one GET and surface non-2xx statuses as transport errors.
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "catalog request failed");
            return Err(Error::Transport(status.to_string()));
        }
        Ok(resp)
    }
}

#[async_trait]
impl Catalog for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let url = self.build_url("s", query);
        tracing::debug!(query, "searching catalog");

        let body: SearchResponse = self.get(&url).await?.json().await?;

        // The API reports "no match" in-band rather than via status code.
        if body.response != "True" || body.search.is_empty() {
            return Err(Error::MovieNotFound(query.to_string()));
        }

        Ok(body.search)
    }

    async fn lookup(&self, id: &str) -> Result<MovieDetail> {
        let url = self.build_url("i", id);
        tracing::debug!(id, "fetching movie detail");

        let body: DetailResponse = self.get(&url).await?.json().await?;

        if body.response != "True" {
            return Err(Error::MovieNotFound(id.to_string()));
        }

        Ok(MovieDetail {
            imdb_id: body.imdb_id,
            title: body.title,
            year: body.year,
            poster_url: body.poster,
            runtime_minutes: parse_runtime_minutes(&body.runtime),
            imdb_rating: parse_imdb_rating(&body.imdb_rating),
            plot: body.plot,
            released: body.released,
            actors: body.actors,
            director: body.director,
            genre: body.genre,
        })
    }
}
