//! Data models.

pub mod config;
pub mod movie;

pub use config::{load_config, Config, OmdbSettings};
pub use movie::{
    parse_imdb_rating, parse_runtime_minutes, MovieDetail, MovieSummary, WatchedEntry,
};
