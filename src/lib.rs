//! usePopcorn Library
//!
//! A library for searching the OMDb movie catalog, inspecting movie details,
//! and maintaining a rated, session-scoped watched list.

pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};
