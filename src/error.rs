//! Error types for the popcorn catalog client and session state.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the popcorn application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("OMDb API key not configured. Set OMDB_API_KEY environment variable")]
    ApiKeyMissing,

    // Catalog errors
    #[error("Catalog request failed with status {0}")]
    Transport(String),

    #[error("Movie not found in catalog: {0}")]
    MovieNotFound(String),

    /// A request superseded by newer input. Never shown to the user.
    #[error("Request cancelled")]
    Cancelled,

    // Watched-list errors
    #[error("Invalid user rating {0}: must be between 1 and 10")]
    InvalidRating(u8),

    #[error("Movie already in watched list: {0}")]
    AlreadyWatched(String),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error comes from a cancelled request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// The message shown to the user when this error surfaces in the UI.
    ///
    /// Transport-level failures collapse to a generic message; a missing match
    /// gets its own. `Cancelled` has no user message because callers swallow it.
    pub fn user_message(&self) -> String {
        match self {
            Error::MovieNotFound(_) => "Movie not found".to_string(),
            Error::Transport(_) | Error::Http(_) | Error::Json(_) => {
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        }
    }
}
