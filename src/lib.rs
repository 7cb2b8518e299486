//! gocomics: a metadata scraper for GoComics strips
//!
//! This crate fetches comic strip pages from GoComics, extracts their metadata
//! (title, imagery, author, characters, related links) from the rendered HTML,
//! and exposes search, popular-list, curated-list and date-ranged streaming queries.

pub mod client;
pub mod comic;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod list;
pub mod query;
pub mod stream;
pub mod url;

#[cfg(test)]
pub(crate) mod test_support;

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for gocomics operations
#[derive(Debug, Error)]
pub enum GoComicsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Comic with identifier '{identifier}' and date '{}' does not exist", display_date(.date))]
    NotFound {
        identifier: String,
        date: Option<NaiveDate>,
    },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GoComicsError {
    /// Converts a page-level transport failure for `identifier`/`date` into
    /// the public taxonomy: not-found stays distinct, everything else is a fetch failure.
    pub(crate) fn from_transport(
        err: TransportError,
        identifier: &str,
        date: Option<NaiveDate>,
    ) -> Self {
        match err {
            TransportError::NotFound { .. } => Self::NotFound {
                identifier: identifier.to_string(),
                date,
            },
            other => Self::Fetch {
                url: other.url().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<TransportError> for GoComicsError {
    fn from(err: TransportError) -> Self {
        Self::Fetch {
            url: err.url().to_string(),
            message: err.to_string(),
        }
    }
}

fn display_date(date: &Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => "latest".to_string(),
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors reported by a [`fetch::Transport`]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failure reported by a custom transport
    #[error("Transport failure for {url}: {message}")]
    Other { url: String, message: String },
}

impl TransportError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url }
            | Self::Status { url, .. }
            | Self::Network { url, .. }
            | Self::Other { url, .. } => url,
        }
    }
}

/// Result type alias for gocomics operations
pub type Result<T> = std::result::Result<T, GoComicsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use client::GoComics;
pub use comic::{Character, Comic, Hyperlink, Segment};
pub use config::Config;
pub use fetch::{HttpTransport, Response, Transport};
pub use list::ComicList;
pub use query::{Category, PoliticalCategory, SearchOptions};
pub use stream::ComicStream;
