//! Client handle
//!
//! [`GoComics`] bundles the transport with the site settings every lookup needs.
//! It holds no mutable state, so cloning it (or handing it to many comics) is cheap.

use crate::comic::Comic;
use crate::config::Config;
use crate::fetch::{HttpTransport, Response, Transport};
use crate::list::ComicList;
use crate::query::{self, SearchOptions};
use crate::stream::ComicStream;
use crate::{GoComicsError, Result, TransportError};
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default number of attempts for the hydration-dependent image lookup
pub const DEFAULT_RETRY_COUNT: u32 = 10;

/// Entry point for every query against the site
#[derive(Clone)]
pub struct GoComics {
    transport: Arc<dyn Transport>,
    base_url: String,
    retry_count: u32,
    download_dir: PathBuf,
}

impl GoComics {
    /// Creates a client that talks HTTP according to `config`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gocomics::{Config, GoComics};
    ///
    /// let client = GoComics::new(&Config::default()).unwrap();
    /// let comic = client.comic("calvinandhobbes", None).unwrap();
    /// println!("{:?}", comic.image_url());
    /// ```
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config).map_err(|e| GoComicsError::Fetch {
            url: config.client.base_url.clone(),
            message: format!("Failed to build HTTP client: {}", e),
        })?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over any [`Transport`]
    pub fn with_transport(config: &Config, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: config.client.base_url.clone(),
            retry_count: config.client.retry_count.max(1),
            download_dir: PathBuf::from(&config.download.directory),
        }
    }

    /// Overrides the image lookup retry count
    ///
    /// The page fetched at construction is always inspected, so the count never drops below one.
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Fetches one URL through the transport
    pub fn fetch(&self, url: &str) -> std::result::Result<Response, TransportError> {
        self.transport.fetch(url)
    }

    /// Fetches a comic; see [`Comic::new`]
    pub fn comic(&self, identifier: &str, date: Option<NaiveDate>) -> Result<Comic> {
        Comic::new(self, identifier, date)
    }

    /// Identifiers from the A-to-Z listing, in page order
    pub fn search(&self, options: &SearchOptions<query::Category>) -> Result<Vec<String>> {
        query::search(self, options)
    }

    /// Identifiers from the political A-to-Z listing, in page order
    pub fn search_political(
        &self,
        options: &SearchOptions<query::PoliticalCategory>,
    ) -> Result<Vec<String>> {
        query::search_political(self, options)
    }

    /// Identifiers of the currently popular comics
    pub fn popular_comics(&self, political: bool) -> Result<Vec<String>> {
        query::get_popular_comics(self, political)
    }

    /// Days in `year`/`month` on which `identifier` published a strip
    pub fn published_dates(&self, identifier: &str, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        query::published_dates(self, identifier, year, month)
    }

    /// Fetches a curated comic list
    pub fn list(&self, code: u64) -> Result<ComicList> {
        ComicList::new(self, code)
    }

    /// Lazily fetches one comic per day from `start` to `end`, inclusive
    pub fn stream(&self, identifier: &str, start: NaiveDate, end: NaiveDate) -> ComicStream {
        ComicStream::new(self, identifier, start, end)
    }
}

impl fmt::Debug for GoComics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoComics")
            .field("base_url", &self.base_url)
            .field("retry_count", &self.retry_count)
            .field("download_dir", &self.download_dir)
            .finish_non_exhaustive()
    }
}
