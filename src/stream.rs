//! Date-ranged comic stream

use crate::client::GoComics;
use crate::comic::Comic;
use crate::Result;
use chrono::NaiveDate;
use std::iter::FusedIterator;

/// Lazily fetches one comic per day over a closed date range
///
/// Element `i` is the comic for `start + i` days. Nothing is fetched until the
/// iterator is advanced, and a failing day is yielded as an `Err` at its own
/// position without ending the stream. To start over, create a new stream.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use gocomics::{Config, GoComics};
///
/// let client = GoComics::new(&Config::default()).unwrap();
/// let start = NaiveDate::from_ymd_opt(1985, 11, 18).unwrap();
/// let end = NaiveDate::from_ymd_opt(1985, 11, 24).unwrap();
///
/// for comic in client.stream("calvinandhobbes", start, end) {
///     match comic {
///         Ok(comic) => println!("{}", comic.url()),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct ComicStream {
    client: GoComics,
    identifier: String,
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl ComicStream {
    pub fn new(client: &GoComics, identifier: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            client: client.clone(),
            identifier: identifier.to_string(),
            current: Some(start),
            end,
        }
    }

    /// Day the next element will be fetched for, if any remain
    pub fn next_date(&self) -> Option<NaiveDate> {
        self.current.filter(|date| *date <= self.end)
    }
}

impl Iterator for ComicStream {
    type Item = Result<Comic>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next_date()?;
        self.current = date.succ_opt();

        tracing::debug!("Streaming {} for {}", self.identifier, date);
        Some(Comic::new(&self.client, &self.identifier, Some(date)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next_date()
            .map(|date| (self.end - date).num_days() as usize + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ComicStream {}

impl FusedIterator for ComicStream {}
