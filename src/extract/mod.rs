//! HTML extraction layer
//!
//! This module turns fetched pages into typed values:
//! - [`Document`] wraps a parsed page and answers tag lookups
//! - [`TagQuery`] names a tag by type plus attribute-equality constraints
//! - [`rich_text`] flattens and walks mixed text/anchor content
//! - [`retry`] re-runs lookups whose markup is hydrated late
//!
//! Lookups never fail: a missing tag or attribute is `None`, so one absent
//! field cannot abort extraction of the rest of a page.

mod query;
pub mod retry;
pub mod rich_text;

pub use query::TagQuery;
pub use retry::retry;
pub use rich_text::{rich_text_nodes, walk, RichNode};

use crate::fetch::Response;
use scraper::{ElementRef, Html};

/// What to read from a located tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read<'a> {
    /// The named attribute's value
    Attr(&'a str),
    /// The tag's text content, whitespace-trimmed
    Text,
}

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    pub fn from_response(response: &Response) -> Self {
        Self::parse(&response.text())
    }

    /// Root element of the page, usable as a search scope
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First tag matching `query` in document order
    pub fn find(&self, query: &TagQuery) -> Option<ElementRef<'_>> {
        find_in(self.root(), query)
    }

    /// Every tag matching `query`, in document order
    pub fn find_all(&self, query: &TagQuery) -> Vec<ElementRef<'_>> {
        find_all_in(self.root(), query)
    }

    /// Locates `query` and reads from it
    ///
    /// # Example
    ///
    /// ```
    /// use gocomics::extract::{Document, Read, TagQuery};
    ///
    /// let doc = Document::parse(r#"<meta property="og:title" content="Garfield">"#);
    /// let title = doc.extract(&TagQuery::new("meta").attr("property", "og:title"), Read::Attr("content"));
    /// assert_eq!(title.as_deref(), Some("Garfield"));
    ///
    /// let missing = doc.extract(&TagQuery::new("meta").attr("property", "og:image"), Read::Attr("content"));
    /// assert_eq!(missing, None);
    /// ```
    pub fn extract(&self, query: &TagQuery, read: Read<'_>) -> Option<String> {
        self.find(query).and_then(|element| read_from(element, read))
    }
}

/// First descendant of `scope` matching `query`
pub fn find_in<'a>(scope: ElementRef<'a>, query: &TagQuery) -> Option<ElementRef<'a>> {
    let selector = query.selector()?;
    let found = scope.select(&selector).next();
    found
}

/// Every descendant of `scope` matching `query`
pub fn find_all_in<'a>(scope: ElementRef<'a>, query: &TagQuery) -> Vec<ElementRef<'a>> {
    match query.selector() {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Reads an attribute or the text of an already located tag
pub fn read_from(element: ElementRef<'_>, read: Read<'_>) -> Option<String> {
    match read {
        Read::Attr(name) => element.value().attr(name).map(str::to_string),
        Read::Text => Some(element_text(element).trim().to_string()),
    }
}

/// Concatenated text of every text node under `element`
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
