//! Curated comic lists
//!
//! A list page carries its own metadata plus a paged collection of strips.
//! The metadata is read at construction; the strips are fetched on first
//! access to [`ComicList::comics`] and cached.

use crate::client::GoComics;
use crate::comic::Comic;
use crate::extract::{read_from, Document, Read, TagQuery};
use crate::url::{last_segment, list_page_url, list_url};
use crate::{GoComicsError, Result};
use chrono::NaiveDate;
use scraper::ElementRef;

/// Pages of entries requested when listing a list's comics
pub const DEFAULT_LIST_PAGES: u32 = 20;

const ENTRY_CLASS: &str = "content-section-sm";
const ARTICLE_CLASSES: &str = "gc-article gc-gap-full";
const COPY_LINK_CLASSES: &str = "js-copy-link form-control";

/// A curated list of comics
#[derive(Debug)]
pub struct ComicList {
    client: GoComics,
    code: u64,
    pages: u32,
    url: String,
    title: Option<String>,
    author: Option<String>,
    formatted_date: Option<String>,
    date: Option<NaiveDate>,
    identifier: Option<String>,
    description: Option<String>,
    comics: Option<Vec<Comic>>,
}

impl ComicList {
    /// Fetches a list's landing page, requesting [`DEFAULT_LIST_PAGES`] pages of entries later
    pub fn new(client: &GoComics, code: u64) -> Result<Self> {
        Self::with_pages(client, code, DEFAULT_LIST_PAGES)
    }

    /// Fetches a list's landing page; `pages` bounds how many entries [`Self::comics`] sees
    pub fn with_pages(client: &GoComics, code: u64, pages: u32) -> Result<Self> {
        let landing = list_url(client.base_url(), code);
        let response = client
            .fetch(&landing)
            .map_err(|e| GoComicsError::from_transport(e, &code.to_string(), None))?;
        let document = Document::from_response(&response);

        let formatted_date = document.extract(
            &TagQuery::new("time").attr("itemprop", "datePublished"),
            Read::Text,
        );
        let date = formatted_date
            .as_deref()
            .and_then(|text| NaiveDate::parse_from_str(text, "%B %d, %Y").ok());

        let url = document
            .extract(&TagQuery::new("input").class(COPY_LINK_CLASSES), Read::Attr("value"))
            .unwrap_or_else(|| response.final_url.clone());

        let description = document
            .find(&TagQuery::new("section").class(ARTICLE_CLASSES))
            .and_then(first_child_element)
            .and_then(|child| read_from(child, Read::Text));

        tracing::info!("Fetched comic list {}", url);

        Ok(Self {
            client: client.clone(),
            code,
            pages,
            identifier: last_segment(&url),
            url,
            title: document.extract(&TagQuery::new("h2").class("h1"), Read::Text),
            author: document
                .extract(&TagQuery::new("span").class("h3"), Read::Text)
                .map(|text| text.strip_prefix("By ").unwrap_or(&text).to_string()),
            formatted_date,
            date,
            description,
            comics: None,
        })
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Publication date as printed on the page, e.g. `"March 4, 2019"`
    pub fn formatted_date(&self) -> Option<&str> {
        self.formatted_date.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Strips on the list, each fetched as a [`Comic`], first occurrence kept
    ///
    /// Every entry costs at least one fetch on first access.
    pub fn comics(&mut self) -> Result<&[Comic]> {
        if self.comics.is_none() {
            self.comics = Some(self.fetch_comics()?);
        }
        Ok(self.comics.as_deref().unwrap_or_default())
    }

    fn fetch_comics(&self) -> Result<Vec<Comic>> {
        let url = list_page_url(self.client.base_url(), self.code, self.pages);
        let response = self
            .client
            .fetch(&url)
            .map_err(|e| GoComicsError::from_transport(e, &self.code.to_string(), None))?;
        let document = Document::from_response(&response);

        let mut comics: Vec<Comic> = Vec::new();
        for entry in document.find_all(&TagQuery::new("div").class(ENTRY_CLASS)) {
            let Some((identifier, date)) = first_child_element(entry)
                .and_then(|child| read_from(child, Read::Attr("data-url")))
                .and_then(|data_url| parse_strip_url(&data_url))
            else {
                tracing::debug!("Skipping list entry without a strip URL");
                continue;
            };

            let comic = Comic::new(&self.client, &identifier, Some(date))?;
            if !comics.contains(&comic) {
                comics.push(comic);
            }
        }

        tracing::info!("Comic list {} holds {} comics", self.code, comics.len());
        Ok(comics)
    }
}

impl PartialEq for ComicList {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for ComicList {}

fn first_child_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.children().find_map(ElementRef::wrap)
}

/// Splits `https://host/{identifier}/{YYYY}/{MM}/{DD}` into its identifier and date
fn parse_strip_url(data_url: &str) -> Option<(String, NaiveDate)> {
    let path = data_url
        .split_once("://")
        .map(|(_, rest)| rest.split_once('/').map(|(_, path)| path).unwrap_or(""))
        .unwrap_or(data_url);

    let mut segments = path.trim_matches('/').split('/');
    let identifier = segments.next().filter(|s| !s.is_empty())?;
    let year = segments.next()?.parse().ok()?;
    let month = segments.next()?.parse().ok()?;
    let day = segments.next()?.parse().ok()?;

    Some((identifier.to_string(), NaiveDate::from_ymd_opt(year, month, day)?))
}
