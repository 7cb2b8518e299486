//! Comic entity
//!
//! A [`Comic`] is one strip of one series, either the latest or a specific day.
//! Construction performs a blocking fetch of the strip page and extracts every
//! primary attribute from it. About-page attributes are fetched on first access
//! and cached on the instance until [`Comic::refresh`].

mod about;
mod download;
mod primary;
mod types;

pub use download::ALLOWED_EXTENSIONS;
pub use types::{Character, Hyperlink, Segment};

use crate::client::GoComics;
use crate::extract::{retry, Document};
use crate::url::{about_url, comic_url};
use crate::{GoComicsError, Result};
use about::SecondaryCache;
use chrono::{Local, NaiveDate};
use primary::PrimaryFields;

/// A comic strip and its metadata
///
/// Two comics are equal when their resolved URLs are equal.
#[derive(Debug)]
pub struct Comic {
    client: GoComics,
    identifier: String,
    date: Option<NaiveDate>,
    url: String,
    primary: PrimaryFields,
    secondary: SecondaryCache,
}

impl Comic {
    /// Fetches a comic
    ///
    /// # Construction Steps
    ///
    /// 1. Reject an empty identifier or a date after today (no network access)
    /// 2. Build the strip URL
    /// 3. Fetch the page; not-found becomes [`GoComicsError::NotFound`], any
    ///    other failure [`GoComicsError::Fetch`]
    /// 4. Extract each primary attribute independently
    /// 5. Look up the main image, re-fetching up to the client's retry count
    ///
    /// # Arguments
    ///
    /// * `client` - The client whose transport and settings are used
    /// * `identifier` - The comic's slug, e.g. `"garfield"`
    /// * `date` - The strip's day, or `None` for the latest strip
    pub fn new(client: &GoComics, identifier: &str, date: Option<NaiveDate>) -> Result<Self> {
        validate_request(identifier, date, Local::now().date_naive())?;

        let url = comic_url(client.base_url(), identifier, date);
        let response = client
            .fetch(&url)
            .map_err(|e| GoComicsError::from_transport(e, identifier, date))?;
        let document = Document::from_response(&response);

        let mut primary = PrimaryFields::extract(&document);

        primary.image_url = retry(client.retry_count(), |attempt| {
            if attempt == 1 {
                return primary::image_url(&document);
            }
            match client.fetch(&url) {
                Ok(response) => primary::image_url(&Document::from_response(&response)),
                Err(e) => {
                    tracing::debug!("Image lookup attempt {} for {} failed: {}", attempt, url, e);
                    None
                }
            }
        });

        if primary.image_url.is_none() {
            tracing::warn!(
                "No image URL for {} after {} attempts",
                url,
                client.retry_count()
            );
        }

        tracing::info!("Fetched comic {}", response.final_url);

        Ok(Self {
            client: client.clone(),
            identifier: identifier.to_string(),
            date,
            url: response.final_url,
            primary,
            secondary: SecondaryCache::default(),
        })
    }

    /// Re-runs construction with the same identifier and date
    ///
    /// On success every primary attribute is replaced and every cached
    /// about-page attribute is cleared. On failure the comic is left untouched.
    pub fn refresh(&mut self) -> Result<()> {
        *self = Self::new(&self.client, &self.identifier, self.date)?;
        Ok(())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Resolved URL of the strip page
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.primary.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.primary.description.as_deref()
    }

    pub fn share_image_url(&self) -> Option<&str> {
        self.primary.share_image_url.as_deref()
    }

    pub fn keywords(&self) -> Option<&[String]> {
        self.primary.keywords.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.primary.author.as_deref()
    }

    /// Follower count as displayed by the site (e.g. `"12.5K"`)
    pub fn followers_count(&self) -> Option<&str> {
        self.primary.followers_count.as_deref()
    }

    /// Display name of the series
    pub fn name(&self) -> Option<&str> {
        self.primary.name.as_deref()
    }

    pub fn header_feature_url(&self) -> Option<&str> {
        self.primary.header_feature_url.as_deref()
    }

    /// URL of the strip image itself
    pub fn image_url(&self) -> Option<&str> {
        self.primary.image_url.as_deref()
    }

    /// Description of the comic from its about page
    pub fn about(&mut self) -> Result<&[Segment]> {
        if self.secondary.about.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.about = Some(about::about(&page));
        }
        Ok(self.secondary.about.as_deref().unwrap_or_default())
    }

    pub fn about_feature_url(&mut self) -> Result<Option<&str>> {
        if self.secondary.about_feature_url.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.about_feature_url = Some(about::about_feature_url(&page));
        }
        Ok(self
            .secondary
            .about_feature_url
            .as_ref()
            .and_then(|url| url.as_deref()))
    }

    /// Description of the author from the about page
    pub fn about_author(&mut self) -> Result<&[Segment]> {
        if self.secondary.about_author.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.about_author = Some(about::about_author(&page));
        }
        Ok(self.secondary.about_author.as_deref().unwrap_or_default())
    }

    pub fn author_image_url(&mut self) -> Result<Option<&str>> {
        if self.secondary.author_image_url.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.author_image_url = Some(about::author_image_url(&page));
        }
        Ok(self
            .secondary
            .author_image_url
            .as_ref()
            .and_then(|url| url.as_deref()))
    }

    /// Links to the comic's social media profiles
    pub fn social_urls(&mut self) -> Result<&[String]> {
        if self.secondary.social_urls.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.social_urls = Some(about::social_urls(&page));
        }
        Ok(self.secondary.social_urls.as_deref().unwrap_or_default())
    }

    /// The comic's cast; entries missing a name, image or description are dropped
    pub fn characters(&mut self) -> Result<&[Character]> {
        if self.secondary.characters.is_none() {
            let page = self.fetch_about_page()?;
            self.secondary.characters = Some(about::characters(&page));
        }
        Ok(self.secondary.characters.as_deref().unwrap_or_default())
    }

    fn fetch_about_page(&self) -> Result<Document> {
        let url = about_url(self.client.base_url(), &self.identifier);
        let response = self
            .client
            .fetch(&url)
            .map_err(|e| GoComicsError::from_transport(e, &self.identifier, None))?;
        Ok(Document::from_response(&response))
    }
}

impl PartialEq for Comic {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Comic {}

/// Checks the construction inputs against `today`
fn validate_request(identifier: &str, date: Option<NaiveDate>, today: NaiveDate) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(GoComicsError::Validation(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if let Some(date) = date {
        if date > today {
            return Err(GoComicsError::Validation(format!(
                "Date {} cannot be in the future",
                date
            )));
        }
    }

    Ok(())
}
