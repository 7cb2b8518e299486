//! Listing queries
//!
//! Search, political search and popular lists each issue one fetch and read
//! comic identifiers from the repeated link pattern of the listing page.
//! The calendar lookup reads the dates a strip was published in one month.

use crate::client::GoComics;
use crate::extract::{read_from, Document, Read, TagQuery};
use crate::url::{calendar_url, last_segment, popular_url, search_url, SearchKind};
use crate::{GoComicsError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

const A_TO_Z_LINK_CLASS: &str = "ComicsAtoZ_comics__link__IyrQd";
const POPULAR_LINK_CLASS: &str = "BadgeByline_badgeByline__link__uZaRR";

/// A category filter as it appears in the query string
pub trait CategorySlug: Copy {
    fn slug(&self) -> &'static str;
}

/// Categories of the A-to-Z listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ComicosEnEspanol,
    FamilyComics,
    FunnyAnimals,
    GagComics,
    GraphicNovels,
    MentalHealthComics,
    NewspaperComicStrips,
    OffbeatComics,
    OfficeHumor,
    RelationshipComics,
    SciFiFantasyComics,
    SportsComics,
    VintageComics,
    Webcomics,
    Kids,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Self::ComicosEnEspanol,
        Self::FamilyComics,
        Self::FunnyAnimals,
        Self::GagComics,
        Self::GraphicNovels,
        Self::MentalHealthComics,
        Self::NewspaperComicStrips,
        Self::OffbeatComics,
        Self::OfficeHumor,
        Self::RelationshipComics,
        Self::SciFiFantasyComics,
        Self::SportsComics,
        Self::VintageComics,
        Self::Webcomics,
        Self::Kids,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComicosEnEspanol => "comicos-en-espanol",
            Self::FamilyComics => "family-comics",
            Self::FunnyAnimals => "funny-animals",
            Self::GagComics => "gag-comics",
            Self::GraphicNovels => "graphic-novels",
            Self::MentalHealthComics => "mental-health-comics",
            Self::NewspaperComicStrips => "newspaper-comic-strips",
            Self::OffbeatComics => "offbeat-comics",
            Self::OfficeHumor => "office-humor",
            Self::RelationshipComics => "relationship-comics",
            Self::SciFiFantasyComics => "sci-fi-fantasy-comics",
            Self::SportsComics => "sports-comics",
            Self::VintageComics => "vintage-comics",
            Self::Webcomics => "webcomics",
            Self::Kids => "kids",
        }
    }
}

/// Leanings of the political A-to-Z listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoliticalCategory {
    Left,
    Center,
    Right,
}

impl PoliticalCategory {
    pub const ALL: [PoliticalCategory; 3] = [Self::Left, Self::Center, Self::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl CategorySlug for Category {
    fn slug(&self) -> &'static str {
        self.as_str()
    }
}

impl CategorySlug for PoliticalCategory {
    fn slug(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for Category {
    type Err = GoComicsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GoComicsError::Validation(format!("Unknown category '{}'", s)))
    }
}

impl FromStr for PoliticalCategory {
    type Err = GoComicsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                GoComicsError::Validation(format!("Unknown political category '{}'", s))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PoliticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for an A-to-Z search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions<C> {
    /// Only comics updated today
    pub last_updated_today: bool,
    /// Only comics in any of these categories; empty means all
    pub categories: Vec<C>,
}

impl<C> Default for SearchOptions<C> {
    fn default() -> Self {
        Self {
            last_updated_today: false,
            categories: Vec::new(),
        }
    }
}

impl<C: CategorySlug> SearchOptions<C> {
    pub fn updated_today(mut self) -> Self {
        self.last_updated_today = true;
        self
    }

    pub fn category(mut self, category: C) -> Self {
        self.categories.push(category);
        self
    }

    fn slugs(&self) -> Vec<&'static str> {
        self.categories.iter().map(CategorySlug::slug).collect()
    }
}

/// Returns identifiers from the A-to-Z listing, alphabetical as the site lists them
///
/// # Example
///
/// ```no_run
/// use gocomics::{Category, Config, GoComics, SearchOptions};
/// use gocomics::query::search;
///
/// let client = GoComics::new(&Config::default()).unwrap();
/// let options = SearchOptions::default().updated_today().category(Category::Webcomics);
/// for identifier in search(&client, &options).unwrap() {
///     println!("{}", identifier);
/// }
/// ```
pub fn search(client: &GoComics, options: &SearchOptions<Category>) -> Result<Vec<String>> {
    let url = search_url(
        client.base_url(),
        SearchKind::Comics,
        options.last_updated_today,
        &options.slugs(),
    );
    identifiers_from(client, &url, A_TO_Z_LINK_CLASS)
}

/// Returns identifiers from the political A-to-Z listing
pub fn search_political(
    client: &GoComics,
    options: &SearchOptions<PoliticalCategory>,
) -> Result<Vec<String>> {
    let url = search_url(
        client.base_url(),
        SearchKind::Political,
        options.last_updated_today,
        &options.slugs(),
    );
    identifiers_from(client, &url, A_TO_Z_LINK_CLASS)
}

/// Returns identifiers of popular comics, or popular political cartoons
pub fn get_popular_comics(client: &GoComics, political: bool) -> Result<Vec<String>> {
    let url = popular_url(client.base_url(), political);
    identifiers_from(client, &url, POPULAR_LINK_CLASS)
}

/// Returns the days of `year`/`month` on which `identifier` published a strip
///
/// The calendar endpoint answers with a JSON array of `"YYYY/MM/DD"` strings.
/// Entries that do not parse are skipped; an unreadable body yields no dates.
pub fn published_dates(
    client: &GoComics,
    identifier: &str,
    year: i32,
    month: u32,
) -> Result<Vec<NaiveDate>> {
    if !(1..=12).contains(&month) {
        return Err(GoComicsError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    let url = calendar_url(client.base_url(), identifier, year, month);
    let response = client
        .fetch(&url)
        .map_err(|e| GoComicsError::from_transport(e, identifier, None))?;

    let entries: Vec<serde_json::Value> = match serde_json::from_slice(&response.body) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Calendar {} is not a JSON array: {}", url, e);
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| entry.as_str())
        .filter_map(|entry| NaiveDate::parse_from_str(entry, "%Y/%m/%d").ok())
        .collect())
}

/// Fetches a listing page and reads the last `href` segment of each matching link
fn identifiers_from(client: &GoComics, url: &str, link_class: &str) -> Result<Vec<String>> {
    let response = client.fetch(url)?;
    let document = Document::from_response(&response);

    let identifiers: Vec<String> = document
        .find_all(&TagQuery::new("a").class(link_class))
        .into_iter()
        .filter_map(|link| read_from(link, Read::Attr("href")))
        .filter_map(|href| last_segment(&href))
        .collect();

    tracing::info!("Found {} comics at {}", identifiers.len(), url);
    Ok(identifiers)
}
