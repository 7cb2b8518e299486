//! Strip-page attributes
//!
//! Class names are the site's generated CSS-module names; each lookup is
//! independent so a renamed class only loses its own field.

use crate::extract::{element_text, find_in, Document, Read, TagQuery};
use crate::url::css_background_url;

const BYLINE_CLASSES: &str = "Typography_typography__C_Hp6 Typography_typography_body2___WsK9";
const SERIES_NAME_CLASSES: &str = "Typography_typography__C_Hp6 Typography_typography_d2__3FxkY";
const HEADER_BACKGROUND_CLASS: &str = "HeaderFeature_headerFeature__backgroundImage__ipPVn";
const IMAGE_CONTAINER_ID: &str = "S:4";

#[derive(Debug, Clone, Default)]
pub(crate) struct PrimaryFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub share_image_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub author: Option<String>,
    pub followers_count: Option<String>,
    pub name: Option<String>,
    pub header_feature_url: Option<String>,
    /// Filled separately through the retry loop
    pub image_url: Option<String>,
}

impl PrimaryFields {
    pub fn extract(document: &Document) -> Self {
        let (author, followers_count) = byline(document);

        Self {
            title: meta(document, "property", "og:title"),
            description: meta(document, "property", "og:description"),
            share_image_url: meta(document, "property", "og:image"),
            keywords: meta(document, "name", "keywords").map(|content| split_keywords(&content)),
            author,
            followers_count,
            name: document.extract(&TagQuery::new("h1").class(SERIES_NAME_CLASSES), Read::Text),
            header_feature_url: document
                .extract(
                    &TagQuery::new("div").class(HEADER_BACKGROUND_CLASS),
                    Read::Attr("style"),
                )
                .and_then(|style| css_background_url(&style)),
            image_url: None,
        }
    }
}

/// Main strip image from the JSON-LD block, absent until the page is hydrated
pub(crate) fn image_url(document: &Document) -> Option<String> {
    let container = document.find(&TagQuery::new("div").attr("id", IMAGE_CONTAINER_ID))?;
    let script = find_in(
        container,
        &TagQuery::new("script").attr("type", "application/ld+json"),
    )?;

    let payload: serde_json::Value = match serde_json::from_str(&element_text(script)) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Unreadable JSON-LD payload: {}", e);
            return None;
        }
    };

    payload
        .get("contentUrl")
        .and_then(|url| url.as_str())
        .map(str::to_string)
}

fn meta(document: &Document, key: &str, value: &str) -> Option<String> {
    document.extract(&TagQuery::new("meta").attr(key, value), Read::Attr("content"))
}

fn split_keywords(content: &str) -> Vec<String> {
    content
        .split(", ")
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits `"By {author} | {count} Followers"` into its two parts
fn byline(document: &Document) -> (Option<String>, Option<String>) {
    let Some(text) = document.extract(&TagQuery::new("span").class(BYLINE_CLASSES), Read::Text)
    else {
        return (None, None);
    };

    let mut parts = text.split(" | ");
    let author = parts
        .next()
        .map(|part| part.strip_prefix("By ").unwrap_or(part).trim().to_string())
        .filter(|author| !author.is_empty());
    let followers = parts
        .next()
        .and_then(|part| part.split_whitespace().next())
        .map(str::to_string);

    (author, followers)
}
