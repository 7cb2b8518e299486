//! About-page attribute groups
//!
//! Each group is extracted from its own fetch of the about page and cached in
//! [`SecondaryCache`] until the comic is refreshed.

use crate::comic::types::{Character, Segment};
use crate::extract::{
    find_all_in, find_in, read_from, rich_text_nodes, walk, Document, Read, TagQuery,
};
use crate::url::first_srcset_url;

const FEATURE_DETAILS_CLASS: &str = "AboutFeature_aboutFeature__details__ru_As";
const FEATURE_IMAGE_CLASS: &str = "AboutFeature_aboutFeature__imageContainer__nE23W";
const CREATOR_CLASS: &str = "AboutCreator_aboutCreator__tcSD7";
const CREATOR_DETAILS_CLASS: &str = "AboutCreator_aboutCreator__details__6YZp3";
const RICH_TEXT_CLASS: &str = "RichTextParser_richTextParser__joxf7";
const SOCIAL_LINK_CLASS: &str = "SocialLinks_socialLinks__link__84fhl";
const CHARACTER_CLASS: &str = "AboutCharacter_aboutCharacter__cAOuK";

/// `None` in a slot means "not fetched yet"
#[derive(Debug, Default)]
pub(crate) struct SecondaryCache {
    pub about: Option<Vec<Segment>>,
    pub about_feature_url: Option<Option<String>>,
    pub about_author: Option<Vec<Segment>>,
    pub author_image_url: Option<Option<String>>,
    pub social_urls: Option<Vec<String>>,
    pub characters: Option<Vec<Character>>,
}

pub(crate) fn about(document: &Document) -> Vec<Segment> {
    rich_text_within(document, FEATURE_DETAILS_CLASS)
}

pub(crate) fn about_feature_url(document: &Document) -> Option<String> {
    first_image_url(document, FEATURE_IMAGE_CLASS)
}

pub(crate) fn about_author(document: &Document) -> Vec<Segment> {
    rich_text_within(document, CREATOR_DETAILS_CLASS)
}

pub(crate) fn author_image_url(document: &Document) -> Option<String> {
    first_image_url(document, CREATOR_CLASS)
}

pub(crate) fn social_urls(document: &Document) -> Vec<String> {
    document
        .find_all(&TagQuery::new("a").class(SOCIAL_LINK_CLASS))
        .into_iter()
        .filter_map(|link| read_from(link, Read::Attr("href")))
        .collect()
}

pub(crate) fn characters(document: &Document) -> Vec<Character> {
    document
        .find_all(&TagQuery::new("div").class(CHARACTER_CLASS))
        .into_iter()
        .filter_map(|card| {
            let name = find_in(card, &TagQuery::new("h3")).and_then(|h| read_from(h, Read::Text));
            let image_url = find_in(card, &TagQuery::new("img"))
                .and_then(|img| read_from(img, Read::Attr("srcset")))
                .and_then(|srcset| first_srcset_url(&srcset));
            let description =
                find_in(card, &TagQuery::new("p")).and_then(|p| read_from(p, Read::Text));

            let character = Character::from_parts(name, image_url, description);
            if character.is_none() {
                tracing::debug!("Dropping incomplete character card");
            }
            character
        })
        .collect()
}

/// Rich-text paragraphs inside `div.{details_class} div.RichTextParser`
fn rich_text_within(document: &Document, details_class: &str) -> Vec<Segment> {
    let Some(details) = document.find(&TagQuery::new("div").class(details_class)) else {
        return Vec::new();
    };
    let Some(rich) = find_in(details, &TagQuery::new("div").class(RICH_TEXT_CLASS)) else {
        return Vec::new();
    };

    let paragraphs = find_all_in(rich, &TagQuery::new("p"));
    walk(&rich_text_nodes(paragraphs))
}

/// First `srcset` candidate of the first image inside `div.{container_class}`
fn first_image_url(document: &Document, container_class: &str) -> Option<String> {
    let container = document.find(&TagQuery::new("div").class(container_class))?;
    let image = find_in(container, &TagQuery::new("img"))?;
    let srcset = read_from(image, Read::Attr("srcset"))?;
    first_srcset_url(&srcset)
}
