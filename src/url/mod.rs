//! URL handling module for gocomics
//!
//! This module builds the canonical site URLs for comics, about pages, calendars,
//! search listings and curated lists, and normalizes URLs pulled out of markup.

mod builder;
mod normalize;

// Re-export main functions
pub use builder::{
    about_url, calendar_url, comic_url, encode_query_value, encode_segment, list_page_url,
    list_url, popular_url, search_url, SearchKind,
};
pub use normalize::{css_background_url, first_srcset_url, last_segment, strip_query};
