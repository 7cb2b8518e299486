use serde::Serialize;
use std::fmt;

/// A link pulled from page content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hyperlink {
    pub url: String,
    pub text: String,
}

impl Hyperlink {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Hyperlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A character from a comic's cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

impl Character {
    /// Builds a character only when every field is present and non-empty
    pub fn from_parts(
        name: Option<String>,
        image_url: Option<String>,
        description: Option<String>,
    ) -> Option<Self> {
        let name = name.filter(|s| !s.is_empty())?;
        let image_url = image_url.filter(|s| !s.is_empty())?;
        let description = description.filter(|s| !s.is_empty())?;
        Some(Self {
            name,
            image_url,
            description,
        })
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// One piece of rich text: plain text or a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Text(String),
    Link(Hyperlink),
}

impl Segment {
    pub fn as_link(&self) -> Option<&Hyperlink> {
        match self {
            Self::Link(link) => Some(link),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Link(link) => write!(f, "{}", link),
        }
    }
}
