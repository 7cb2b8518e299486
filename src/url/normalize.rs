use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Removes the query string from a URL, keeping everything else
///
/// Image URLs on the site carry resizing parameters; dropping them yields the
/// full-size asset. Relative or unparsable input is handled textually.
///
/// # Examples
///
/// ```
/// use gocomics::url::strip_query;
///
/// assert_eq!(
///     strip_query("https://assets.example.com/img/abc.png?width=300&q=75"),
///     "https://assets.example.com/img/abc.png"
/// );
/// ```
pub fn strip_query(raw: &str) -> String {
    if let Ok(mut url) = Url::parse(raw) {
        url.set_query(None);
        return url.to_string();
    }

    match raw.find('?') {
        None => raw.to_string(),
        Some(start) => {
            let fragment = raw[start..].find('#').map(|i| &raw[start + i..]);
            format!("{}{}", &raw[..start], fragment.unwrap_or(""))
        }
    }
}

/// Returns the first candidate URL of a `srcset` attribute, query stripped
///
/// `srcset` lists `url descriptor` pairs separated by `", "`.
pub fn first_srcset_url(srcset: &str) -> Option<String> {
    let candidate = srcset.split(", ").next()?.trim();
    let url = candidate.split(' ').next()?;
    if url.is_empty() {
        return None;
    }
    Some(strip_query(url))
}

fn background_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r#"url\("([^"]+)"\)"#).ok())
        .as_ref()
}

/// Pulls the `url("...")` target out of an inline `style` attribute, query stripped
pub fn css_background_url(style: &str) -> Option<String> {
    let captures = background_pattern()?.captures(style)?;
    captures.get(1).map(|m| strip_query(m.as_str()))
}

/// Returns the last non-empty path segment of an `href`
///
/// Listing pages link each comic as `/{identifier}`; trailing slashes are ignored.
pub fn last_segment(href: &str) -> Option<String> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
