//! In-memory transport and page fixtures shared by unit tests

use crate::client::GoComics;
use crate::config::Config;
use crate::fetch::{Response, Transport};
use crate::TransportError;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub const BASE: &str = "https://www.gocomics.com/";

#[derive(Debug, Clone)]
enum Reply {
    Page { final_url: String, body: Vec<u8> },
    Status(u16),
}

#[derive(Debug, Default)]
struct State {
    replies: HashMap<String, VecDeque<Reply>>,
    counts: HashMap<String, usize>,
}

/// Scripted transport
///
/// Each URL holds a queue of replies. A fetch takes the front reply while more
/// than one is queued; the last one repeats forever. Unknown URLs are not found.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, body: &str) -> Self {
        self.redirect(url, url, body)
    }

    /// Serves `body` for `url` as if the server redirected to `final_url`
    pub fn redirect(self, url: &str, final_url: &str, body: &str) -> Self {
        self.push(
            url,
            Reply::Page {
                final_url: final_url.to_string(),
                body: body.as_bytes().to_vec(),
            },
        )
    }

    pub fn bytes(self, url: &str, body: &[u8]) -> Self {
        self.push(
            url,
            Reply::Page {
                final_url: url.to_string(),
                body: body.to_vec(),
            },
        )
    }

    pub fn status(self, url: &str, code: u16) -> Self {
        self.push(url, Reply::Status(code))
    }

    /// Makes every later fetch of `url` fail with `code`
    pub fn fail(&self, url: &str, code: u16) {
        let mut state = self.state.lock().unwrap();
        state
            .replies
            .insert(url.to_string(), VecDeque::from([Reply::Status(code)]));
    }

    /// Fetches issued for `url` so far
    pub fn count(&self, url: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.counts.get(url).copied().unwrap_or(0)
    }

    /// Fetches issued for any URL so far
    pub fn total(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.counts.values().sum()
    }

    fn push(self, url: &str, reply: Reply) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state
                .replies
                .entry(url.to_string())
                .or_default()
                .push_back(reply);
        }
        self
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: &str) -> Result<Response, TransportError> {
        let mut state = self.state.lock().unwrap();
        *state.counts.entry(url.to_string()).or_default() += 1;

        let reply = match state.replies.get_mut(url) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Page { final_url, body }) => Ok(Response {
                status: 200,
                body,
                final_url,
            }),
            Some(Reply::Status(404)) | None => Err(TransportError::NotFound {
                url: url.to_string(),
            }),
            Some(Reply::Status(status)) => Err(TransportError::Status {
                url: url.to_string(),
                status,
            }),
        }
    }
}

/// A client with default settings backed by `transport`
pub fn client_with(transport: &MockTransport) -> GoComics {
    GoComics::with_transport(&Config::default(), transport.clone())
}

/// A strip page carrying every primary attribute; the image block only when `image` is given
pub fn comic_page(image: Option<&str>) -> String {
    let image_block = image
        .map(|url| {
            format!(
                r#"<div id="S:4"><script type="application/ld+json">{{"@type":"ImageObject","contentUrl":"{url}"}}</script></div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<html>
<head>
    <meta property="og:title" content="Garfield by Jim Davis for March 05, 2024">
    <meta property="og:description" content="Garfield lasagna">
    <meta property="og:image" content="https://cdn.example.com/share.jpg">
    <meta name="keywords" content="garfield, cat, lasagna">
</head>
<body>
    <div class="HeaderFeature_headerFeature__backgroundImage__ipPVn" style="background-image: url(&quot;https://cdn.example.com/banner.jpg?w=1400&quot;)"></div>
    <h1 class="Typography_typography__C_Hp6 Typography_typography_d2__3FxkY">Garfield</h1>
    <span class="Typography_typography__C_Hp6 Typography_typography_body2___WsK9">By Jim Davis | 12.5K Followers</span>
    {image_block}
</body>
</html>"#
    )
}

pub const ABOUT_PAGE: &str = r#"<html>
<body>
    <div class="AboutFeature_aboutFeature__imageContainer__nE23W">
        <img srcset="https://cdn.example.com/feature.jpg?w=640 640w, https://cdn.example.com/feature.jpg?w=1280 1280w">
    </div>
    <div class="AboutFeature_aboutFeature__details__ru_As">
        <div class="RichTextParser_richTextParser__joxf7"><p>Garfield is a comic strip by <a href="https://www.gocomics.com/profiles/jim-davis">Jim Davis</a>.</p></div>
    </div>
    <div class="AboutCreator_aboutCreator__tcSD7">
        <img srcset="https://cdn.example.com/jim.jpg?w=200 200w">
        <div class="AboutCreator_aboutCreator__details__6YZp3">
            <div class="RichTextParser_richTextParser__joxf7"><p>Jim Davis was born in 1945.</p></div>
        </div>
    </div>
    <div class="SocialLinks_socialLinks">
        <a class="SocialLinks_socialLinks__link__84fhl" href="https://twitter.com/garfield">Twitter</a>
        <a class="SocialLinks_socialLinks__link__84fhl" href="https://instagram.com/garfield">Instagram</a>
        <a class="SocialLinks_socialLinks__link__84fhl">Broken</a>
    </div>
    <div class="AboutCharacter_aboutCharacter__cAOuK">
        <img srcset="https://cdn.example.com/odie.png?w=100 100w">
        <h3>Odie</h3>
        <p>A dog.</p>
    </div>
    <div class="AboutCharacter_aboutCharacter__cAOuK">
        <h3>Nermal</h3>
        <p>The world's cutest kitten.</p>
    </div>
</body>
</html>"#;
