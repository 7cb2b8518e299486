use crate::TransportError;

/// A fetched page
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// Final URL after redirects
    pub final_url: String,
}

impl Response {
    /// Body decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Issues blocking requests on behalf of the scraper
///
/// Implementations must report not-found distinctly from other failures
/// ([`TransportError::NotFound`]) and must return the final resolved URL.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Response, TransportError>;
}
