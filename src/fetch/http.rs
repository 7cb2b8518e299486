//! HTTP transport implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the blocking client with the configured user agent and timeout
//! - Redirect following with final URL reporting
//! - Error classification (not-found vs. other status vs. network)

use crate::config::Config;
use crate::fetch::transport::{Response, Transport};
use crate::TransportError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The loaded configuration (user agent and timeout are used)
///
/// # Example
///
/// ```no_run
/// use gocomics::config::Config;
/// use gocomics::fetch::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.client.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Transport`] backed by a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(build_http_client(config)?))
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Response, TransportError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                tracing::debug!("Request timeout for {}", url);
            }
            TransportError::Network {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        let final_url = response.url().to_string();

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(TransportError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if final_url != url {
            tracing::debug!("{} redirected to {}", url, final_url);
        }

        let body = response
            .bytes()
            .map_err(|e| TransportError::Network {
                url: url.to_string(),
                source: e,
            })?
            .to_vec();

        Ok(Response {
            status: status.as_u16(),
            body,
            final_url,
        })
    }
}
