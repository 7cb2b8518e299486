use serde::Deserialize;

use crate::client::DEFAULT_RETRY_COUNT;

/// Root of the site all URLs are built from
pub const DEFAULT_BASE_URL: &str = "https://www.gocomics.com/";

/// Main configuration structure for gocomics
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

/// Site access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the site; always ends with a slash after loading
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// How many times the hydration-dependent image lookup is attempted
    #[serde(rename = "retry-count", default = "default_retry_count")]
    pub retry_count: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            retry_count: default_retry_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(rename = "client-name", default = "default_client_name")]
    pub client_name: String,

    #[serde(rename = "client-version", default = "default_client_version")]
    pub client_version: String,

    /// Optional URL with information about the client
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!("{}/{} (+{})", self.client_name, self.client_version, contact),
            None => format!("{}/{}", self.client_name, self.client_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            client_version: default_client_version(),
            contact_url: None,
        }
    }
}

/// Where downloaded images go when the caller gives no directory
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_retry_count() -> u32 {
    DEFAULT_RETRY_COUNT
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_client_name() -> String {
    "gocomics-rs".to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_directory() -> String {
    ".".to_string()
}
