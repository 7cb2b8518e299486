//! Configuration module for gocomics
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section has defaults, so a configuration file is optional.
//!
//! # Example
//!
//! ```no_run
//! use gocomics::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gocomics.toml")).unwrap();
//! println!("Image lookups retry up to {} times", config.client.retry_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, DownloadConfig, UserAgentConfig, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
