//! Page retrieval
//!
//! This module defines the [`Transport`] seam every page fetch goes through and
//! the blocking HTTP implementation used outside of tests.

mod http;
mod transport;

pub use http::{build_http_client, HttpTransport};
pub use transport::{Response, Transport};
