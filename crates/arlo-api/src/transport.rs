// Transport configuration for building reqwest::Client instances.
//
// The Arlo cloud speaks JSON over HTTPS with publicly trusted
// certificates, so the knobs here are just timeout and user agent.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. Bounds how long a hung request can stall
    /// a batch; there is no retry on top of it.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "arloctl/0.1.0".to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .default_headers(headers)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
