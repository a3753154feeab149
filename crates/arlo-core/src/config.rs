// Account configuration
//
// One explicit value built at process start and threaded through every
// workflow call. Nothing in this crate reads ambient global state.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Production service root.
pub const DEFAULT_BASE_URL: &str = "https://arlo.netgear.com";

/// Account credentials and workflow settings.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub email: String,
    pub password: SecretString,
    /// Friend emails the grant/revoke batches never touch. Exact,
    /// case-sensitive comparison.
    pub excluded_emails: Vec<String>,
    pub base_url: Url,
    /// Per-request transport timeout.
    pub timeout: Duration,
}

impl AccountConfig {
    /// Config with production defaults: the public service URL, a 30s
    /// request timeout, and an empty exclusion list.
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
            excluded_emails: Vec::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
        }
    }

    /// Whether a friend email is on the exclusion list.
    pub fn is_excluded(&self, email: &str) -> bool {
        self.excluded_emails.iter().any(|e| e == email)
    }
}
