use thiserror::Error;

/// Top-level error type for the `arlo-api` crate.
///
/// Covers every failure mode of the HTTP surface: authentication,
/// transport, service-reported errors, and malformed bodies.
/// `arlo-core` maps these into workflow-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed, the token was rejected, or no login has happened yet.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Service ─────────────────────────────────────────────────────
    /// The service reported a failure (`success: false` or a non-2xx
    /// status). The message carries the raw response payload.
    #[error("API error: {message}")]
    Api { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error is an authentication failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
