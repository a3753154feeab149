// Arlo HTTP client
//
// Wraps `reqwest::Client` with Arlo-specific URL construction, envelope
// parsing, and per-session token state. The endpoint modules (auth,
// devices, friends) are implemented as inherent methods via separate
// files to keep this module focused on transport mechanics.

use std::sync::RwLock;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ActionResponse, ListResponse};
use crate::transport::TransportConfig;

/// Session state captured from a successful login.
#[derive(Debug, Clone)]
struct Session {
    token: String,
    user_id: Option<String>,
}

/// Raw HTTP client for the Arlo cloud API.
///
/// Handles the `{ success, data }` envelope and the per-session auth
/// token. `login` must succeed before any other call; authenticated
/// methods fail with [`Error::Authentication`] otherwise, so no request
/// can ever go out without a token.
pub struct ArloClient {
    http: reqwest::Client,
    base_url: Url,
    /// Token + user id from login. One login per client lifetime; the
    /// token is never persisted beyond it.
    session: RwLock<Option<Session>>,
}

impl ArloClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the service root (`https://arlo.netgear.com` in
    /// production; a mock server in tests).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            session: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            session: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for the auth flow).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── Session state ────────────────────────────────────────────────

    /// Store the session captured from a login response.
    pub(crate) fn set_session(&self, token: String, user_id: Option<String>) {
        debug!("storing session token");
        *self.session.write().expect("session lock poisoned") = Some(Session { token, user_id });
    }

    /// The `Authorization` header value, or an authentication error if
    /// no login has happened yet.
    pub(crate) fn auth_header(&self) -> Result<String, Error> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
            .ok_or_else(|| Error::Authentication {
                message: "not authenticated: call login first".into(),
            })
    }

    /// Source identity for notify envelopes: `{userId}_web` when the
    /// login payload carried a user id, plain `web` otherwise.
    pub(crate) fn notify_source(&self) -> String {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .and_then(|s| s.user_id.as_deref())
            .map_or_else(|| "web".to_owned(), |id| format!("{id}_web"))
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/hmsweb/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/hmsweb/{path}");
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET and unwrap the list envelope.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.auth_header()?)
            .send()
            .await
            .map_err(Error::Transport)?;

        let body = Self::check_status(resp).await?;
        let envelope: ListResponse<T> = Self::parse_json(&body)?;
        if !envelope.success {
            return Err(Error::Api { message: body });
        }
        Ok(envelope.data)
    }

    /// Send a prepared mutation request and parse the action envelope.
    ///
    /// Returns the parsed envelope alongside the raw body so callers can
    /// surface the full payload in failure messages.
    pub(crate) async fn send_action(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<(ActionResponse, String), Error> {
        let resp = builder.send().await.map_err(Error::Transport)?;
        let body = Self::check_status(resp).await?;
        let envelope: ActionResponse = Self::parse_json(&body)?;
        Ok((envelope, body))
    }

    /// Map the HTTP status, returning the body text on success.
    pub(crate) async fn check_status(resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "token rejected (HTTP 401)".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: format!("HTTP {status}: {}", &body[..body.len().min(200)]),
            });
        }

        resp.text().await.map_err(Error::Transport)
    }

    /// Parse a JSON body, keeping the raw text on failure.
    pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
        serde_json::from_str(body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.to_owned(),
            }
        })
    }
}
