// Login flow
//
// Credential login against `/hmsweb/login`. The token from the response
// is stored on the client and sent as the `Authorization` header on all
// subsequent requests. One login per invocation; tokens are not reused.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ArloClient;
use crate::error::Error;
use crate::models::LoginResponse;

impl ArloClient {
    /// Authenticate with email/password.
    ///
    /// On success the session token is stored and used by every other
    /// method. A response without a usable token fails with
    /// [`Error::Authentication`] -- nothing downstream can run without it.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.api_url("login");
        debug!("logging in at {url}");

        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {body}"),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: LoginResponse = Self::parse_json(&body)?;

        let data = envelope.data.ok_or_else(|| Error::Authentication {
            message: "login response missing data".into(),
        })?;
        let token = data
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Authentication {
                message: "login response missing token".into(),
            })?;

        self.set_session(token, data.user_id);
        debug!("login successful");
        Ok(())
    }
}
