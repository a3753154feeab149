// Friend (shared access) endpoints
//
// Listing via GET and wholesale replacement via PUT. The `devices`
// mapping on a PUT is always the complete granted set -- there is no
// incremental grant/revoke on the wire.

use reqwest::header::AUTHORIZATION;
use tracing::debug;

use crate::client::ArloClient;
use crate::error::Error;
use crate::models::Friend;

impl ArloClient {
    /// List all friend accounts.
    ///
    /// `GET /hmsweb/users/friends`
    pub async fn list_friends(&self) -> Result<Vec<Friend>, Error> {
        let url = self.api_url("users/friends");
        debug!("listing friends");
        self.get_list(url).await
    }

    /// Replace a friend's device grants.
    ///
    /// `PUT /hmsweb/users/friends` with the full record. A `success:
    /// false` response fails with the raw payload in the error message.
    pub async fn update_friend(&self, friend: &Friend) -> Result<(), Error> {
        let url = self.api_url("users/friends");
        debug!(
            friend_id = %friend.id,
            device_count = friend.devices.len(),
            "updating friend access"
        );

        let builder = self
            .http()
            .put(url)
            .header(AUTHORIZATION, self.auth_header()?)
            .json(friend);

        let (resp, body) = self.send_action(builder).await?;

        if resp.success {
            Ok(())
        } else {
            Err(Error::Api { message: body })
        }
    }
}
