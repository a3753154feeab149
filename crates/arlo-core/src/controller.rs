// Batch workflow controller
//
// Every operation is the same shape: fresh login, fetch the target
// entities, fire one independent request per entity, wait for all of
// them, and aggregate. Failures inside the fan-out are collected, not
// short-circuited -- sibling units always run to completion.

use std::collections::HashMap;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use arlo_api::models::Friend;
use arlo_api::{ArloClient, CameraCommandOutcome, TransportConfig};

use crate::config::AccountConfig;
use crate::error::{CoreError, UnitError};

/// Which way a friend batch replaces the `devices` mapping.
#[derive(Debug, Clone, Copy)]
enum AccessChange {
    Grant,
    Revoke,
}

impl AccessChange {
    fn unit_error(self, friend_id: &str, err: &arlo_api::Error) -> UnitError {
        match self {
            Self::Grant => UnitError::Grant {
                friend_id: friend_id.to_owned(),
                reason: err.to_string(),
            },
            Self::Revoke => UnitError::Revoke {
                friend_id: friend_id.to_owned(),
                reason: err.to_string(),
            },
        }
    }
}

/// Entry point for the batch workflows.
///
/// Holds only the account config; a fresh client and login are used per
/// invocation, so no state survives between operations.
pub struct Controller {
    config: AccountConfig,
}

impl Controller {
    pub fn new(config: AccountConfig) -> Self {
        Self { config }
    }

    /// Switch every camera's privacy/LED state.
    ///
    /// `on` disarms privacy mode and enables the idle LED on each
    /// camera; `off` does the reverse. Offline cameras are skipped as a
    /// benign no-op.
    pub async fn switch_cameras(&self, on: bool) -> Result<(), CoreError> {
        let client = self.login().await?;
        let devices = client
            .list_devices()
            .await
            .map_err(|e| CoreError::fetch("devices", &e))?;

        info!(device_count = devices.len(), on, "switching cameras");

        let futs = devices.iter().map(|device| {
            let client = &client;
            async move {
                match client.set_camera_state(device, on).await {
                    Ok(CameraCommandOutcome::Applied) => Ok(()),
                    Ok(CameraCommandOutcome::Offline) => {
                        warn!(device_id = %device.device_id, "camera offline, skipped");
                        Ok(())
                    }
                    Err(e) => Err(UnitError::DeviceAction {
                        device_id: device.device_id.clone(),
                        reason: e.to_string(),
                    }),
                }
            }
        });

        collect_batch(join_all(futs).await)
    }

    /// Grant every non-excluded friend access to the complete current
    /// device set.
    pub async fn grant_all_access(&self) -> Result<(), CoreError> {
        let client = self.login().await?;

        let (friends, devices) = tokio::join!(client.list_friends(), client.list_devices());
        let friends = friends.map_err(|e| CoreError::fetch("friends", &e))?;
        let devices = devices.map_err(|e| CoreError::fetch("devices", &e))?;

        let device_map: HashMap<String, String> = devices
            .into_iter()
            .map(|d| (d.unique_id, d.device_name))
            .collect();

        info!(
            friend_count = friends.len(),
            device_count = device_map.len(),
            "granting access to all friends"
        );

        self.update_friends(&client, friends, &device_map, AccessChange::Grant)
            .await
    }

    /// Revoke every non-excluded friend's camera access by replacing
    /// their device set with an empty one.
    pub async fn revoke_all_access(&self) -> Result<(), CoreError> {
        let client = self.login().await?;
        let friends = client
            .list_friends()
            .await
            .map_err(|e| CoreError::fetch("friends", &e))?;

        info!(friend_count = friends.len(), "revoking access from all friends");

        self.update_friends(&client, friends, &HashMap::new(), AccessChange::Revoke)
            .await
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Build a client and perform the fresh-per-invocation login.
    async fn login(&self) -> Result<ArloClient, CoreError> {
        let transport = TransportConfig {
            timeout: self.config.timeout,
            ..TransportConfig::default()
        };
        let client = ArloClient::new(self.config.base_url.clone(), &transport)
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        client
            .login(&self.config.email, &self.config.password)
            .await
            .map_err(|e| CoreError::auth(&e))?;

        Ok(client)
    }

    /// PUT an updated record for each non-excluded friend, replacing its
    /// `devices` mapping with `devices` wholesale.
    async fn update_friends(
        &self,
        client: &ArloClient,
        friends: Vec<Friend>,
        devices: &HashMap<String, String>,
        change: AccessChange,
    ) -> Result<(), CoreError> {
        let futs = friends.into_iter().map(|mut friend| async move {
            if self.config.is_excluded(&friend.email) {
                debug!(friend_id = %friend.id, "friend excluded, skipping");
                return Ok(());
            }

            friend.devices = devices.clone();
            client
                .update_friend(&friend)
                .await
                .map_err(|e| change.unit_error(&friend.id, &e))
        });

        collect_batch(join_all(futs).await)
    }
}

/// Fold per-unit outcomes into the batch result: success only when every
/// unit succeeded, else all collected failures at once.
fn collect_batch(results: Vec<Result<(), UnitError>>) -> Result<(), CoreError> {
    let failures: Vec<UnitError> = results.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Batch { failures })
    }
}
