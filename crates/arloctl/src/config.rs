//! CLI-side account resolution: profile + flag/env overrides ->
//! `arlo_core::AccountConfig`. Core never sees the TOML types.

use std::time::Duration;

use secrecy::SecretString;

use arlo_core::AccountConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active account from config file, profile, and CLI flags.
pub fn resolve_account(global: &GlobalOpts) -> Result<AccountConfig, CliError> {
    let cfg = arlo_config::load_config_or_default();
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    let mut account = if let Some(profile) = cfg.profiles.get(&profile_name) {
        arlo_config::profile_to_account_config(profile, &profile_name)?
    } else {
        // No profile on disk -- build from flags / env vars alone.
        let email = global
            .email
            .clone()
            .ok_or_else(|| CliError::NoCredentials {
                profile: profile_name.clone(),
            })?;
        let password = std::env::var("ARLO_PASSWORD")
            .map(SecretString::from)
            .map_err(|_| CliError::NoCredentials {
                profile: profile_name.clone(),
            })?;
        AccountConfig::new(email, password)
    };

    // CLI flag overrides
    if let Some(ref email) = global.email {
        account.email.clone_from(email);
    }
    if let Some(ref raw) = global.base_url {
        account.base_url = raw.parse().map_err(|_| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
    }
    if let Some(secs) = global.timeout {
        account.timeout = Duration::from_secs(secs);
    }

    Ok(account)
}
