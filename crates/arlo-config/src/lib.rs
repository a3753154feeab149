//! Account configuration for arloctl.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `arlo_core::AccountConfig`. The CLI adds
//! flag-override wrappers on top; core never sees these types.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arlo_core::{AccountConfig, DEFAULT_BASE_URL};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name (used when --profile is not specified).
    pub default_profile: Option<String>,

    /// Named account profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// A named account profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Account email.
    pub email: String,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Friend emails never touched by grant/revoke batches.
    #[serde(default)]
    pub excluded_emails: Vec<String>,

    /// Override the service base URL (mainly for testing).
    pub base_url: Option<String>,

    /// Override the request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "arloctl", "arloctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("arloctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("ARLOCTL_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

/// Render the config as TOML with secret material blanked out.
pub fn to_redacted_toml(cfg: &Config) -> Result<String, ConfigError> {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("<redacted>".into());
        }
    }
    Ok(toml::to_string_pretty(&cfg)?)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a password from the credential chain.
///
/// Order: the profile's `password_env` variable, then `ARLO_PASSWORD`,
/// then the system keyring, then the plaintext config field.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env -> env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Conventional env var
    if let Ok(val) = std::env::var("ARLO_PASSWORD") {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("arloctl", &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref password) = profile.password {
        return Ok(SecretString::from(password.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

// ── Translation to core config ──────────────────────────────────────

/// Build an `AccountConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_account_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<AccountConfig, ConfigError> {
    if profile.email.is_empty() {
        return Err(ConfigError::Validation {
            field: "email".into(),
            reason: "must not be empty".into(),
        });
    }

    let password = resolve_password(profile, profile_name)?;

    let raw_url = profile.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    let base_url: url::Url = raw_url.parse().map_err(|_| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL: {raw_url}"),
    })?;

    let mut account = AccountConfig::new(profile.email.clone(), password);
    account.excluded_emails = profile.excluded_emails.clone();
    account.base_url = base_url;
    if let Some(secs) = profile.timeout {
        account.timeout = Duration::from_secs(secs);
    }
    Ok(account)
}
