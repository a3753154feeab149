//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use arlo_config::ConfigError;
use arlo_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(arlo::auth_failed),
        help(
            "Verify the account email and password.\n\
             Run: arloctl config path to locate your profile file."
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(arlo::no_credentials),
        help(
            "Set the ARLO_PASSWORD environment variable, or add email and\n\
             password to the profile in the config file."
        )
    )]
    NoCredentials { profile: String },

    // ── Workflow ─────────────────────────────────────────────────────
    #[error("Failed to fetch {resource}: {message}")]
    #[diagnostic(code(arlo::fetch_failed))]
    FetchFailed { resource: String, message: String },

    #[error("{failed} action(s) failed:\n{report}")]
    #[diagnostic(
        code(arlo::batch_failed),
        help(
            "Each line names the device or friend that could not be updated.\n\
             Re-running the command retries every entity."
        )
    )]
    BatchFailed { failed: usize, report: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(arlo::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(code(arlo::config))]
    Config(ConfigError),

    // ── Internal ─────────────────────────────────────────────────────
    #[error("Internal error: {message}")]
    #[diagnostic(code(arlo::internal))]
    Internal { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Auth { message } => CliError::AuthFailed { message },

            CoreError::Fetch { resource, message } => CliError::FetchFailed {
                resource: resource.into(),
                message,
            },

            CoreError::Batch { failures } => CliError::BatchFailed {
                failed: failures.len(),
                report: failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            },

            CoreError::Internal(message) => CliError::Internal { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            other => CliError::Config(other),
        }
    }
}
