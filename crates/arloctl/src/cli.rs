//! Clap derive structures for the `arloctl` CLI.

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// arloctl -- batch automation for Arlo cameras and shared access
#[derive(Debug, Parser)]
#[command(
    name = "arloctl",
    version,
    about = "Automate Arlo cameras and shared access from the command line",
    long_about = "Batch automation for an Arlo account: switch every camera's\n\
        privacy/LED state, or grant and revoke friend access to all cameras\n\
        in one shot. Each invocation performs a fresh login.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "ARLO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Account email (overrides profile)
    #[arg(long, env = "ARLO_EMAIL", global = true)]
    pub email: Option<String>,

    /// Service base URL (overrides profile; mainly for testing)
    #[arg(long, env = "ARLO_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ARLO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Switch every camera on or off
    #[command(alias = "cam")]
    Cameras(CamerasArgs),

    /// Grant or revoke friend access to all cameras
    Access(AccessArgs),

    /// Inspect the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Cameras ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CamerasArgs {
    #[command(subcommand)]
    pub command: CamerasCommand,
}

#[derive(Debug, Subcommand)]
pub enum CamerasCommand {
    /// Disarm privacy mode and enable the idle LED on every camera
    On,
    /// Arm privacy mode and disable the idle LED on every camera
    Off,
}

// ── Access ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AccessArgs {
    #[command(subcommand)]
    pub command: AccessCommand,
}

#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// Grant every non-excluded friend access to all cameras
    GrantAll,
    /// Revoke every non-excluded friend's camera access
    RevokeAll,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Show the configuration with secrets redacted
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
