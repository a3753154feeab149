//! Command dispatch: bridges CLI args -> core workflows -> exit status.

pub mod access;
pub mod cameras;
pub mod config_cmd;

use arlo_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an account-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Cameras(args) => cameras::handle(controller, args, global).await,
        Command::Access(args) => access::handle(controller, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
