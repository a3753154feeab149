//! Friend access command handlers.

use arlo_core::Controller;

use crate::cli::{AccessArgs, AccessCommand, GlobalOpts};
use crate::error::CliError;

pub async fn handle(
    controller: &Controller,
    args: AccessArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AccessCommand::GrantAll => {
            controller.grant_all_access().await?;
            if !global.quiet {
                eprintln!("Access granted to all friends");
            }
            Ok(())
        }

        AccessCommand::RevokeAll => {
            controller.revoke_all_access().await?;
            if !global.quiet {
                eprintln!("Access revoked from all friends");
            }
            Ok(())
        }
    }
}
