//! Camera state command handlers.

use arlo_core::Controller;

use crate::cli::{CamerasArgs, CamerasCommand, GlobalOpts};
use crate::error::CliError;

pub async fn handle(
    controller: &Controller,
    args: CamerasArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CamerasCommand::On => {
            controller.switch_cameras(true).await?;
            if !global.quiet {
                eprintln!("Cameras switched on");
            }
            Ok(())
        }

        CamerasCommand::Off => {
            controller.switch_cameras(false).await?;
            if !global.quiet {
                eprintln!("Cameras switched off");
            }
            Ok(())
        }
    }
}
