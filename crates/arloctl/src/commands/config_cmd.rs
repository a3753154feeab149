//! Config inspection command handlers.

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::error::CliError;

pub fn handle(args: &ConfigArgs) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", arlo_config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let config = arlo_config::load_config_or_default();
            let rendered = arlo_config::to_redacted_toml(&config).map_err(CliError::from)?;
            print!("{rendered}");
            Ok(())
        }
    }
}
