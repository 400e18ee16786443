use super::commands::{Cli, Command, InstallCommand, SystemCommand};
use crate::logging::setup_logging;
use crate::system::firecracker::{self, FirecrackerConfig};
use anyhow::{Context, Result};
use clap::Parser;

/// Process the command line and run the selected command to completion.
pub fn process_command() -> Result<()> {
    // NOTE: this exits the process if there is a parsing error
    let cli = Cli::parse();

    setup_logging(cli.verbose)?;

    match cli.command {
        Command::System {
            command: SystemCommand::Install { app },
        } => match app {
            InstallCommand::Firecracker(args) => {
                let config = FirecrackerConfig::load(&args)?;
                let runtime =
                    tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
                runtime.block_on(firecracker::install(config))?;
            }
        },
    }

    Ok(())
}
