mod commands;
mod process_command;

pub use commands::{Cli, Command, FirecrackerArgs, InstallCommand, SystemCommand};
pub use process_command::process_command;
