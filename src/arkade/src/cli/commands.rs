use clap::{Args, Parser, Subcommand};

const FIRECRACKER_EXAMPLES: &str = "Examples:
  arkade system install firecracker
  arkade system install firecracker --version v1.0.0";

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "arkade",
    about = "Install developer tools and system apps",
    version
)]
pub struct Cli {
    /// Print debug logs to stderr
    #[clap(long, short = 'd', global = true)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// System apps
    System {
        #[clap(subcommand)]
        command: SystemCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SystemCommand {
    /// Install system apps
    Install {
        #[clap(subcommand)]
        app: InstallCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum InstallCommand {
    #[clap(
        about = "Install Firecracker",
        long_about = "Install Firecracker and its Jailer.",
        after_help = FIRECRACKER_EXAMPLES
    )]
    Firecracker(FirecrackerArgs),
}

/// Flags left unset fall back to `ARKADE_FIRECRACKER_*` environment variables and then
/// to the built-in defaults.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FirecrackerArgs {
    /// The version for Firecracker to install [default: latest]
    #[clap(long, short = 'v')]
    pub version: Option<String>,

    /// Installation path [default: /usr/local/bin]
    #[clap(long, short = 'p')]
    pub path: Option<String>,

    /// Show download progress [default: true]
    #[clap(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub progress: Option<bool>,
}
