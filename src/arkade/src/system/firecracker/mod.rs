mod artifact;
mod config;
mod error;
mod installer;
mod platform;
mod tools;
mod version;

pub use artifact::Artifact;
pub use config::FirecrackerConfig;
pub use error::InstallError;
pub use installer::{FirecrackerInstaller, InstallReport};
pub use platform::ensure_supported;
pub use tools::{HostTools, ReleaseTools};
pub use version::resolve_version;

use arkade_common::success_message;

pub const FIRECRACKER_OWNER: &str = "firecracker-microvm";
pub const FIRECRACKER_REPO: &str = "firecracker";

/// Requesting this version looks up the newest published release.
pub const LATEST_VERSION: &str = "latest";
pub const DEFAULT_INSTALL_PATH: &str = "/usr/local/bin";

/// Installs Firecracker and the Jailer on this host.
pub async fn install(config: FirecrackerConfig) -> Result<InstallReport, InstallError> {
    let report = FirecrackerInstaller::new(HostTools, config).run().await?;

    for path in &report.installed {
        success_message!("Installed {}", path.display());
    }

    Ok(report)
}
