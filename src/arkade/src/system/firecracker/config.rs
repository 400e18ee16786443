use super::{DEFAULT_INSTALL_PATH, LATEST_VERSION};
use crate::cli::FirecrackerArgs;
use anyhow::{Context, Result};
use config::{Config as RConfig, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Prefix of the environment variables that override the built-in defaults, e.g.
/// `ARKADE_FIRECRACKER_PATH=/opt/bin`.
pub const ENV_PREFIX: &str = "ARKADE_FIRECRACKER";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FirecrackerConfig {
    pub version: String,
    #[serde(rename = "path")]
    pub install_path: PathBuf,
    #[serde(rename = "progress")]
    pub show_progress: bool,
}

impl Default for FirecrackerConfig {
    fn default() -> Self {
        Self {
            version: LATEST_VERSION.to_string(),
            install_path: PathBuf::from(DEFAULT_INSTALL_PATH),
            show_progress: true,
        }
    }
}

impl FirecrackerConfig {
    /// Explicit flags win over `ARKADE_FIRECRACKER_*` variables, which win over defaults.
    pub fn load(args: &FirecrackerArgs) -> Result<Self> {
        let config = RConfig::builder()
            .set_default("version", LATEST_VERSION)?
            .set_default("path", DEFAULT_INSTALL_PATH)?
            .set_default("progress", true)?
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
            .set_override_option("version", args.version.clone())?
            .set_override_option("path", args.path.clone())?
            .set_override_option("progress", args.progress)?
            .build()
            .context("Failed to load firecracker configuration")?;

        config
            .try_deserialize()
            .context("Invalid firecracker configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 3] = [
        "ARKADE_FIRECRACKER_VERSION",
        "ARKADE_FIRECRACKER_PATH",
        "ARKADE_FIRECRACKER_PROGRESS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = FirecrackerConfig::load(&FirecrackerArgs::default()).unwrap();

        assert_eq!(config, FirecrackerConfig::default());
        assert_eq!(config.version, "latest");
        assert_eq!(config.install_path, PathBuf::from("/usr/local/bin"));
        assert!(config.show_progress);
    }

    #[test]
    #[serial]
    fn test_flags_override_defaults() {
        clear_env();
        let args = FirecrackerArgs {
            version: Some("1.0.0".to_string()),
            path: Some("/opt/firecracker/bin".to_string()),
            progress: Some(false),
        };

        let config = FirecrackerConfig::load(&args).unwrap();

        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.install_path, PathBuf::from("/opt/firecracker/bin"));
        assert!(!config.show_progress);
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        clear_env();
        std::env::set_var("ARKADE_FIRECRACKER_PATH", "/srv/bin");
        std::env::set_var("ARKADE_FIRECRACKER_PROGRESS", "false");

        let config = FirecrackerConfig::load(&FirecrackerArgs::default()).unwrap();
        clear_env();

        assert_eq!(config.version, "latest");
        assert_eq!(config.install_path, PathBuf::from("/srv/bin"));
        assert!(!config.show_progress);
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        clear_env();
        std::env::set_var("ARKADE_FIRECRACKER_VERSION", "v1.4.0");

        let args = FirecrackerArgs {
            version: Some("v1.7.0".to_string()),
            ..Default::default()
        };
        let config = FirecrackerConfig::load(&args).unwrap();
        clear_env();

        assert_eq!(config.version, "v1.7.0");
    }
}
