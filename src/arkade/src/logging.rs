use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a `tracing` filter directive, e.g. `ARKADE_LOG=debug`.
pub const LOG_ENV_VAR: &str = "ARKADE_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

pub fn setup_logging(verbose: bool) -> Result<()> {
    let filter = build_filter(verbose);

    // status lines go to stdout, keep diagnostics on stderr
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::debug!("Logging system initialized");

    Ok(())
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_defaults_to_warn() {
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(build_filter(false).to_string(), "warn");
    }

    #[test]
    #[serial]
    fn test_filter_from_env() {
        std::env::set_var(LOG_ENV_VAR, "info");
        assert_eq!(build_filter(false).to_string(), "info");
        std::env::remove_var(LOG_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_verbose_overrides_env() {
        std::env::set_var(LOG_ENV_VAR, "error");
        assert_eq!(build_filter(true).to_string(), "debug");
        std::env::remove_var(LOG_ENV_VAR);
    }
}
