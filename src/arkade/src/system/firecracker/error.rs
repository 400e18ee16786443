use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is terminal. Errors raised by the helpers are passed through with
/// their own message.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("this app only supports Linux, detected: {0}")]
    UnsupportedOs(String),

    #[error("this app only supports x86_64 and aarch64 and not {0}")]
    UnsupportedArch(String),

    #[error(transparent)]
    VersionLookup(anyhow::Error),

    #[error(transparent)]
    Download(anyhow::Error),

    #[error("failed to open downloaded archive {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create temporary directory")]
    TempDir(#[source] io::Error),

    #[error(transparent)]
    Extraction(anyhow::Error),

    #[error(transparent)]
    Copy(anyhow::Error),
}

impl InstallError {
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Self::UnsupportedOs(_) | Self::UnsupportedArch(_))
    }
}
