use super::{
    ensure_supported, resolve_version, Artifact, FirecrackerConfig, InstallError, ReleaseTools,
    FIRECRACKER_OWNER, FIRECRACKER_REPO,
};
use arkade_common::{info_message, warning_message};
use std::fs::{DirBuilder, File};
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const UNPACK_DIR_PREFIX: &str = "firecracker";
// release tarballs wrap the binaries in a `release-<version>-<arch>/` directory
const STRIP_COMPONENTS: usize = 1;

/// What an install produced.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub version: String,
    pub arch: String,
    pub download_url: String,
    pub archive_path: PathBuf,
    /// Left on disk after the install.
    pub unpack_dir: PathBuf,
    pub installed: Vec<PathBuf>,
}

pub struct FirecrackerInstaller<T: ReleaseTools> {
    tools: T,
    config: FirecrackerConfig,
}

impl<T: ReleaseTools> FirecrackerInstaller<T> {
    pub fn new(tools: T, config: FirecrackerConfig) -> Self {
        Self { tools, config }
    }

    /// Runs the install from platform check to the final copy:
    /// - Rejects anything other than Linux on x86_64 or aarch64
    /// - Resolves the release tag and downloads its tarball
    /// - Unpacks it into a fresh temporary directory
    /// - Copies `firecracker` and `jailer` into the install path
    ///
    /// Stops at the first failure.
    pub async fn run(&self) -> Result<InstallReport, InstallError> {
        let client = self.tools.client_arch();
        ensure_supported(&client)?;

        let install_path = &self.config.install_path;
        info_message!("Installing Firecracker to {}", install_path.display());

        if let Some(err) = ensure_install_dir(install_path) {
            // non-fatal
            warn!(path = %install_path.display(), error = %err, "failed to create install directory");
            warning_message!(
                "Error creating directory {}, error: {}",
                install_path.display(),
                err
            );
        }

        let version = resolve_version(&self.tools, &self.config.version).await?;
        info_message!("Installing version: {} for: {}", version, client.arch);

        let artifact = Artifact::new(FIRECRACKER_OWNER, FIRECRACKER_REPO, &version, &client.arch);

        info_message!("Downloading from: {}", artifact.download_url);
        let archive_path = self
            .tools
            .download_file(&artifact.download_url, self.config.show_progress)
            .await
            .map_err(InstallError::Download)?;
        info_message!("Downloaded to: {}", archive_path.display());

        let unpack_dir = self.unpack(&archive_path)?;

        info_message!("Copying Firecracker binaries to: {}", install_path.display());
        let installed = self.copy_binaries(&artifact, &unpack_dir)?;

        Ok(InstallReport {
            version,
            arch: client.arch,
            download_url: artifact.download_url,
            archive_path,
            unpack_dir,
            installed,
        })
    }

    fn unpack(&self, archive_path: &Path) -> Result<PathBuf, InstallError> {
        let archive = File::open(archive_path).map_err(|source| InstallError::FileAccess {
            path: archive_path.to_path_buf(),
            source,
        })?;

        let unpack_dir = tempfile::Builder::new()
            .prefix(UNPACK_DIR_PREFIX)
            .tempdir()
            .map_err(InstallError::TempDir)?
            .keep();

        info_message!("Unpacking Firecracker to: {}", unpack_dir.display());
        self.tools
            .untar(archive, &unpack_dir, STRIP_COMPONENTS)
            .map_err(InstallError::Extraction)?;

        Ok(unpack_dir)
    }

    fn copy_binaries(
        &self,
        artifact: &Artifact,
        unpack_dir: &Path,
    ) -> Result<Vec<PathBuf>, InstallError> {
        let mut installed = Vec::new();

        for (src, dst) in artifact.binaries(unpack_dir, &self.config.install_path) {
            let bytes = self
                .tools
                .copy_file(&src, &dst)
                .map_err(InstallError::Copy)?;
            debug!(src = %src.display(), dst = %dst.display(), bytes, "copied binary");
            installed.push(dst);
        }

        Ok(installed)
    }
}

/// Creates the install directory and its parents. Returns the error only when the
/// directory could not be created and does not already exist.
pub(crate) fn ensure_install_dir(path: &Path) -> Option<io::Error> {
    match DirBuilder::new().recursive(true).mode(0o755).create(path) {
        Ok(()) => None,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => None,
        Err(err) => Some(err),
    }
}
