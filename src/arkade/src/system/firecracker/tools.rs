use anyhow::Result;
use arkade_common::system::ClientArch;
use arkade_common::{archive, download, fs, github};
use async_trait::async_trait;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The host facilities an install needs: platform detection, release lookup, download,
/// extraction and copying.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseTools: Send + Sync {
    fn client_arch(&self) -> ClientArch;

    async fn find_latest_release(&self, owner: &str, repo: &str) -> Result<String>;

    async fn download_file(&self, url: &str, show_progress: bool) -> Result<PathBuf>;

    /// Consumes the archive handle; it is closed when extraction returns.
    fn untar(&self, archive: File, dest: &Path, strip_components: usize) -> Result<()>;

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64>;
}

/// [`ReleaseTools`] backed by the real machine, network and filesystem.
pub struct HostTools;

#[async_trait]
impl ReleaseTools for HostTools {
    fn client_arch(&self) -> ClientArch {
        ClientArch::detect()
    }

    async fn find_latest_release(&self, owner: &str, repo: &str) -> Result<String> {
        github::find_github_release(owner, repo).await
    }

    async fn download_file(&self, url: &str, show_progress: bool) -> Result<PathBuf> {
        download::download_file(url, show_progress).await
    }

    fn untar(&self, archive: File, dest: &Path, strip_components: usize) -> Result<()> {
        archive::untar(archive, dest, strip_components)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64> {
        fs::copy_file(src, dst)
    }
}
