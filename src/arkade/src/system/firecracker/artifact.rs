use std::path::{Path, PathBuf};

const GITHUB_DOWNLOAD_BASE: &str = "https://github.com";

/// Binaries shipped in the release tarball, installed under these names.
const BINARIES: [&str; 2] = ["firecracker", "jailer"];

/// Where a release tarball lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub version: String,
    pub arch: String,
    pub filename: String,
    pub download_url: String,
}

impl Artifact {
    pub fn new(owner: &str, repo: &str, version: &str, arch: &str) -> Self {
        let filename = format!("{repo}-{version}-{arch}.tgz");
        let download_url =
            format!("{GITHUB_DOWNLOAD_BASE}/{owner}/{repo}/releases/download/{version}/{filename}");

        Self {
            version: version.to_string(),
            arch: arch.to_string(),
            filename,
            download_url,
        }
    }

    /// Source → destination pairs for the unpacked binaries, Firecracker first.
    pub fn binaries(&self, unpack_dir: &Path, install_path: &Path) -> [(PathBuf, PathBuf); 2] {
        BINARIES.map(|name| {
            (
                unpack_dir.join(format!("{name}-{}-{}", self.version, self.arch)),
                install_path.join(name),
            )
        })
    }
}
