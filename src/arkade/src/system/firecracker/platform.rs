use super::InstallError;
use arkade_common::system::ClientArch;

const SUPPORTED_ARCHS: [&str; 2] = ["x86_64", "aarch64"];

/// Firecracker only ships Linux builds for these two machines. Runs before anything
/// touches the network or the filesystem.
pub fn ensure_supported(client: &ClientArch) -> Result<(), InstallError> {
    if !client.is_linux() {
        return Err(InstallError::UnsupportedOs(client.os.clone()));
    }

    if !SUPPORTED_ARCHS.contains(&client.arch.as_str()) {
        return Err(InstallError::UnsupportedArch(client.arch.clone()));
    }

    Ok(())
}
