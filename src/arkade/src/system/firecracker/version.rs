use super::{InstallError, ReleaseTools, FIRECRACKER_OWNER, FIRECRACKER_REPO, LATEST_VERSION};
use tracing::debug;

/// Turns the requested version into a release tag. `latest` asks GitHub and trusts the
/// answer as-is; anything else gets a leading `v` if it lacks one.
pub async fn resolve_version<T>(tools: &T, requested: &str) -> Result<String, InstallError>
where
    T: ReleaseTools + ?Sized,
{
    if requested == LATEST_VERSION {
        let tag = tools
            .find_latest_release(FIRECRACKER_OWNER, FIRECRACKER_REPO)
            .await
            .map_err(InstallError::VersionLookup)?;
        debug!(tag = %tag, "resolved latest release");
        return Ok(tag);
    }

    Ok(normalize_version(requested))
}

fn normalize_version(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    }
}
