use anyhow::{bail, Context, Result};
use octocrab::Octocrab;
use std::sync::Arc;
use tracing::debug;

/// When set, requests to the GitHub API are authenticated, which lifts the anonymous
/// rate limit.
pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Returns the tag of the newest published release of `owner/repo`.
pub async fn find_github_release(owner: &str, repo: &str) -> Result<String> {
    let octocrab = github_client()?;

    let release = octocrab
        .repos(owner, repo)
        .releases()
        .get_latest()
        .await
        .with_context(|| format!("Failed to find latest release for {owner}/{repo}"))?;

    let tag = release_tag(&release.tag_name)
        .with_context(|| format!("Latest release of {owner}/{repo} has no tag"))?;
    debug!(owner, repo, tag = %tag, "found latest release");

    Ok(tag)
}

fn github_client() -> Result<Arc<Octocrab>> {
    match github_token() {
        Some(token) => {
            let client = Octocrab::builder()
                .personal_token(token)
                .build()
                .context("Failed to build GitHub client")?;
            Ok(Arc::new(client))
        }
        None => Ok(octocrab::instance()),
    }
}

fn github_token() -> Option<String> {
    std::env::var(GITHUB_TOKEN_ENV_VAR)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn release_tag(tag_name: &str) -> Result<String> {
    let tag = tag_name.trim();
    if tag.is_empty() {
        bail!("release tag is empty");
    }
    Ok(tag.to_string())
}
