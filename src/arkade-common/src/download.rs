use anyhow::{bail, Context, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

const DOWNLOAD_DIR_PREFIX: &str = "arkade-";
const USER_AGENT: &str = concat!("arkade/", env!("CARGO_PKG_VERSION"));

/// Downloads `url` into a fresh temporary directory and returns the path of the file,
/// named after the last segment of the URL. The directory is left in place for the
/// caller.
pub async fn download_file(url: &str, show_progress: bool) -> Result<PathBuf> {
    let file_name = file_name_from_url(url)?;

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to initiate download")?;

    let status = response.status();
    if !status.is_success() {
        bail!("Server returned status {} when downloading {}", status, url);
    }

    let download_dir = tempfile::Builder::new()
        .prefix(DOWNLOAD_DIR_PREFIX)
        .tempdir()
        .context("Failed to create download directory")?
        .keep();
    let dest = download_dir.join(file_name);

    let pb = progress_bar(response.content_length(), show_progress)?;

    let mut file = File::create(&dest)
        .await
        .with_context(|| format!("Failed to create {}", dest.display()))?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed to read download stream")?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        pb.inc(chunk.len() as u64);
    }
    file.flush().await?;

    pb.finish_and_clear();
    debug!(url, dest = %dest.display(), bytes = written, "download complete");

    Ok(dest)
}

fn file_name_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid download URL: {url}"))?;

    match parsed
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
    {
        Some(name) => Ok(name.to_string()),
        None => bail!("Download URL {url} does not name a file"),
    }
}

fn progress_bar(total: Option<u64>, show_progress: bool) -> Result<ProgressBar> {
    if !show_progress {
        return Ok(ProgressBar::hidden());
    }

    let pb = match total {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )?);
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] {bytes} ({bytes_per_sec})",
            )?);
            pb
        }
    };

    Ok(pb)
}
