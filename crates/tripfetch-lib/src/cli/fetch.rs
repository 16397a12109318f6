use crate::cli::params::FetchParams;
use crate::download::{RemoteSize, download, probe_size, should_download};
use crate::error::TripFetchError;
use crate::meta::{DownloadMetadata, write_metadata};
use reqwest::Client;
use std::path::PathBuf;
use tracing::info;

/// Run the fetch pipeline: probe, decide, download, record provenance.
///
/// Returns the destination path whether the file was transferred or an
/// existing copy was kept.
pub async fn run_fetch(params: FetchParams) -> Result<PathBuf, TripFetchError> {
    info!("Source URL: {}", params.url);

    let client = Client::builder()
        .user_agent(concat!("tripfetch/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let remote_size = probe_size(&client, &params.url).await;
    if let RemoteSize::Known(size) = remote_size {
        info!("Remote size: {} bytes", size);
    }

    let local_size = std::fs::metadata(&params.dest_path).ok().map(|m| m.len());
    if !should_download(local_size, remote_size, params.replace) {
        info!("File already exists and matches remote size, skipping download");
        return Ok(params.dest_path);
    }
    if local_size.is_some() && !params.replace {
        info!("Local file differs from remote, re-downloading");
    }

    if let Some(parent) = params.dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| TripFetchError::DataDirectoryCreation {
            path: parent.to_path_buf(),
            reason: err.to_string(),
        })?;
    }

    let outcome = download(&client, &params.url, &params.dest_path).await?;
    info!(
        "Downloaded {} ({:.2} MB)",
        params.dest_path.display(),
        outcome.bytes_written as f64 / 1e6
    );

    let meta = DownloadMetadata::new(&params.url, outcome.bytes_written, &outcome.etag);
    let meta_path = write_metadata(&params.dest_path, &meta)?;
    info!("Wrote metadata to {}", meta_path.display());

    Ok(params.dest_path)
}
