use crate::error::TripFetchError;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use reqwest::header;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};

const TMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Bytes actually written to disk, counted per chunk.
    pub bytes_written: u64,
    /// Entity tag reported by the server, quotes stripped; empty if absent.
    pub etag: String,
}

fn tmp_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(TMP_SUFFIX);
    PathBuf::from(name)
}

/// Stream the remote object into `dest`, promoting it atomically on success.
///
/// The body is written to a temporary sibling path first; only a fully
/// transferred file is renamed onto `dest`. Any failure after the temporary
/// file was created removes it best-effort before the error propagates.
pub async fn download(
    client: &Client,
    url: &str,
    dest: &Path,
) -> Result<DownloadOutcome, TripFetchError> {
    let response = client.get(url).send().await?.error_for_status()?;

    let total = response.content_length();
    let etag = response
        .headers()
        .get(header::ETAG)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_matches('"').to_string())
        .unwrap_or_default();

    let tmp = tmp_path(dest);
    let bytes_written = match stream_to_disk(response, &tmp, dest, total).await {
        Ok(written) => written,
        Err(err) => {
            // Transfers are not resumable; drop the partial file.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err);
        }
    };

    Ok(DownloadOutcome { bytes_written, etag })
}

async fn stream_to_disk(
    response: reqwest::Response,
    tmp: &Path,
    dest: &Path,
    total: Option<u64>,
) -> Result<u64, TripFetchError> {
    let bar = transfer_bar(dest, total)?;

    let file = tokio::fs::File::create(tmp).await?;
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
        bar.set_position(written);
    }

    writer.flush().await?;
    drop(writer);

    tokio::fs::rename(tmp, dest).await?;
    bar.finish_and_clear();

    Ok(written)
}

fn transfer_bar(dest: &Path, total: Option<u64>) -> Result<ProgressBar, TripFetchError> {
    let bar = match total {
        Some(len) => {
            let bar = ProgressBar::new(len);
            bar.set_style(
                ProgressStyle::with_template(
                    "{msg} {bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec})",
                )
                .map_err(eyre::Report::new)?
                .progress_chars("##-"),
            );
            bar
        }
        None => ProgressBar::new_spinner(),
    };

    if let Some(name) = dest.file_name() {
        bar.set_message(name.to_string_lossy().into_owned());
    }

    Ok(bar)
}
