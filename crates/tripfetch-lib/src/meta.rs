use crate::error::TripFetchError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const META_SUFFIX: &str = ".meta.json";

/// Provenance record written next to a downloaded data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadMetadata {
    /// Source URL of the transfer
    pub url: String,
    /// Bytes written to disk
    pub size: u64,
    /// Server entity tag, quotes stripped; empty if the server sent none
    pub etag: String,
    /// Completion time, UTC, RFC 3339 with a trailing Z
    pub downloaded_at: String,
}

impl DownloadMetadata {
    pub fn new(url: &str, size: u64, etag: &str) -> Self {
        Self {
            url: url.to_string(),
            size,
            etag: etag.to_string(),
            downloaded_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Sidecar path for a data file: the full file name plus `.meta.json`.
pub fn metadata_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(META_SUFFIX);
    PathBuf::from(name)
}

/// Serialize the record and write it next to the data file, replacing any
/// previous sidecar. A failed write is fatal to the caller.
pub fn write_metadata(
    dest: &Path,
    meta: &DownloadMetadata,
) -> Result<PathBuf, TripFetchError> {
    let path = metadata_path(dest);
    let json = serde_json::to_string_pretty(meta)?;
    std::fs::write(&path, json).map_err(|err| TripFetchError::MetadataWrite {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    Ok(path)
}
