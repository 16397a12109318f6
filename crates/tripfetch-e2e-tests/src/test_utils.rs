use eyre::Result;
use std::path::Path;
use tempfile::TempDir;
use tripfetch_lib::cli::FetchParams;
use tripfetch_lib::meta::DownloadMetadata;

pub const TEST_FILE: &str = "yellow_tripdata_2024-03.parquet";

/// Temporary stand-in for the data directory.
pub fn setup_data_dir() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Build fetch params pointing at `server_url` with a tempdir destination.
pub fn fetch_params(server_url: &str, data_dir: &Path, replace: bool) -> FetchParams {
    FetchParams {
        url: format!("{server_url}/{TEST_FILE}"),
        dest_path: data_dir.join(TEST_FILE),
        replace,
    }
}

/// Load and parse the metadata sidecar written next to `dest`.
pub fn read_sidecar(dest: &Path) -> Result<DownloadMetadata> {
    let path = tripfetch_lib::meta::metadata_path(dest);
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
