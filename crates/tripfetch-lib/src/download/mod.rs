mod decision;
mod download;
mod probe;

pub use decision::should_download;
pub use download::{DownloadOutcome, download};
pub use probe::{RemoteSize, probe_size};
