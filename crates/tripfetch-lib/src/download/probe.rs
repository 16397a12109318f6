use reqwest::Client;
use reqwest::header;
use std::time::Duration;
use tracing::debug;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of the advisory HEAD probe. Any failure collapses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteSize {
    Known(u64),
    Unknown,
}

impl RemoteSize {
    pub fn known(self) -> Option<u64> {
        match self {
            RemoteSize::Known(size) => Some(size),
            RemoteSize::Unknown => None,
        }
    }
}

/// Fetch the remote object's size via a HEAD request.
///
/// The probe is advisory: timeouts, connection errors, non-success statuses
/// and a missing or unparseable Content-Length header all yield `Unknown`.
/// The download itself propagates real errors for the same URL.
pub async fn probe_size(client: &Client, url: &str) -> RemoteSize {
    let response = match client.head(url).timeout(PROBE_TIMEOUT).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("Size probe request for {} failed: {}", url, err);
            return RemoteSize::Unknown;
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(err) => {
            debug!("Size probe for {} returned an error status: {}", url, err);
            return RemoteSize::Unknown;
        }
    };

    // HEAD responses carry no body, so read the header directly.
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<u64>().ok())
        .map_or(RemoteSize::Unknown, RemoteSize::Known)
}
