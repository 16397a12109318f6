use super::probe::RemoteSize;

/// Decide whether the remote object should be transferred.
///
/// An existing local file with an unknown remote size counts as a match:
/// absence of size information is not treated as a mismatch.
pub fn should_download(local_size: Option<u64>, remote_size: RemoteSize, replace: bool) -> bool {
    if replace {
        return true;
    }

    let Some(local) = local_size else {
        return true;
    };

    match remote_size {
        RemoteSize::Unknown => false,
        RemoteSize::Known(remote) => local != remote,
    }
}
