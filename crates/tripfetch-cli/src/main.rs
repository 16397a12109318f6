use std::path::Path;
use tripfetch_lib::cli::{parse_args, resolve_params, run_fetch};
use tripfetch_lib::dataset::DATA_DIR;
use tripfetch_lib::error::TripFetchError;
use tripfetch_lib::logging::{LOG_FILE, init_logging};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), TripFetchError> {
    color_eyre::install()?;

    let args = parse_args();

    // The data directory also hosts the log file, so it must exist before
    // logging is wired up.
    std::fs::create_dir_all(DATA_DIR).map_err(|err| TripFetchError::DataDirectoryCreation {
        path: DATA_DIR.into(),
        reason: err.to_string(),
    })?;
    init_logging(&Path::new(DATA_DIR).join(LOG_FILE), args.log_level)?;

    let params = resolve_params(args.month, args.filetype, args.replace);
    let url = params.url.clone();

    match run_fetch(params).await {
        Ok(dest_path) => {
            println!("{}", dest_path.display());
            Ok(())
        }
        Err(err @ TripFetchError::Http(_)) => {
            tracing::error!("HTTP error while downloading {}: {}", url, err);
            std::process::exit(1);
        }
        Err(err) => {
            tracing::error!("Unexpected error: {}", err);
            std::process::exit(1);
        }
    }
}
