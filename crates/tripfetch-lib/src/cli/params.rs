use crate::dataset::{self, Filetype, Month};
use std::path::PathBuf;

/// Resolved inputs for a single fetch run.
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub url: String,
    pub dest_path: PathBuf,
    pub replace: bool,
}

pub fn resolve_params(month: Month, filetype: Filetype, replace: bool) -> FetchParams {
    let url = dataset::build_url(month, filetype);
    let dest_path = PathBuf::from(dataset::DATA_DIR).join(dataset::data_filename(month, filetype));

    FetchParams {
        url,
        dest_path,
        replace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_resolve_params_builds_url_and_destination() {
        let month = Month::new(2024, 3).unwrap();
        let params = resolve_params(month, Filetype::Parquet, false);

        assert_eq!(
            params.url,
            "https://d37ci6vzurychx.cloudfront.net/trip-data/yellow_tripdata_2024-03.parquet"
        );
        assert_eq!(
            params.dest_path,
            Path::new("data/raw/yellow_tripdata_2024-03.parquet")
        );
        assert!(!params.replace);
    }
}
