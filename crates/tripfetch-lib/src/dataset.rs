use crate::error::TripFetchError;
use std::fmt;
use std::str::FromStr;

/// Directory that receives downloaded data files and the log file.
pub const DATA_DIR: &str = "data/raw";

pub const DATASET_PREFIX: &str = "yellow_tripdata";

const PARQUET_BASE_URL: &str = "https://d37ci6vzurychx.cloudfront.net/trip-data";
const CSV_BASE_URL: &str = "https://nyc-tlc.s3.amazonaws.com/trip+data";

/// A calendar month, always denoting the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, TripFetchError> {
        if !(1..=12).contains(&month) {
            return Err(TripFetchError::InvalidMonth {
                value: format!("{year}-{month}"),
            });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for Month {
    type Err = TripFetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || TripFetchError::InvalidMonth {
            value: value.to_string(),
        };

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Supported download formats for the trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filetype {
    Parquet,
    Csv,
    CsvGz,
}

impl Filetype {
    /// File extension, which doubles as the CLI spelling.
    pub fn extension(self) -> &'static str {
        match self {
            Filetype::Parquet => "parquet",
            Filetype::Csv => "csv",
            Filetype::CsvGz => "csv.gz",
        }
    }

    fn base_url(self) -> &'static str {
        match self {
            Filetype::Parquet => PARQUET_BASE_URL,
            Filetype::Csv | Filetype::CsvGz => CSV_BASE_URL,
        }
    }
}

impl FromStr for Filetype {
    type Err = TripFetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "parquet" => Ok(Filetype::Parquet),
            "csv" => Ok(Filetype::Csv),
            "csv.gz" => Ok(Filetype::CsvGz),
            other => Err(TripFetchError::UnsupportedFiletype {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Filetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Full download URL for the given month and filetype.
pub fn build_url(month: Month, filetype: Filetype) -> String {
    format!(
        "{}/{}_{}.{}",
        filetype.base_url(),
        DATASET_PREFIX,
        month,
        filetype.extension()
    )
}

/// File name of the local copy for the given month and filetype.
pub fn data_filename(month: Month, filetype: Filetype) -> String {
    format!("{}_{}.{}", DATASET_PREFIX, month, filetype.extension())
}
