pub mod cli;
pub mod dataset;
pub mod download;
pub mod error;
pub mod logging;
pub mod meta;

pub use error::TripFetchError;
