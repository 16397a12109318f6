mod args;
mod fetch;
mod params;

pub use args::{Args, parse_args};
pub use fetch::run_fetch;
pub use params::{FetchParams, resolve_params};
