use crate::dataset::{Filetype, Month};
use clap::{ArgAction, Parser};
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Args {
    pub month: Month,
    pub filetype: Filetype,
    pub replace: bool,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "tripfetch",
    version,
    about = "Download a single month of NYC TLC yellow taxi trip data"
)]
struct Cli {
    #[arg(
        long = "month",
        value_name = "YYYY-MM",
        help = "Month to download, e.g. 2024-03",
        value_parser = Month::from_str
    )]
    month: Month,

    #[arg(
        long = "filetype",
        value_name = "KIND",
        help = "Filetype to download: parquet, csv or csv.gz",
        default_value = "parquet",
        value_parser = Filetype::from_str
    )]
    filetype: Filetype,

    #[arg(
        long = "replace",
        help = "Re-download even if a matching file already exists",
        action = ArgAction::SetTrue
    )]
    replace: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    Args {
        month: cli.month,
        filetype: cli.filetype,
        replace: cli.replace,
        log_level,
    }
}
