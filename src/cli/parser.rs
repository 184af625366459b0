use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for garmin2labradar
/// CLI application to convert Garmin Xero CSV exports to LabRadar CSV files
#[derive(Parser, Debug)]
#[command(
    name = "garmin2labradar",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert Garmin CSV to LabRadar CSV format.",
    long_about = None
)]
pub struct Cli {
    /// Path to the Garmin CSV file.
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Device ID written in the LabRadar header
    #[arg(long = "device-id", value_name = "ID")]
    pub device_id: Option<String>,

    /// Series number written in the LabRadar header
    #[arg(long = "series-no", value_name = "NO")]
    pub series_no: Option<String>,

    /// Fail on rows with missing values instead of skipping them
    #[arg(long = "strict")]
    pub strict: bool,

    /// Write the output directly into the output directory (no YY.MM.DD folder)
    #[arg(long = "no-dated-dir")]
    pub no_dated_dir: bool,

    /// Base output directory (default: current directory)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Source delimiter (default: inferred from the header line)
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Pin the conversion date (YYYY-MM-DD)
    #[arg(long = "today", value_name = "DATE", hide = true)]
    pub today: Option<String>,
}
