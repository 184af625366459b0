use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::convert::Converter;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::clock::{Clock, FixedClock, SystemClock};
use crate::utils::date::parse_date;

/// Handle the conversion of `cli.input`.
///
/// The configuration has already been merged with the command line
/// overrides (see `crate::run`).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let clock: Box<dyn Clock> = match &cli.today {
        Some(d) => {
            let date = parse_date(d)
                .ok_or_else(|| AppError::Config(format!("invalid date for --today: {d}")))?;
            Box::new(FixedClock(date))
        }
        None => Box::new(SystemClock),
    };

    let converter = Converter::new(cfg.convert_options()?, clock);

    let target = converter.output_path(&cli.input)?;
    if target.exists() {
        warning(format!("Overwriting existing file '{}'", target.display()));
    }

    let written = converter.convert(&cli.input)?;
    info(written.display());

    let name = written
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    success(format!(
        "Converted Garmin CSV to LabRadar format and saved as {name}"
    ));

    Ok(())
}
