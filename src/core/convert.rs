//! Garmin → LabRadar conversion pipeline.

use crate::config::{DEFAULT_DEVICE_ID, DEFAULT_SERIES_NO};
use crate::core::labradar::LabradarDocument;
use crate::core::source::load_series;
use crate::errors::{AppError, AppResult};
use crate::models::SummaryStats;
use crate::utils::clock::Clock;
use crate::utils::date::folder_name;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_labradar.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub device_id: String,
    pub series_no: String,
    /// Fail on incomplete rows instead of dropping them.
    pub strict: bool,
    /// Put the output into a `YY.MM.DD` folder under `base_dir`.
    pub dated_subdir: bool,
    /// Source delimiter; inferred from the header line when `None`.
    pub delimiter: Option<u8>,
    /// Base output directory; current working directory when `None`.
    pub base_dir: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID.to_string(),
            series_no: DEFAULT_SERIES_NO.to_string(),
            strict: false,
            dated_subdir: true,
            delimiter: None,
            base_dir: None,
        }
    }
}

pub struct Converter<C: Clock> {
    options: ConvertOptions,
    clock: C,
}

impl<C: Clock> Converter<C> {
    pub fn new(options: ConvertOptions, clock: C) -> Self {
        Self { options, clock }
    }

    /// Where `convert` will write the LabRadar file for `input` today.
    pub fn output_path(&self, input: &Path) -> AppResult<PathBuf> {
        output_path(input, &self.options, self.clock.today())
    }

    /// Convert `input` and return the path of the written file.
    ///
    /// Steps: load → validate → cleanup → stats → render → write.
    pub fn convert(&self, input: &Path) -> AppResult<PathBuf> {
        let today = self.clock.today();

        let series = load_series(input, &self.options)?;
        let stats = SummaryStats::from_series(&series);

        let path = output_path(input, &self.options, today)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        LabradarDocument::build(&series, &stats, today, &self.options).save(&path)?;
        Ok(path)
    }
}

/// `<base>/[YY.MM.DD/]<input stem>_labradar.csv`
pub fn output_path(input: &Path, options: &ConvertOptions, today: NaiveDate) -> AppResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        AppError::from(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Input path has no file name: {}", input.display()),
        ))
    })?;

    let mut dir = match &options.base_dir {
        Some(base) => base.clone(),
        None => env::current_dir()?,
    };
    if options.dated_subdir {
        dir.push(folder_name(today));
    }

    Ok(dir.join(format!("{}{}", stem.to_string_lossy(), OUTPUT_SUFFIX)))
}
