use crate::core::convert::ConvertOptions;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEVICE_ID: &str = "LBR-0018237";
pub const DEFAULT_SERIES_NO: &str = "0001";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Identifies the originating instrument in the LabRadar header.
    #[serde(default = "default_device_id")]
    pub device_id: String,
    /// Groups shots into a session in the LabRadar header.
    #[serde(default = "default_series_no")]
    pub series_no: String,
    /// Fail on incomplete rows instead of skipping them.
    #[serde(default)]
    pub strict: bool,
    /// Write output into a `YY.MM.DD` folder.
    #[serde(default = "default_dated_subdir")]
    pub dated_subdir: bool,
    /// Base output directory (current directory when absent).
    #[serde(default)]
    pub output_dir: Option<String>,
    /// Source delimiter (inferred from the header when absent).
    #[serde(default)]
    pub delimiter: Option<char>,
}

fn default_device_id() -> String {
    DEFAULT_DEVICE_ID.to_string()
}
fn default_series_no() -> String {
    DEFAULT_SERIES_NO.to_string()
}
fn default_dated_subdir() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_id: default_device_id(),
            series_no: default_series_no(),
            strict: false,
            dated_subdir: default_dated_subdir(),
            output_dir: None,
            delimiter: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("garmin2labradar")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".garmin2labradar")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("garmin2labradar.conf")
    }

    /// Load the standard configuration file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit configuration file; unlike `load`, the file must exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        // file vuoto → tutti i default
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Converter options described by this configuration.
    pub fn convert_options(&self) -> AppResult<ConvertOptions> {
        let delimiter = match self.delimiter {
            None => None,
            Some(c) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Some(c as u8),
            Some(c) => {
                return Err(AppError::Config(format!(
                    "unsupported delimiter '{}': use a single ASCII character",
                    c.escape_default()
                )));
            }
        };

        Ok(ConvertOptions {
            device_id: self.device_id.clone(),
            series_no: self.series_no.clone(),
            strict: self.strict,
            dated_subdir: self.dated_subdir,
            delimiter,
            base_dir: self.output_dir.as_deref().map(expand_tilde),
        })
    }
}
