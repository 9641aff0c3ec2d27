use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::DemoError;
use crate::value::Value;

pub const DEFAULT_MISSING_FILE: &str = "non_existent_file.txt";
pub const DEFAULT_NON_NUMERIC_TEXT: &str = "Not a number";
pub const DEFAULT_INDEX: usize = 5;
pub const DEFAULT_MISSING_KEY: &str = "address";

/// Fixed inputs for the demo operations.
///
/// Every field has a default matching the stock demonstration, so an empty
/// document (or `FaultConfig::default()`) reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaultConfig {
    pub missing_file: PathBuf,
    pub non_numeric_text: String,
    pub sequence: Vec<i64>,
    pub index: usize,
    pub missing_key: String,
    pub concat_left: Value,
    pub concat_right: Value,
    pub log: LogConfig,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            missing_file: PathBuf::from(DEFAULT_MISSING_FILE),
            non_numeric_text: DEFAULT_NON_NUMERIC_TEXT.to_string(),
            sequence: vec![1, 2, 3],
            index: DEFAULT_INDEX,
            missing_key: DEFAULT_MISSING_KEY.to_string(),
            concat_left: Value::from("hello"),
            concat_right: Value::from(5_i64),
            log: LogConfig::default(),
        }
    }
}

impl FaultConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: true,
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to `Info`. The filter never drops
    /// `Warn`, the level every caught fault is logged at.
    pub fn level_filter(&self) -> LevelFilter {
        let requested = match self.level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        };
        requested.max(LevelFilter::Warn)
    }
}
