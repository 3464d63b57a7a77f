//! Batch configuration.
//!
//! A batch run is driven by exactly four values: the input folder, the output
//! folder, and the target width and height. They come from three layers, each
//! overriding the one before:
//!
//! ```text
//! stock defaults            input / output / 2200 x 2200
//!   ← fillcrop.toml         --config FILE, else ./fillcrop.toml if present
//!     ← CLI flags           --input --output --width --height
//! ```
//!
//! ## Config File
//!
//! ```toml
//! # All keys are optional - defaults shown below
//! input_folder = "input"
//! output_folder = "output"
//! target_width = 2200
//! target_height = 2200
//! ```
//!
//! Unknown keys are rejected to catch typos early. A zero target dimension is
//! rejected before any file is touched, since every file's geometry depends
//! on it.

use crate::imaging::Dimensions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "fillcrop.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid dimension: {field} must be a positive integer, got {value}")]
    InvalidDimension { field: &'static str, value: u32 },
}

/// The four parameters of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Folder whose direct entries are processed.
    pub input_folder: PathBuf,
    /// Destination folder; created with missing parents if absent.
    pub output_folder: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("input"),
            output_folder: PathBuf::from("output"),
            target_width: 2200,
            target_height: 2200,
        }
    }
}

impl BatchConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_width == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "target_width",
                value: self.target_width,
            });
        }
        if self.target_height == 0 {
            return Err(ConfigError::InvalidDimension {
                field: "target_height",
                value: self.target_height,
            });
        }
        Ok(())
    }

    /// The target box as [`Dimensions`].
    pub fn target(&self) -> Dimensions {
        Dimensions {
            width: self.target_width,
            height: self.target_height,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
}

impl ConfigOverrides {
    /// Render the set values as a sparse TOML table.
    pub fn to_toml(&self) -> toml::Value {
        let mut table = toml::map::Map::new();
        if let Some(path) = &self.input_folder {
            table.insert(
                "input_folder".into(),
                toml::Value::String(path.to_string_lossy().into_owned()),
            );
        }
        if let Some(path) = &self.output_folder {
            table.insert(
                "output_folder".into(),
                toml::Value::String(path.to_string_lossy().into_owned()),
            );
        }
        if let Some(w) = self.target_width {
            table.insert("target_width".into(), toml::Value::Integer(i64::from(w)));
        }
        if let Some(h) = self.target_height {
            table.insert("target_height".into(), toml::Value::Integer(i64::from(h)));
        }
        toml::Value::Table(table)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(BatchConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read and parse a config file that must exist.
pub fn read_config_file(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Load a config file as a raw TOML value, if it exists.
///
/// Returns `Ok(None)` if there is no file at `path`.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.is_file() {
        return Ok(None);
    }
    read_config_file(path).map(Some)
}

/// Merge overlays onto a base value in order, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<BatchConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: BatchConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the batch config from all layers.
///
/// With `config_file` set the file must exist; otherwise [`CONFIG_FILE_NAME`]
/// in `search_dir` is used when present.
pub fn load_config(
    config_file: Option<&Path>,
    search_dir: &Path,
    overrides: &ConfigOverrides,
) -> Result<BatchConfig, ConfigError> {
    let file_layer = match config_file {
        Some(path) => Some(read_config_file(path)?),
        None => load_raw_config(&search_dir.join(CONFIG_FILE_NAME))?,
    };
    let overlays = file_layer.into_iter().chain(Some(overrides.to_toml()));
    resolve_config(stock_defaults_value()?, overlays)
}

/// Returns a fully-commented stock `fillcrop.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# fillcrop configuration
# ======================
#
# Every image directly inside `input_folder` is resized to cover the target
# box (keeping its aspect ratio), center-cropped to exactly
# target_width x target_height, and written to `output_folder` under the same
# file name. Supported: .png .jpg .jpeg .bmp .gif (case-insensitive).
#
# All keys are optional. CLI flags (--input, --output, --width, --height)
# override values set here.

# Folder to read images from. Subfolders are not descended into.
input_folder = "input"

# Folder to write results to. Created if missing; existing files with the
# same name are overwritten.
output_folder = "output"

# Output size in pixels. Both must be positive.
target_width = 2200
target_height = 2200
"##
}
