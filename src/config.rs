//! Processing configuration.
//!
//! Handles loading, layering, and validating `imagefit.toml`. Values are
//! resolved in three layers, each overriding the previous one:
//!
//! ```text
//! stock defaults  →  config file  →  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resize]
//! width = 0          # Target width in pixels  (0 with height 0 = no resize)
//! height = 0         # Target height in pixels (0 = derive from width)
//!
//! [crop]
//! top = 0.0          # Percent of each edge to remove (all 0 = no crop)
//! bottom = 0.0
//! left = 0.0
//! right = 0.0
//!
//! [fit]
//! stretch = 0.0      # Max percent the free dimension may be squeezed
//! crop = 0.0         # Max percent cropped from one edge of the free axis
//!
//! [processing]
//! max_processes = 4  # Max parallel workers in batch mode (omit for auto)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{CropSpec, FitSpec, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The settings bundle for one pipeline run.
///
/// Immutable for the duration of the run. An all-zero `crop` disables the
/// crop step and a `0x0` `resize` disables the resize step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessSettings {
    pub resize: Size,
    pub crop: CropSpec,
    pub fit: FitSpec,
}

impl ProcessSettings {
    /// Whether the crop step participates in the pipeline.
    pub fn needs_crop(&self) -> bool {
        !self.crop.is_trivial()
    }

    /// Whether the resize step participates in the pipeline.
    pub fn needs_resize(&self) -> bool {
        !self.resize.is_zero()
    }

    /// Validate percentages and the crop invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let percentages = [
            ("crop.top", self.crop.top),
            ("crop.bottom", self.crop.bottom),
            ("crop.left", self.crop.left),
            ("crop.right", self.crop.right),
            ("fit.stretch", self.fit.stretch_tolerance),
            ("fit.crop", self.fit.crop_tolerance),
        ];
        for (name, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a percentage in 0-100, got {value}"
                )));
            }
        }
        if self.crop.top + self.crop.bottom >= 100.0 {
            return Err(ConfigError::Validation(
                "crop.top + crop.bottom must be below 100".into(),
            ));
        }
        if self.crop.left + self.crop.right >= 100.0 {
            return Err(ConfigError::Validation(
                "crop.left + crop.right must be below 100".into(),
            ));
        }
        Ok(())
    }
}

/// Full tool configuration loaded from `imagefit.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Target box. `0x0` disables resizing.
    pub resize: Size,
    /// Percentage crop applied before resizing.
    pub crop: CropSpec,
    /// Stretch and crop tolerances for aspect-ratio reconciliation.
    pub fit: FitSpec,
    /// Parallel processing settings (batch mode).
    pub processing: ProcessingConfig,
}

impl Config {
    /// The per-image settings bundle.
    pub fn settings(&self) -> ProcessSettings {
        ProcessSettings {
            resize: self.resize,
            crop: self.crop,
            fit: self.fit,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings().validate()
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Loading and layering
// =============================================================================

/// The stock default config as a `toml::Value::Table`, the base layer for
/// merging overrides.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(Config::default())?)
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

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge `layers` in order on top of the stock defaults, then deserialize
/// and validate.
pub fn resolve_config(
    layers: impl IntoIterator<Item = toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = layers
        .into_iter()
        .fold(stock_defaults_value()?, merge_toml);
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path` (stock defaults when the file is absent), with
/// `overrides` layered on top.
pub fn load_config(path: &Path, overrides: Option<toml::Value>) -> Result<Config, ConfigError> {
    let file = load_raw_config(path)?;
    resolve_config(file.into_iter().chain(overrides))
}

/// A documented stock `imagefit.toml` with all options at their defaults.
pub fn stock_config_toml() -> &'static str {
    r#"# imagefit configuration
# All options are optional; the values below are the defaults.

# Target box. Leave both at 0 to skip resizing. Setting only one of them
# derives the other from the image's aspect ratio.
[resize]
width = 0
height = 0

# Percentage of each edge to remove before resizing (0-100).
# top + bottom and left + right must each stay below 100.
[crop]
top = 0.0
bottom = 0.0
left = 0.0
right = 0.0

# Tolerances used when the image and the target box have different aspect
# ratios. The image is first scaled to cover the box, then the overflowing
# dimension is squeezed by at most `stretch` percent, then cropped by at most
# `crop` percent per edge. Requests that cannot be reconciled fail.
[fit]
stretch = 0.0
crop = 0.0

[processing]
# Max parallel workers for `imagefit batch` (default: all CPU cores).
# max_processes = 4
"#
}
