//! TOML-based configuration for the sheet generator.
//!
//! Every setting has a default, so the tool runs without a config file.  A
//! file only needs to list what differs:
//!
//! ```toml
//! [sheet]
//! rows = 3
//! label_length = 500.0   # derive columns from the tape length
//! padding = 5.0
//!
//! [output]
//! svg = "out/dominos.svg"
//! manifest = "out/dominos.json"
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` take the value of
//! `some_fn()` when absent from the file, and whole sections fall back to
//! their `Default` impl when missing.

use std::path::{Path, PathBuf};

use domino_core::domain::layout::DOT_SPACING_MM;
use domino_core::{calculate_columns, GridSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "domino-sheet.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Grid shape and spacing, all lengths in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    /// Dominoes per column.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Dominoes per row.  Ignored when `label_length` is set.
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Tape length to fill; the column count is derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_length: Option<f64>,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_spacing")]
    pub row_spacing: f64,
    #[serde(default = "default_spacing")]
    pub column_spacing: f64,
    /// Fixed seed for reproducible sheets; a fresh OS seed is used if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Where generated files are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Path of the SVG document.
    #[serde(default = "default_svg_path")]
    pub svg: PathBuf,
    /// Optional path of the JSON manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_rows() -> usize {
    // Three rows fit across 62 mm tape with the default spacing.
    3
}
fn default_columns() -> usize {
    10
}
fn default_padding() -> f64 {
    5.0
}
fn default_spacing() -> f64 {
    // One dot pitch between neighbouring dominoes.
    DOT_SPACING_MM
}
fn default_svg_path() -> PathBuf {
    PathBuf::from("dominos.svg")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            label_length: None,
            padding: default_padding(),
            row_spacing: default_spacing(),
            column_spacing: default_spacing(),
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg: default_svg_path(),
            manifest: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SheetConfig {
    /// Number of columns, derived from `label_length` when it is set.
    pub fn resolved_columns(&self) -> usize {
        match self.label_length {
            Some(length) => calculate_columns(length, self.padding, self.column_spacing),
            None => self.columns,
        }
    }

    /// The grid parameters described by this section.
    ///
    /// The result is not validated; [`domino_core::GridLayout::new`] does that.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            rows: self.rows,
            columns: self.resolved_columns(),
            padding: self.padding,
            row_spacing: self.row_spacing,
            column_spacing: self.column_spacing,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads `AppConfig` from `path`.
///
/// A missing file yields `AppConfig::default()` unless `must_exist` is set,
/// in which case [`ConfigError::NotFound`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path, must_exist: bool) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if must_exist {
                Err(ConfigError::NotFound(path.to_path_buf()))
            } else {
                Ok(AppConfig::default())
            }
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
