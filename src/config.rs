//! Application configuration.
//!
//! Loaded once at startup from a JSON file and validated before anything
//! else is constructed: a malformed config aborts the program, a missing
//! file falls back to built-in defaults. Color and thickness fields are
//! rendering inputs only and never reach the geometry core.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Grid section: resolution, cell spacing, and point appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Horizontal resolution (number of columns).
    pub cols: u16,
    /// Vertical resolution (number of rows).
    pub rows: u16,
    /// Canvas distance between neighboring points, both axes.
    pub cell_spacing: f64,
    /// Linear scaling of the drawn point footprint, in `(0, 1]`. Does not
    /// affect the collision boundary, which is always the full cell.
    pub point_coverage: f64,
    /// RGB for points outside the trace.
    pub color_off: [u8; 3],
    /// RGB for highlighted points.
    pub color_on: [u8; 3],
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 12,
            cell_spacing: 40.0,
            point_coverage: 0.5,
            color_off: [110, 110, 110],
            color_on: [0, 120, 255],
        }
    }
}

/// Circle section: gesture behavior and appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleSettings {
    /// Drawn line thickness. Rendering only; ignored by geometry.
    pub line_thickness: u16,
    /// When true, circles reaching outside the grid are not traced.
    pub is_bounded: bool,
    /// RGB for the drawn circle.
    pub color: [u8; 3],
    /// Initial radius on pointer-down, as a fraction of the cell spacing.
    pub start_radius_factor: f64,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            line_thickness: 1,
            is_bounded: true,
            color: [0, 0, 255],
            start_radius_factor: 0.25,
        }
    }
}

/// The full application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    pub circle: CircleSettings,
}

impl Config {
    /// Default config file location, `<config dir>/digitizer/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("digitizer").join("config.json"))
    }

    /// Load and validate the configuration.
    ///
    /// A missing file yields the defaults; a present but unreadable,
    /// unparsable, or invalid file is an error and startup must abort.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its legal range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cols < 1 {
            return Err(invalid("grid.cols", "must be at least 1"));
        }
        if self.grid.rows < 1 {
            return Err(invalid("grid.rows", "must be at least 1"));
        }
        if !(self.grid.cell_spacing.is_finite() && self.grid.cell_spacing > 0.0) {
            return Err(invalid("grid.cell_spacing", "must be a positive number"));
        }
        if !(self.grid.point_coverage.is_finite()
            && self.grid.point_coverage > 0.0
            && self.grid.point_coverage <= 1.0)
        {
            return Err(invalid("grid.point_coverage", "must be in (0, 1]"));
        }
        if self.circle.line_thickness < 1 {
            return Err(invalid("circle.line_thickness", "must be at least 1"));
        }
        if !(self.circle.start_radius_factor.is_finite() && self.circle.start_radius_factor > 0.0) {
            return Err(invalid(
                "circle.start_radius_factor",
                "must be a positive number",
            ));
        }
        Ok(())
    }

    /// The gesture's initial radius: a fraction of the cell spacing.
    pub fn start_radius(&self) -> f64 {
        self.circle.start_radius_factor * self.grid.cell_spacing
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}
