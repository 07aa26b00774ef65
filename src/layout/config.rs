//! Configuration for the layout generator
//!
//! All lengths are canvas units unless noted; `scale` converts feet to units.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::error::LayoutError;

/// Errors that can occur when loading a layout configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] LayoutError),
}

/// Configuration options for blueprint generation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas units per foot
    pub scale: f64,

    /// Offset of the plot frame from the canvas origin
    pub margin: f64,

    /// Spacing between packed rooms
    pub gap: f64,

    /// Fraction of the plot area available for construction
    pub coverage_ratio: f64,

    /// Ratio weight reserved for hallways and storage; counted when sizing
    /// rooms but never placed
    pub circulation_ratio: f64,

    pub exterior_wall_thickness: f64,

    pub interior_wall_thickness: f64,

    pub door_width: f64,

    /// Distance between a door and its room's bottom-right corner
    pub door_offset: f64,

    pub window_height: f64,

    /// Height of the smaller privacy window used in bathrooms
    pub bathroom_window_height: f64,

    /// How many times an overflowing layout is shrunk and re-packed
    pub fit_attempts: u32,

    /// Size multiplier applied on each fit attempt
    pub shrink_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            margin: 20.0,
            gap: 10.0,
            coverage_ratio: 0.7,
            circulation_ratio: 0.12,
            exterior_wall_thickness: 8.0,
            interior_wall_thickness: 4.0,
            door_width: 30.0,
            door_offset: 10.0,
            window_height: 6.0,
            bathroom_window_height: 4.0,
            fit_attempts: 8,
            shrink_factor: 0.95,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string and validate it
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting is finite and within its range
    pub fn validate(&self) -> Result<(), LayoutError> {
        let all = [
            ("scale", self.scale),
            ("margin", self.margin),
            ("gap", self.gap),
            ("coverage_ratio", self.coverage_ratio),
            ("circulation_ratio", self.circulation_ratio),
            ("exterior_wall_thickness", self.exterior_wall_thickness),
            ("interior_wall_thickness", self.interior_wall_thickness),
            ("door_width", self.door_width),
            ("door_offset", self.door_offset),
            ("window_height", self.window_height),
            ("bathroom_window_height", self.bathroom_window_height),
            ("shrink_factor", self.shrink_factor),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(LayoutError::invalid_config(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("scale", self.scale),
            ("exterior_wall_thickness", self.exterior_wall_thickness),
            ("interior_wall_thickness", self.interior_wall_thickness),
            ("door_width", self.door_width),
            ("window_height", self.window_height),
            ("bathroom_window_height", self.bathroom_window_height),
        ] {
            if value <= 0.0 {
                return Err(LayoutError::invalid_config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("margin", self.margin),
            ("gap", self.gap),
            ("door_offset", self.door_offset),
            ("circulation_ratio", self.circulation_ratio),
        ] {
            if value < 0.0 {
                return Err(LayoutError::invalid_config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("coverage_ratio", self.coverage_ratio),
            ("shrink_factor", self.shrink_factor),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(LayoutError::invalid_config(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Set the feet-to-units scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the plot frame margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the spacing between rooms
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the coverage ratio
    pub fn with_coverage_ratio(mut self, ratio: f64) -> Self {
        self.coverage_ratio = ratio;
        self
    }

    /// Set the number of shrink-and-repack attempts (0 disables them)
    pub fn with_fit_attempts(mut self, attempts: u32) -> Self {
        self.fit_attempts = attempts;
        self
    }

    /// Buildable area per floor, in square feet
    pub fn buildable_area(&self, plot_area: f64, floors: u32) -> f64 {
        plot_area * self.coverage_ratio / floors.max(1) as f64
    }
}
