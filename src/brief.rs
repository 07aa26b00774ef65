//! Design brief: the plot and the requested room program
//!
//! A brief is what the wizard's input step collects. It can be built in code
//! or loaded from TOML:
//!
//! ```toml
//! [plot]
//! type = "residential"
//! width = 40
//! length = 60
//!
//! [requirements]
//! bedrooms = 3
//! bathrooms = 2.5
//! kitchen = "island"
//! living_room = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a brief
#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Failed to read brief file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse brief TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    #[default]
    Residential,
    Commercial,
    Mixed,
}

/// The buildable land parcel, in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plot {
    #[serde(rename = "type")]
    pub plot_type: PlotType,
    pub width: f64,
    pub length: f64,
    /// Square feet; kept equal to `width * length` by the constructors
    pub area: f64,
}

impl Plot {
    pub fn new(plot_type: PlotType, width: f64, length: f64) -> Self {
        Self {
            plot_type,
            width,
            length,
            area: width * length,
        }
    }

    pub fn residential(width: f64, length: f64) -> Self {
        Self::new(PlotType::Residential, width, length)
    }

    /// Change the dimensions, recomputing the area
    pub fn with_dimensions(mut self, width: f64, length: f64) -> Self {
        self.width = width;
        self.length = length;
        self.area = width * length;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenStyle {
    #[default]
    Open,
    Closed,
    Island,
}

/// The room program the layout has to satisfy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub floors: u32,
    pub bedrooms: u32,
    /// Fractional values add a half-bath (2.5 = two bathrooms and a half-bath)
    pub bathrooms: f64,
    pub kitchen: KitchenStyle,
    pub garage: bool,
    pub garden: bool,
    pub balcony: bool,
    pub study: bool,
    #[serde(alias = "diningRoom")]
    pub dining_room: bool,
    #[serde(alias = "livingRoom")]
    pub living_room: bool,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            floors: 1,
            bedrooms: 0,
            bathrooms: 0.0,
            kitchen: KitchenStyle::Open,
            garage: false,
            garden: false,
            balcony: false,
            study: false,
            dining_room: false,
            living_room: false,
        }
    }
}

impl Requirements {
    /// Number of full bathrooms requested
    pub fn full_bathrooms(&self) -> usize {
        if self.bathrooms.is_finite() && self.bathrooms > 0.0 {
            self.bathrooms.floor() as usize
        } else {
            0
        }
    }

    /// Whether the bathroom count carries a half-bath
    pub fn has_half_bath(&self) -> bool {
        self.bathrooms.is_finite() && self.bathrooms > 0.0 && self.bathrooms.fract() > 0.0
    }
}

/// A plot together with its requirements
#[derive(Debug, Clone, PartialEq)]
pub struct Brief {
    pub plot: Plot,
    pub requirements: Requirements,
}

/// TOML structure for deserializing briefs
#[derive(Deserialize)]
struct TomlBrief {
    plot: TomlPlot,
    #[serde(default)]
    requirements: Requirements,
}

#[derive(Deserialize)]
struct TomlPlot {
    #[serde(rename = "type", default)]
    plot_type: PlotType,
    width: f64,
    length: f64,
}

impl Brief {
    pub fn new(plot: Plot, requirements: Requirements) -> Self {
        Self { plot, requirements }
    }

    /// Load a brief from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BriefError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a brief from a TOML string.
    ///
    /// The plot area is always recomputed from width and length; an `area`
    /// key in the file is ignored.
    pub fn from_str(content: &str) -> Result<Self, BriefError> {
        let parsed: TomlBrief = toml::from_str(content)?;
        Ok(Brief {
            plot: Plot::new(parsed.plot.plot_type, parsed.plot.width, parsed.plot.length),
            requirements: parsed.requirements,
        })
    }
}
