//! Home Blueprint - floor plan generation for residential plots
//!
//! This library turns a plot and a room program into a blueprint of placed
//! rooms, walls, doors and windows, and renders blueprints to SVG.
//!
//! # Example
//!
//! ```rust
//! use home_blueprint::{generate_blueprint, Plot, Requirements};
//!
//! let plot = Plot::residential(40.0, 60.0);
//! let requirements = Requirements {
//!     bedrooms: 3,
//!     bathrooms: 2.0,
//!     living_room: true,
//!     dining_room: true,
//!     ..Requirements::default()
//! };
//!
//! let blueprint = generate_blueprint(&plot, &requirements).unwrap();
//! assert_eq!(blueprint.rooms.len(), 8);
//! assert_eq!(blueprint.doors.len(), 8);
//! assert!(blueprint.fits_within_plot);
//! ```

pub mod brief;
pub mod layout;
pub mod renderer;
pub mod stylesheet;

pub use brief::{Brief, BriefError, KitchenStyle, Plot, PlotType, Requirements};
pub use layout::lint::{LintCategory, LintWarning};
pub use layout::{AreaSummary, Blueprint, ConfigError, LayoutConfig, LayoutError, RoomType};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};

use thiserror::Error;
use tracing::warn;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur during the generation pipeline
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Error while loading the brief
    #[error("brief error: {0}")]
    Brief(#[from] BriefError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for room and structure colors
    pub stylesheet: Stylesheet,
    /// Debug mode: annotate rendered rooms with their ids and sizes
    pub debug: bool,
    /// Run blueprint lint checks after generation
    pub lint: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            debug: false,
            lint: false,
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Generate a blueprint with default configuration
///
/// This is the main entry point for the library.
pub fn generate_blueprint(
    plot: &Plot,
    requirements: &Requirements,
) -> Result<Blueprint, LayoutError> {
    generate_with_config(plot, requirements, &GenerateConfig::default())
}

/// Generate a blueprint with custom configuration
///
/// # Example
///
/// ```rust
/// use home_blueprint::{generate_with_config, GenerateConfig, LayoutConfig, Plot, Requirements};
///
/// let config = GenerateConfig::new().with_layout(LayoutConfig::default().with_scale(5.0));
/// let plot = Plot::residential(30.0, 40.0);
///
/// let blueprint = generate_with_config(&plot, &Requirements::default(), &config).unwrap();
/// assert_eq!(blueprint.rooms[0].id, "room-kitchen");
/// assert_eq!(blueprint.walls[0].x2, 170.0);
/// ```
pub fn generate_with_config(
    plot: &Plot,
    requirements: &Requirements,
    config: &GenerateConfig,
) -> Result<Blueprint, LayoutError> {
    layout::compute(plot, requirements, &config.layout, &config.stylesheet)
}

/// Generate a blueprint, substituting the fallback plan on error
pub fn generate_or_fallback(
    plot: &Plot,
    requirements: &Requirements,
    config: &GenerateConfig,
) -> Blueprint {
    match generate_with_config(plot, requirements, config) {
        Ok(blueprint) => blueprint,
        Err(e) => {
            warn!(error = %e, "blueprint generation failed, using fallback plan");
            layout::fallback_blueprint(&config.layout, &config.stylesheet)
        }
    }
}

/// Generate a blueprint and lint it when `config.lint` is set
///
/// Lint warnings never fail generation; with lint disabled the warning list is
/// empty.
pub fn generate_with_lint(
    plot: &Plot,
    requirements: &Requirements,
    config: &GenerateConfig,
) -> Result<(Blueprint, Vec<LintWarning>), LayoutError> {
    let blueprint = generate_with_config(plot, requirements, config)?;
    let warnings = if config.lint {
        let frame = layout::plot_frame(plot, &config.layout);
        layout::lint::check(&blueprint, &frame)
    } else {
        Vec::new()
    };
    Ok((blueprint, warnings))
}

/// Like [`generate_with_lint`], but substitutes the fallback plan on error.
///
/// The fallback plan is never linted. The generation error, if any, is
/// returned next to it.
pub fn generate_with_lint_or_fallback(
    plot: &Plot,
    requirements: &Requirements,
    config: &GenerateConfig,
) -> (Blueprint, Vec<LintWarning>, Option<LayoutError>) {
    match generate_with_lint(plot, requirements, config) {
        Ok((blueprint, warnings)) => (blueprint, warnings, None),
        Err(e) => {
            warn!(error = %e, "blueprint generation failed, using fallback plan");
            let fallback = layout::fallback_blueprint(&config.layout, &config.stylesheet);
            (fallback, Vec::new(), Some(e))
        }
    }
}

/// Load a TOML brief and generate its blueprint
pub fn generate_from_brief(
    source: &str,
    config: &GenerateConfig,
) -> Result<(Brief, Blueprint), GenerateError> {
    let brief = Brief::from_str(source)?;
    let blueprint = generate_with_config(&brief.plot, &brief.requirements, config)?;
    Ok((brief, blueprint))
}

/// Render a blueprint to SVG using the pipeline configuration
pub fn render_with_config(blueprint: &Blueprint, config: &GenerateConfig) -> String {
    render_svg_with_stylesheet(blueprint, &config.svg, &config.stylesheet, config.debug)
}
