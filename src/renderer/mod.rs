//! SVG renderer for generating output from blueprints
//!
//! This module takes a Blueprint and produces an SVG string
//! with appropriate CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet};
