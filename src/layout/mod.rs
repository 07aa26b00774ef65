//! Layout engine for generating floor plans
//!
//! This module takes a plot and a room program and computes the blueprint:
//! sized rooms packed into the plot, with walls, doors and windows derived
//! from the placement.

pub mod allocator;
pub mod area;
pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod placement;
pub mod structure;
pub mod types;

pub use allocator::{allocate_sizes, room_program, RoomSize};
pub use area::AreaSummary;
pub use config::{ConfigError, LayoutConfig};
pub use engine::{compute, fallback_blueprint, MAX_BATHROOMS, MAX_BEDROOMS};
pub use error::LayoutError;
pub use placement::{place_rooms, plot_frame};
pub use structure::{synthesize, Structure, WindowRule};
pub use types::*;
