//! Room-size allocation
//!
//! Converts a buildable area and a room program into target room dimensions
//! using a fixed table of area ratios, aspect ratios and minimum room sides.

use tracing::debug;

use crate::brief::{KitchenStyle, Requirements};

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::types::RoomType;

/// Sizing rule for one kind of room
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomProportions {
    /// Share of the buildable area, before normalization
    pub area_ratio: f64,
    /// Width divided by height
    pub aspect: f64,
    /// Smallest allowed side, in feet
    pub min_side: f64,
}

impl RoomProportions {
    const fn new(area_ratio: f64, aspect: f64, min_side: f64) -> Self {
        Self {
            area_ratio,
            aspect,
            min_side,
        }
    }
}

/// Proportions for a room type; the kitchen ratio depends on its style
pub fn proportions(room_type: RoomType, kitchen: KitchenStyle) -> RoomProportions {
    match room_type {
        RoomType::LivingRoom => RoomProportions::new(0.25, 1.4, 10.0),
        RoomType::Kitchen => {
            let ratio = match kitchen {
                KitchenStyle::Closed => 0.12,
                KitchenStyle::Open => 0.14,
                KitchenStyle::Island => 0.15,
            };
            RoomProportions::new(ratio, 1.2, 7.0)
        }
        RoomType::Dining => RoomProportions::new(0.12, 1.0, 8.0),
        RoomType::MasterBedroom => RoomProportions::new(0.18, 1.3, 10.0),
        RoomType::Bedroom(_) => RoomProportions::new(0.12, 1.2, 9.0),
        RoomType::Bathroom(_) => RoomProportions::new(0.06, 0.8, 5.0),
        RoomType::HalfBath => RoomProportions::new(0.03, 0.8, 4.0),
        RoomType::Study => RoomProportions::new(0.08, 1.0, 7.0),
        RoomType::Garage => RoomProportions::new(0.16, 1.0, 10.0),
    }
}

/// Target dimensions of one room, in feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomSize {
    pub room_type: RoomType,
    pub width: f64,
    pub height: f64,
    /// Smallest side this room may be shrunk to
    pub min_side: f64,
}

impl RoomSize {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Scale both sides by `factor`, never going below the minimum side
    pub fn scaled(&self, factor: f64) -> RoomSize {
        RoomSize {
            width: (self.width * factor).max(self.min_side),
            height: (self.height * factor).max(self.min_side),
            ..*self
        }
    }
}

/// Rooms requested by `requirements`, in canonical placement order.
///
/// A kitchen is always present. `garden` and `balcony` are outdoor features
/// and never produce rooms.
pub fn room_program(requirements: &Requirements) -> Vec<RoomType> {
    let mut program = Vec::new();

    if requirements.living_room {
        program.push(RoomType::LivingRoom);
    }
    program.push(RoomType::Kitchen);
    if requirements.dining_room {
        program.push(RoomType::Dining);
    }

    for n in 1..=requirements.bedrooms as usize {
        if n == 1 {
            program.push(RoomType::MasterBedroom);
        } else {
            program.push(RoomType::Bedroom(n));
        }
    }

    for n in 1..=requirements.full_bathrooms() {
        program.push(RoomType::Bathroom(n));
    }
    if requirements.has_half_bath() {
        program.push(RoomType::HalfBath);
    }

    if requirements.study {
        program.push(RoomType::Study);
    }
    if requirements.garage {
        program.push(RoomType::Garage);
    }

    program
}

/// Compute target dimensions for every requested room.
///
/// The ratios of all requested rooms plus the circulation allowance are
/// normalized against `buildable_area`; each room then gets its share,
/// shaped by its aspect ratio and clamped to its minimum side.
pub fn allocate_sizes(
    buildable_area: f64,
    requirements: &Requirements,
    config: &LayoutConfig,
) -> Result<Vec<RoomSize>, LayoutError> {
    if !buildable_area.is_finite() || buildable_area <= 0.0 {
        return Err(LayoutError::invalid_plot(format!(
            "buildable area must be positive, got {}",
            buildable_area
        )));
    }

    let program = room_program(requirements);
    let total_ratio: f64 = program
        .iter()
        .map(|rt| proportions(*rt, requirements.kitchen).area_ratio)
        .sum::<f64>()
        + config.circulation_ratio.max(0.0);
    let unit_area = buildable_area / total_ratio;

    debug!(
        rooms = program.len(),
        total_ratio, unit_area, "allocating room sizes"
    );

    let sizes = program
        .into_iter()
        .map(|room_type| {
            let p = proportions(room_type, requirements.kitchen);
            let area = p.area_ratio * unit_area;
            let width = (area * p.aspect).sqrt();
            let height = area / width;
            RoomSize {
                room_type,
                width: width.max(p.min_side),
                height: height.max(p.min_side),
                min_side: p.min_side,
            }
        })
        .collect();

    Ok(sizes)
}

/// Total area of a set of room sizes, in square feet
pub fn allocated_area(sizes: &[RoomSize]) -> f64 {
    sizes.iter().map(RoomSize::area).sum()
}
