//! Area breakdown of a generated blueprint, in square feet

use serde::Serialize;

use crate::brief::Plot;

use super::config::LayoutConfig;
use super::types::Blueprint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSummary {
    /// Plot area
    pub total_area: f64,
    /// Sum of room rectangles
    pub built_up_area: f64,
    /// Usable floor area inside the interior walls
    pub carpet_area: f64,
    /// Plot area not covered by rooms
    pub open_area: f64,
}

impl AreaSummary {
    pub fn from_blueprint(blueprint: &Blueprint, plot: &Plot, config: &LayoutConfig) -> Self {
        let to_feet = |units: f64| units / config.scale;
        let wall = to_feet(config.interior_wall_thickness);

        let mut built_up_area = 0.0;
        let mut carpet_area = 0.0;
        for room in &blueprint.rooms {
            let width = to_feet(room.width);
            let height = to_feet(room.height);
            built_up_area += width * height;
            carpet_area += (width - wall).max(0.0) * (height - wall).max(0.0);
        }

        AreaSummary {
            total_area: plot.area,
            built_up_area,
            carpet_area,
            open_area: (plot.area - built_up_area).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{Room, RoomType};

    fn blueprint(rooms: Vec<Room>) -> Blueprint {
        Blueprint {
            rooms,
            walls: Vec::new(),
            doors: Vec::new(),
            windows: Vec::new(),
            fits_within_plot: true,
        }
    }

    fn room(room_type: RoomType, width: f64, height: f64) -> Room {
        Room {
            id: room_type.room_id(),
            room_type,
            x: 20.0,
            y: 20.0,
            width,
            height,
            color: String::new(),
        }
    }

    #[test]
    fn test_area_arithmetic() {
        // 10x12 ft and 8x5 ft rooms, 0.4 ft walls
        let plan = blueprint(vec![
            room(RoomType::LivingRoom, 100.0, 120.0),
            room(RoomType::Bathroom(1), 80.0, 50.0),
        ]);
        let summary = AreaSummary::from_blueprint(
            &plan,
            &Plot::residential(20.0, 20.0),
            &LayoutConfig::default(),
        );
        assert_eq!(summary.total_area, 400.0);
        assert!((summary.built_up_area - 160.0).abs() < 1e-9);
        let carpet = 9.6 * 11.6 + 7.6 * 4.6;
        assert!((summary.carpet_area - carpet).abs() < 1e-9);
        assert!((summary.open_area - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_area_never_negative() {
        let plan = blueprint(vec![room(RoomType::Garage, 200.0, 200.0)]);
        let summary = AreaSummary::from_blueprint(
            &plan,
            &Plot::residential(10.0, 10.0),
            &LayoutConfig::default(),
        );
        assert_eq!(summary.open_area, 0.0);
        assert!(summary.built_up_area > summary.total_area);
    }
}
