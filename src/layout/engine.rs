//! Blueprint computation engine
//!
//! Runs the generation pipeline for one floor:
//!
//! 1. **Validation**: reject non-positive plots and impossible programs
//! 2. **Allocation**: size every requested room from the buildable area
//! 3. **Placement**: pack the sized rooms into the plot frame, shrinking and
//!    re-packing a bounded number of times when rooms cross the frame
//! 4. **Structure**: derive walls, doors and windows from the placed rooms
//!
//! ## Key Functions
//!
//! - [`compute`]: Main entry point for blueprint computation
//! - [`fallback_blueprint`]: Minimal plan used when generation fails

use tracing::{debug, warn};

use crate::brief::{Plot, Requirements};
use crate::stylesheet::Stylesheet;

use super::allocator::{allocate_sizes, allocated_area, RoomSize};
use super::config::LayoutConfig;
use super::error::LayoutError;
use super::placement::{place_rooms, plot_frame};
use super::structure::synthesize;
use super::types::*;

/// Most bedrooms a single program may request
pub const MAX_BEDROOMS: u32 = 20;

/// Most bathrooms a single program may request, counting a half-bath as 0.5
pub const MAX_BATHROOMS: f64 = 12.0;

/// Compute the blueprint for a plot and its requirements
pub fn compute(
    plot: &Plot,
    requirements: &Requirements,
    config: &LayoutConfig,
    stylesheet: &Stylesheet,
) -> Result<Blueprint, LayoutError> {
    config.validate()?;
    validate_plot(plot)?;
    validate_requirements(requirements)?;

    let buildable = config.buildable_area(plot.area, requirements.floors);
    let sizes = allocate_sizes(buildable, requirements, config)?;
    let allocated = allocated_area(&sizes);
    let within_budget = allocated <= buildable + EPSILON;

    let frame = plot_frame(plot, config);
    let mut rooms = place_rooms(plot, &sizes, config, stylesheet);
    let mut inside = all_inside(&frame, &rooms);

    // Shrinking cannot help a program whose minimum sizes exceed the budget.
    if within_budget {
        let mut factor = 1.0;
        for attempt in 1..=config.fit_attempts {
            if inside {
                break;
            }
            factor *= config.shrink_factor;
            let shrunk: Vec<RoomSize> = sizes.iter().map(|s| s.scaled(factor)).collect();
            rooms = place_rooms(plot, &shrunk, config, stylesheet);
            inside = all_inside(&frame, &rooms);
            debug!(attempt, factor, inside, "re-packed shrunk rooms");
        }
    }

    let fits_within_plot = within_budget && inside;
    if !fits_within_plot {
        warn!(
            allocated,
            buildable,
            inside,
            "room program does not fit within the plot"
        );
    }

    let structure = synthesize(&frame, &rooms, config);
    debug!(
        rooms = rooms.len(),
        walls = structure.walls.len(),
        doors = structure.doors.len(),
        windows = structure.windows.len(),
        fits_within_plot,
        "computed blueprint"
    );

    Ok(Blueprint {
        rooms,
        walls: structure.walls,
        doors: structure.doors,
        windows: structure.windows,
        fits_within_plot,
    })
}

fn validate_plot(plot: &Plot) -> Result<(), LayoutError> {
    for (name, value) in [
        ("width", plot.width),
        ("length", plot.length),
        ("area", plot.area),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::invalid_plot(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

fn validate_requirements(requirements: &Requirements) -> Result<(), LayoutError> {
    if requirements.floors == 0 {
        return Err(LayoutError::invalid_requirements(
            "at least one floor is required",
        ));
    }
    if !requirements.bathrooms.is_finite() || requirements.bathrooms < 0.0 {
        return Err(LayoutError::invalid_requirements(format!(
            "bathrooms must be zero or more, got {}",
            requirements.bathrooms
        )));
    }
    if requirements.bedrooms > MAX_BEDROOMS {
        return Err(LayoutError::invalid_requirements(format!(
            "at most {} bedrooms are supported, got {}",
            MAX_BEDROOMS, requirements.bedrooms
        )));
    }
    if requirements.bathrooms > MAX_BATHROOMS {
        return Err(LayoutError::invalid_requirements(format!(
            "at most {} bathrooms are supported, got {}",
            MAX_BATHROOMS, requirements.bathrooms
        )));
    }
    Ok(())
}

fn all_inside(frame: &BoundingBox, rooms: &[Room]) -> bool {
    rooms.iter().all(|r| frame.contains_box(&r.bounds()))
}

/// A single 200x150 living room at the frame corner, with no structure
pub fn fallback_blueprint(config: &LayoutConfig, stylesheet: &Stylesheet) -> Blueprint {
    let room_type = RoomType::LivingRoom;
    Blueprint {
        rooms: vec![Room {
            id: room_type.room_id(),
            room_type,
            x: config.margin,
            y: config.margin,
            width: 200.0,
            height: 150.0,
            color: stylesheet.room_color(room_type),
        }],
        walls: Vec::new(),
        doors: Vec::new(),
        windows: Vec::new(),
        fits_within_plot: false,
    }
}

impl Blueprint {
    /// The fallback plan with default configuration and colors
    pub fn fallback() -> Blueprint {
        fallback_blueprint(&LayoutConfig::default(), &Stylesheet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_home() -> Requirements {
        Requirements {
            bedrooms: 3,
            bathrooms: 2.0,
            living_room: true,
            dining_room: true,
            ..Requirements::default()
        }
    }

    fn run(plot: &Plot, requirements: &Requirements, config: &LayoutConfig) -> Blueprint {
        compute(plot, requirements, config, &Stylesheet::default()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_family_home_layout() {
        let blueprint = run(
            &Plot::residential(40.0, 60.0),
            &family_home(),
            &LayoutConfig::default(),
        );
        assert!(blueprint.fits_within_plot);
        assert_eq!(blueprint.rooms.len(), 8);

        let living = blueprint.room("room-living-room").unwrap();
        assert_eq!((living.x, living.y), (20.0, 20.0));
        assert_close(living.width, 224.18);

        // private zone starts below the public block
        let master = blueprint.room("room-master-bedroom").unwrap();
        assert_close(master.y, 331.39);

        // bathrooms hug the east edge
        for id in ["room-bathroom-1", "room-bathroom-2"] {
            assert_close(blueprint.room(id).unwrap().right(), 420.0);
        }
    }

    #[test]
    fn test_shrinks_to_fit() {
        let plot = Plot::residential(50.0, 40.0);
        let requirements = Requirements {
            bedrooms: 1,
            bathrooms: 1.0,
            living_room: true,
            dining_room: true,
            ..Requirements::default()
        };

        let strict = run(&plot, &requirements, &LayoutConfig::default().with_fit_attempts(0));
        assert!(!strict.fits_within_plot);

        let relaxed = run(&plot, &requirements, &LayoutConfig::default());
        assert!(relaxed.fits_within_plot);
        let frame = plot_frame(&plot, &LayoutConfig::default());
        assert!(relaxed
            .rooms
            .iter()
            .all(|r| frame.contains_box(&r.bounds())));
    }

    #[test]
    fn test_over_allocation_is_flagged_not_an_error() {
        let requirements = Requirements {
            bedrooms: 5,
            ..Requirements::default()
        };
        let blueprint = run(
            &Plot::residential(10.0, 10.0),
            &requirements,
            &LayoutConfig::default(),
        );
        assert!(!blueprint.fits_within_plot);
        assert_eq!(blueprint.rooms.len(), 6);
        assert_eq!(blueprint.doors.len(), 6);
    }

    #[test]
    fn test_invalid_plot() {
        let config = LayoutConfig::default();
        let stylesheet = Stylesheet::default();
        for plot in [
            Plot::residential(0.0, 60.0),
            Plot::residential(40.0, -1.0),
            Plot::residential(f64::NAN, 60.0),
        ] {
            let result = compute(&plot, &family_home(), &config, &stylesheet);
            assert!(matches!(result, Err(LayoutError::InvalidPlot { .. })));
        }
    }

    #[test]
    fn test_invalid_requirements() {
        let config = LayoutConfig::default();
        let stylesheet = Stylesheet::default();
        let plot = Plot::residential(40.0, 60.0);

        let no_floors = Requirements {
            floors: 0,
            ..family_home()
        };
        assert!(matches!(
            compute(&plot, &no_floors, &config, &stylesheet),
            Err(LayoutError::InvalidRequirements { .. })
        ));

        let negative_baths = Requirements {
            bathrooms: -1.0,
            ..family_home()
        };
        assert!(compute(&plot, &negative_baths, &config, &stylesheet).is_err());
    }

    #[test]
    fn test_room_count_limits() {
        let config = LayoutConfig::default();
        let stylesheet = Stylesheet::default();
        let plot = Plot::residential(40.0, 60.0);

        let at_limit = Requirements {
            bedrooms: MAX_BEDROOMS,
            bathrooms: MAX_BATHROOMS,
            ..family_home()
        };
        let blueprint = compute(&plot, &at_limit, &config, &stylesheet).unwrap();
        // living, kitchen, dining, bedrooms and full bathrooms
        assert_eq!(blueprint.rooms.len(), 3 + 20 + 12);

        let too_many_bedrooms = Requirements {
            bedrooms: MAX_BEDROOMS + 1,
            ..family_home()
        };
        assert!(matches!(
            compute(&plot, &too_many_bedrooms, &config, &stylesheet),
            Err(LayoutError::InvalidRequirements { .. })
        ));

        for bathrooms in [MAX_BATHROOMS + 0.5, 1e15] {
            let too_many_bathrooms = Requirements {
                bathrooms,
                ..family_home()
            };
            assert!(matches!(
                compute(&plot, &too_many_bathrooms, &config, &stylesheet),
                Err(LayoutError::InvalidRequirements { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let plot = Plot::residential(40.0, 60.0);
        let stylesheet = Stylesheet::default();
        for config in [
            LayoutConfig::default().with_gap(-60.0),
            LayoutConfig::default().with_scale(0.0),
            LayoutConfig::default().with_coverage_ratio(0.0),
        ] {
            assert!(matches!(
                compute(&plot, &family_home(), &config, &stylesheet),
                Err(LayoutError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_more_floors_means_smaller_rooms() {
        let plot = Plot::residential(40.0, 60.0);
        let config = LayoutConfig::default();
        let one = run(&plot, &family_home(), &config);
        let two = run(
            &plot,
            &Requirements {
                floors: 2,
                ..family_home()
            },
            &config,
        );
        let living = |b: &Blueprint| b.room("room-living-room").unwrap().bounds().area();
        assert!(living(&two) < living(&one));
    }

    #[test]
    fn test_fallback_blueprint() {
        let fallback = Blueprint::fallback();
        assert_eq!(fallback.rooms.len(), 1);
        let room = &fallback.rooms[0];
        assert_eq!(room.id, "room-living-room");
        assert_eq!((room.x, room.y, room.width, room.height), (20.0, 20.0, 200.0, 150.0));
        assert!(fallback.walls.is_empty());
        assert!(fallback.doors.is_empty());
        assert!(fallback.windows.is_empty());
        assert!(!fallback.fits_within_plot);
    }
}
