//! Room placement by zoned shelf packing
//!
//! Rooms are split into three zones:
//!
//! - **public** (living room, kitchen, dining, garage) packed in rows from the
//!   top-left corner of the plot frame
//! - **private** (bedrooms, study) packed in rows below the public block,
//!   from the plot's mid-line when the whole block still fits there
//! - **service** (bathrooms) stacked in a column against the right edge
//!
//! Within a zone, rooms are placed left to right with a fixed gap and wrap to
//! a new row when the next room would cross the zone's right edge. The cursor
//! only moves forward, so rooms never overlap. Rooms are not resized here: if
//! the sizes do not fit, rooms extend past the frame.

use tracing::debug;

use crate::brief::Plot;
use crate::stylesheet::Stylesheet;

use super::allocator::RoomSize;
use super::config::LayoutConfig;
use super::types::{BoundingBox, Room, RoomType, EPSILON};

/// Zone a room type is packed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Public,
    Private,
    Service,
}

impl Zone {
    pub fn of(room_type: RoomType) -> Zone {
        match room_type {
            RoomType::LivingRoom | RoomType::Kitchen | RoomType::Dining | RoomType::Garage => {
                Zone::Public
            }
            RoomType::MasterBedroom | RoomType::Bedroom(_) | RoomType::Study => Zone::Private,
            RoomType::Bathroom(_) | RoomType::HalfBath => Zone::Service,
        }
    }
}

/// The plot rectangle in canvas units, offset by the margin
pub fn plot_frame(plot: &Plot, config: &LayoutConfig) -> BoundingBox {
    BoundingBox::new(
        config.margin,
        config.margin,
        plot.width * config.scale,
        plot.length * config.scale,
    )
}

/// A room rectangle before it is turned into a [`Room`]
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    room_type: RoomType,
    bounds: BoundingBox,
}

struct ShelfResult {
    placements: Vec<Placement>,
    /// Lowest bottom edge reached; the top when nothing was placed
    bottom: f64,
}

/// Pack `(type, width, height)` items in rows between `left` and `right`.
///
/// The first room of a row is always placed, even when it is wider than the
/// zone.
fn pack_shelf(
    items: &[(RoomType, f64, f64)],
    left: f64,
    top: f64,
    right: f64,
    gap: f64,
) -> ShelfResult {
    let mut x = left;
    let mut y = top;
    let mut row_height: f64 = 0.0;
    let mut bottom = top;
    let mut placements = Vec::with_capacity(items.len());

    for &(room_type, width, height) in items {
        if x > left + EPSILON && x + width > right + EPSILON {
            x = left;
            y += row_height + gap;
            row_height = 0.0;
        }
        placements.push(Placement {
            room_type,
            bounds: BoundingBox::new(x, y, width, height),
        });
        x += width + gap;
        row_height = row_height.max(height);
        bottom = bottom.max(y + height);
    }

    ShelfResult { placements, bottom }
}

/// Place sized rooms inside the plot frame.
///
/// The returned rooms follow the canonical order of [`RoomType::order_key`].
pub fn place_rooms(
    plot: &Plot,
    sizes: &[RoomSize],
    config: &LayoutConfig,
    stylesheet: &Stylesheet,
) -> Vec<Room> {
    let frame = plot_frame(plot, config);
    let gap = config.gap;

    let mut public = Vec::new();
    let mut private = Vec::new();
    let mut service = Vec::new();
    for size in sizes {
        let item = (
            size.room_type,
            size.width * config.scale,
            size.height * config.scale,
        );
        match Zone::of(size.room_type) {
            Zone::Public => public.push(item),
            Zone::Private => private.push(item),
            Zone::Service => service.push(item),
        }
    }

    let column_width = service.iter().map(|s| s.1).fold(0.0, f64::max);
    let main_right = if service.is_empty() {
        frame.right()
    } else {
        frame.right() - column_width - gap
    };

    let public_block = pack_shelf(&public, frame.x, frame.y, main_right, gap);

    let mut private_top = if public.is_empty() {
        frame.y
    } else {
        public_block.bottom + gap
    };
    if !private.is_empty() {
        let block_height = pack_shelf(&private, frame.x, 0.0, main_right, gap).bottom;
        let mid = frame.y + frame.height / 2.0;
        if mid > private_top && mid + block_height <= frame.bottom() + EPSILON {
            private_top = mid;
        }
    }
    let private_block = pack_shelf(&private, frame.x, private_top, main_right, gap);

    let mut placements = public_block.placements;
    placements.extend(private_block.placements);

    // Keep the column clear of any shelf room that ran past its zone.
    let shelf_right = placements
        .iter()
        .map(|p| p.bounds.right())
        .fold(frame.x - gap, f64::max);
    let column_left = (main_right + gap).max(shelf_right + gap);

    let mut y = frame.y;
    for &(room_type, width, height) in &service {
        let x = column_left + column_width - width;
        placements.push(Placement {
            room_type,
            bounds: BoundingBox::new(x, y, width, height),
        });
        y += height + gap;
    }

    debug!(
        public = public.len(),
        private = private.len(),
        service = service.len(),
        private_top,
        column_left,
        "placed rooms"
    );

    placements.sort_by_key(|p| p.room_type.order_key());
    placements
        .into_iter()
        .map(|p| Room {
            id: p.room_type.room_id(),
            room_type: p.room_type,
            x: p.bounds.x,
            y: p.bounds.y,
            width: p.bounds.width,
            height: p.bounds.height,
            color: stylesheet.room_color(p.room_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(room_type: RoomType, width: f64, height: f64) -> RoomSize {
        RoomSize {
            room_type,
            width,
            height,
            min_side: 1.0,
        }
    }

    fn place(plot: &Plot, sizes: &[RoomSize]) -> Vec<Room> {
        place_rooms(plot, sizes, &LayoutConfig::default(), &Stylesheet::default())
    }

    #[test]
    fn test_plot_frame_is_scaled_and_offset() {
        let frame = plot_frame(&Plot::residential(40.0, 60.0), &LayoutConfig::default());
        assert_eq!(frame, BoundingBox::new(20.0, 20.0, 400.0, 600.0));
    }

    #[test]
    fn test_first_room_at_frame_corner() {
        let rooms = place(
            &Plot::residential(40.0, 60.0),
            &[size(RoomType::LivingRoom, 20.0, 15.0)],
        );
        assert_eq!(rooms.len(), 1);
        assert_eq!((rooms[0].x, rooms[0].y), (20.0, 20.0));
        assert_eq!((rooms[0].width, rooms[0].height), (200.0, 150.0));
    }

    #[test]
    fn test_shelf_advances_then_wraps() {
        // Frame is 300 units wide: two 12ft rooms fit in a row, the third wraps.
        let rooms = place(
            &Plot::residential(30.0, 60.0),
            &[
                size(RoomType::LivingRoom, 12.0, 10.0),
                size(RoomType::Kitchen, 12.0, 8.0),
                size(RoomType::Dining, 12.0, 9.0),
            ],
        );
        assert_eq!((rooms[0].x, rooms[0].y), (20.0, 20.0));
        assert_eq!((rooms[1].x, rooms[1].y), (150.0, 20.0));
        // next row starts below the tallest room of the first row
        assert_eq!((rooms[2].x, rooms[2].y), (20.0, 130.0));
    }

    #[test]
    fn test_bathrooms_stack_on_right_edge() {
        let rooms = place(
            &Plot::residential(40.0, 60.0),
            &[
                size(RoomType::Kitchen, 15.0, 12.0),
                size(RoomType::Bathroom(1), 8.0, 10.0),
                size(RoomType::Bathroom(2), 8.0, 10.0),
            ],
        );
        let bath1 = &rooms[1];
        let bath2 = &rooms[2];
        assert_eq!(bath1.right(), 420.0);
        assert_eq!(bath1.y, 20.0);
        assert_eq!(bath2.right(), 420.0);
        assert_eq!(bath2.y, 130.0);
    }

    #[test]
    fn test_private_zone_below_public() {
        let rooms = place(
            &Plot::residential(40.0, 60.0),
            &[
                size(RoomType::LivingRoom, 20.0, 15.0),
                size(RoomType::MasterBedroom, 15.0, 12.0),
            ],
        );
        let living = &rooms[0];
        let master = &rooms[1];
        assert!(master.y >= living.bottom());
        // small private block starts at the mid-line
        assert_eq!(master.y, 320.0);
    }

    #[test]
    fn test_private_zone_follows_public_when_midline_too_low() {
        let rooms = place(
            &Plot::residential(40.0, 40.0),
            &[
                size(RoomType::LivingRoom, 20.0, 10.0),
                size(RoomType::MasterBedroom, 15.0, 25.0),
            ],
        );
        // mid-line start would need 220 + 250 > 420
        assert_eq!(rooms[1].y, 130.0);
    }

    #[test]
    fn test_oversized_rooms_never_overlap_column() {
        let rooms = place(
            &Plot::residential(10.0, 10.0),
            &[
                size(RoomType::Kitchen, 9.0, 9.0),
                size(RoomType::MasterBedroom, 10.0, 10.0),
                size(RoomType::Bathroom(1), 5.0, 6.0),
            ],
        );
        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                assert!(!a.bounds().intersects(&b.bounds()), "{} overlaps {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_output_in_canonical_order_with_colors() {
        let rooms = place(
            &Plot::residential(40.0, 60.0),
            &[
                size(RoomType::Kitchen, 10.0, 10.0),
                size(RoomType::MasterBedroom, 10.0, 10.0),
                size(RoomType::Bathroom(1), 6.0, 8.0),
                size(RoomType::Study, 8.0, 8.0),
            ],
        );
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["room-kitchen", "room-master-bedroom", "room-bathroom-1", "room-study"]
        );
        assert!(rooms.iter().all(|r| !r.color.is_empty()));
    }
}
