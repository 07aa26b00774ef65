//! Wall, door and window synthesis
//!
//! Structure is derived from placed rooms only:
//! - four exterior walls trace the plot frame
//! - an interior wall runs along every gap shared by two adjacent rooms
//! - each room gets one door on its bottom edge
//! - windows sit on each room's top edge, by room kind

use super::config::LayoutConfig;
use super::types::{BoundingBox, Door, Point, Room, RoomType, Wall, Window, EPSILON};

/// Walls, doors and windows for a set of placed rooms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
}

/// Window arrangement for a kind of room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRule {
    /// Two windows, for living rooms and bedrooms
    Pair,
    /// One centred window
    Single,
    /// One small, high window
    Privacy,
    None,
}

impl WindowRule {
    pub fn for_room(room_type: RoomType) -> WindowRule {
        match room_type {
            RoomType::LivingRoom | RoomType::MasterBedroom | RoomType::Bedroom(_) => {
                WindowRule::Pair
            }
            RoomType::Kitchen | RoomType::Dining => WindowRule::Single,
            RoomType::Bathroom(_) | RoomType::HalfBath => WindowRule::Privacy,
            RoomType::Study | RoomType::Garage => WindowRule::None,
        }
    }

    /// `(start, width)` of each window as fractions of the room width
    fn spans(&self) -> &'static [(f64, f64)] {
        match self {
            WindowRule::Pair => &[(0.25, 0.2), (0.65, 0.2)],
            WindowRule::Single => &[(0.35, 0.3)],
            WindowRule::Privacy => &[(0.3, 0.4)],
            WindowRule::None => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.spans().len()
    }
}

/// Build walls, doors and windows for rooms placed inside `frame`
pub fn synthesize(frame: &BoundingBox, rooms: &[Room], config: &LayoutConfig) -> Structure {
    let mut walls = exterior_walls(frame, config.exterior_wall_thickness);
    walls.extend(interior_walls(rooms, config));

    let tolerance = config.gap / 2.0 + EPSILON;
    let doors = rooms
        .iter()
        .map(|room| room_door(room, &walls, config, tolerance))
        .collect();
    let windows = rooms
        .iter()
        .flat_map(|room| room_windows(room, &walls, config, tolerance))
        .collect();

    Structure {
        walls,
        doors,
        windows,
    }
}

/// The frame outline as a closed loop: north, east, south, west
fn exterior_walls(frame: &BoundingBox, thickness: f64) -> Vec<Wall> {
    let (l, t, r, b) = (frame.x, frame.y, frame.right(), frame.bottom());
    [
        ("north", (l, t), (r, t)),
        ("east", (r, t), (r, b)),
        ("south", (r, b), (l, b)),
        ("west", (l, b), (l, t)),
    ]
    .into_iter()
    .map(|(side, (x1, y1), (x2, y2))| Wall {
        id: format!("wall-exterior-{}", side),
        x1,
        y1,
        x2,
        y2,
        thickness,
    })
    .collect()
}

fn interior_walls(rooms: &[Room], config: &LayoutConfig) -> Vec<Wall> {
    let mut walls = Vec::new();
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            if let Some((start, end)) = shared_edge(&a.bounds(), &b.bounds(), config.gap) {
                walls.push(Wall {
                    id: format!("wall-interior-{}", walls.len() + 1),
                    x1: start.x,
                    y1: start.y,
                    x2: end.x,
                    y2: end.y,
                    thickness: config.interior_wall_thickness,
                });
            }
        }
    }
    walls
}

/// Centre line of the gap between two rooms that face each other across at
/// most `gap`, spanning the length they overlap
fn shared_edge(a: &BoundingBox, b: &BoundingBox, gap: f64) -> Option<(Point, Point)> {
    let top = a.y.max(b.y);
    let bottom = a.bottom().min(b.bottom());
    if bottom - top > EPSILON {
        let (left, right) = if a.right() <= b.x + EPSILON {
            (a, b)
        } else if b.right() <= a.x + EPSILON {
            (b, a)
        } else {
            return None;
        };
        let distance = right.x - left.right();
        if distance >= -EPSILON && distance <= gap + EPSILON {
            let x = left.right() + distance / 2.0;
            return Some((Point::new(x, top), Point::new(x, bottom)));
        }
        return None;
    }

    let left = a.x.max(b.x);
    let right = a.right().min(b.right());
    if right - left > EPSILON {
        let (upper, lower) = if a.bottom() <= b.y + EPSILON {
            (a, b)
        } else if b.bottom() <= a.y + EPSILON {
            (b, a)
        } else {
            return None;
        };
        let distance = lower.y - upper.bottom();
        if distance >= -EPSILON && distance <= gap + EPSILON {
            let y = upper.bottom() + distance / 2.0;
            return Some((Point::new(left, y), Point::new(right, y)));
        }
    }
    None
}

/// First horizontal wall within `tolerance` of `y` covering `[x_start, x_end]`
fn horizontal_wall_at(
    walls: &[Wall],
    y: f64,
    x_start: f64,
    x_end: f64,
    tolerance: f64,
) -> Option<String> {
    walls
        .iter()
        .find(|w| {
            w.is_horizontal()
                && (w.y1 - y).abs() <= tolerance
                && w.x1.min(w.x2) <= x_start + EPSILON
                && w.x1.max(w.x2) >= x_end - EPSILON
        })
        .map(|w| w.id.clone())
}

/// Door on the bottom edge, near the bottom-right corner
fn room_door(room: &Room, walls: &[Wall], config: &LayoutConfig, tolerance: f64) -> Door {
    let width = config.door_width.min(room.width);
    let x = (room.right() - width - config.door_offset).max(room.x);
    let y = room.bottom();
    Door {
        id: format!("door-{}", room.id),
        x,
        y,
        width,
        rotation: 0.0,
        wall_id: horizontal_wall_at(walls, y, x, x + width, tolerance),
    }
}

fn room_windows(
    room: &Room,
    walls: &[Wall],
    config: &LayoutConfig,
    tolerance: f64,
) -> Vec<Window> {
    let rule = WindowRule::for_room(room.room_type);
    let height = match rule {
        WindowRule::Privacy => config.bathroom_window_height,
        _ => config.window_height,
    };

    rule.spans()
        .iter()
        .enumerate()
        .map(|(i, &(start, fraction))| {
            let x = room.x + room.width * start;
            let width = room.width * fraction;
            Window {
                id: format!("window-{}-{}", room.id, i + 1),
                x,
                y: room.y - height / 2.0,
                width,
                height,
                wall_id: horizontal_wall_at(walls, room.y, x, x + width, tolerance),
            }
        })
        .collect()
}
