//! Core types for the layout generator

use std::fmt;

use serde::{Serialize, Serializer};

/// Tolerance used when comparing canvas coordinates
pub const EPSILON: f64 = 1e-6;

/// A 2D point in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if another box lies fully inside this one (shared edges count as inside)
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Check if this bounding box overlaps another with positive area.
    ///
    /// Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.intersection_area(other) > EPSILON
    }

    /// Area of the overlap between two boxes, zero when they are disjoint
    pub fn intersection_area(&self, other: &BoundingBox) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// Kind of room in a generated floor plan.
///
/// Numbered variants carry the 1-based index of the room within its kind;
/// bedroom numbering counts the master bedroom as bedroom 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    LivingRoom,
    Kitchen,
    Dining,
    MasterBedroom,
    Bedroom(usize),
    Bathroom(usize),
    HalfBath,
    Study,
    Garage,
}

impl RoomType {
    /// Type tag used by the front end and in serialized output
    pub fn tag(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living-room",
            RoomType::Kitchen => "kitchen",
            RoomType::Dining => "dining",
            RoomType::MasterBedroom => "master-bedroom",
            RoomType::Bedroom(_) => "bedroom",
            RoomType::Bathroom(_) => "bathroom",
            RoomType::HalfBath => "half-bath",
            RoomType::Study => "study",
            RoomType::Garage => "garage",
        }
    }

    /// Stable room id, unique within one blueprint
    pub fn room_id(&self) -> String {
        match self {
            RoomType::Bedroom(n) => format!("room-bedroom-{}", n),
            RoomType::Bathroom(n) => format!("room-bathroom-{}", n),
            other => format!("room-{}", other.tag()),
        }
    }

    /// Position in the canonical placement order
    pub fn order_key(&self) -> (u8, usize) {
        match self {
            RoomType::LivingRoom => (0, 0),
            RoomType::Kitchen => (1, 0),
            RoomType::Dining => (2, 0),
            RoomType::MasterBedroom => (3, 0),
            RoomType::Bedroom(n) => (4, *n),
            RoomType::Bathroom(n) => (5, *n),
            RoomType::HalfBath => (6, 0),
            RoomType::Study => (7, 0),
            RoomType::Garage => (8, 0),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for RoomType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// A placed room rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display hint, opaque to the generator
    pub color: String,
}

impl Room {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A wall segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wall {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub thickness: f64,
}

impl Wall {
    pub fn is_horizontal(&self) -> bool {
        (self.y1 - self.y2).abs() < EPSILON
    }

    pub fn is_vertical(&self) -> bool {
        (self.x1 - self.x2).abs() < EPSILON
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    /// Rotation in degrees
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_id: Option<String>,
}

/// The generated plan for one floor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub rooms: Vec<Room>,
    pub walls: Vec<Wall>,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    /// False when the program over-allocates the buildable area or a room
    /// crosses the plot frame
    pub fits_within_plot: bool,
}

impl Blueprint {
    /// Get a room by id
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Get a wall by id
    pub fn wall(&self, id: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    /// Windows belonging to a room, matched by id prefix
    pub fn windows_for<'a>(&'a self, room: &'a Room) -> impl Iterator<Item = &'a Window> + 'a {
        let prefix = format!("window-{}-", room.id);
        self.windows.iter().filter(move |w| w.id.starts_with(&prefix))
    }

    /// Doors belonging to a room
    pub fn doors_for<'a>(&'a self, room: &'a Room) -> impl Iterator<Item = &'a Door> + 'a {
        let id = format!("door-{}", room.id);
        self.doors.iter().filter(move |d| d.id == id)
    }
}
