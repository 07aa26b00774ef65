//! Lint engine for detecting defects in generated blueprints.
//!
//! Runs after generation to check the plan against its own guarantees:
//! overlapping rooms, rooms outside the plot frame, an over-allocated
//! program, and rooms whose doors or windows break the per-room rules.

use std::fmt;

use super::structure::WindowRule;
use super::types::{Blueprint, BoundingBox};

/// A lint warning about a blueprint defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Containment,
    Allocation,
    Door,
    Window,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Containment => write!(f, "containment"),
            LintCategory::Allocation => write!(f, "allocation"),
            LintCategory::Door => write!(f, "door"),
            LintCategory::Window => write!(f, "window"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on a blueprint placed inside `frame`.
pub fn check(blueprint: &Blueprint, frame: &BoundingBox) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_overlaps(blueprint, &mut warnings);
    check_containment(blueprint, frame, &mut warnings);
    check_allocation(blueprint, &mut warnings);
    check_doors(blueprint, &mut warnings);
    check_windows(blueprint, &mut warnings);
    warnings
}

// ── Overlap detection ─────────────────────────────────────────────

fn check_overlaps(blueprint: &Blueprint, warnings: &mut Vec<LintWarning>) {
    let rooms = &blueprint.rooms;
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            let a = rooms[i].bounds();
            let b = rooms[j].bounds();
            if a.intersects(&b) {
                let overlap_w = a.right().min(b.right()) - a.x.max(b.x);
                let overlap_h = a.bottom().min(b.bottom()) - a.y.max(b.y);
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "rooms \"{}\" and \"{}\" overlap by {:.0}x{:.0}",
                        rooms[i].id, rooms[j].id, overlap_w, overlap_h
                    ),
                });
            }
        }
    }
}

// ── Containment ───────────────────────────────────────────────────

fn check_containment(blueprint: &Blueprint, frame: &BoundingBox, warnings: &mut Vec<LintWarning>) {
    for room in &blueprint.rooms {
        if !frame.contains_box(&room.bounds()) {
            warnings.push(LintWarning {
                category: LintCategory::Containment,
                message: format!(
                    "room \"{}\" at ({:.0}, {:.0}) {:.0}x{:.0} extends outside the plot",
                    room.id, room.x, room.y, room.width, room.height
                ),
            });
        }
    }
}

// ── Allocation ────────────────────────────────────────────────────

fn check_allocation(blueprint: &Blueprint, warnings: &mut Vec<LintWarning>) {
    if !blueprint.fits_within_plot {
        warnings.push(LintWarning {
            category: LintCategory::Allocation,
            message: "room program does not fit within the plot".to_string(),
        });
    }
}

// ── Doors and windows ─────────────────────────────────────────────

fn check_doors(blueprint: &Blueprint, warnings: &mut Vec<LintWarning>) {
    for room in &blueprint.rooms {
        let count = blueprint.doors_for(room).count();
        if count != 1 {
            warnings.push(LintWarning {
                category: LintCategory::Door,
                message: format!("room \"{}\" has {} doors, expected 1", room.id, count),
            });
        }
    }
}

fn check_windows(blueprint: &Blueprint, warnings: &mut Vec<LintWarning>) {
    for room in &blueprint.rooms {
        let expected = WindowRule::for_room(room.room_type).count();
        let count = blueprint.windows_for(room).count();
        if count != expected {
            warnings.push(LintWarning {
                category: LintCategory::Window,
                message: format!(
                    "{} \"{}\" has {} windows, expected {}",
                    room.room_type, room.id, count, expected
                ),
            });
        }
    }
}
