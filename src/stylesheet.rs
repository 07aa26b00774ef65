//! Stylesheet system for room and structure colors
//!
//! Colors are looked up by symbolic token. Rooms use `room-{type tag}`
//! (`room-kitchen`, `room-master-bedroom`, ...); the renderer uses tokens such
//! as `wall-exterior`, `door` and `window`. A stylesheet file only needs the
//! tokens it overrides; everything else falls back to the default palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::RoomType;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - translucent room fills over a white sheet
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
# Room fills
room-living-room = "rgba(34, 197, 94, 0.3)"
room-kitchen = "rgba(249, 115, 22, 0.3)"
room-dining = "rgba(168, 85, 247, 0.3)"
room-master-bedroom = "rgba(59, 130, 246, 0.3)"
room-bedroom = "rgba(59, 130, 246, 0.3)"
room-bathroom = "rgba(236, 72, 153, 0.3)"
room-half-bath = "rgba(236, 72, 153, 0.3)"
room-study = "rgba(234, 179, 8, 0.3)"
room-garage = "rgba(107, 114, 128, 0.3)"

# Structure
wall-exterior = "#1f2937"
wall-interior = "#4b5563"
door = "#92400e"
window = "#0ea5e9"

# Sheet
background = "#ffffff"
plot = "#f8fafc"
text = "#111827"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (room → translucent slate, wall → dark gray)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("room") {
            return "rgba(148, 163, 184, 0.3)".to_string();
        }
        if token.starts_with("wall") {
            return "#374151".to_string();
        }

        "#333333".to_string()
    }

    /// Fill color for a room of the given type
    pub fn room_color(&self, room_type: RoomType) -> String {
        self.resolve_or_default(&format!("room-{}", room_type.tag()))
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.name.as_deref(), Some("default"));
        assert!(stylesheet.colors.contains_key("room-kitchen"));
        assert!(stylesheet.colors.contains_key("wall-exterior"));
        assert!(stylesheet.colors.contains_key("window"));
    }

    #[test]
    fn test_room_colors() {
        let stylesheet = Stylesheet::default();
        assert_eq!(
            stylesheet.room_color(RoomType::LivingRoom),
            "rgba(34, 197, 94, 0.3)"
        );
        assert_eq!(
            stylesheet.room_color(RoomType::Bedroom(3)),
            stylesheet.room_color(RoomType::MasterBedroom)
        );
        assert_eq!(
            stylesheet.room_color(RoomType::Bathroom(2)),
            "rgba(236, 72, 153, 0.3)"
        );
    }

    #[test]
    fn test_resolve_missing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        // Empty stylesheet should fall back to defaults
        assert_eq!(empty().resolve_or_default("room-dining"), "rgba(168, 85, 247, 0.3)");
        assert_eq!(empty().room_color(RoomType::Garage), "rgba(107, 114, 128, 0.3)");
    }

    #[test]
    fn test_resolve_or_default_category_fallback() {
        assert_eq!(empty().resolve_or_default("room-sauna"), "rgba(148, 163, 184, 0.3)");
        assert_eq!(empty().resolve_or_default("wall-party"), "#374151");
        assert_eq!(empty().resolve_or_default("anything"), "#333333");
    }

    #[test]
    fn test_override_single_room() {
        let toml_str = r##"
[metadata]
name = "Blueprint Blue"
description = "White on blue"

[colors]
room-kitchen = "#ffffff"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Blueprint Blue".to_string()));
        assert_eq!(stylesheet.description, Some("White on blue".to_string()));
        assert_eq!(stylesheet.room_color(RoomType::Kitchen), "#ffffff");
        assert_eq!(
            stylesheet.room_color(RoomType::Dining),
            "rgba(168, 85, 247, 0.3)"
        );
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
