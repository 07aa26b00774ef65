//! SVG generation from blueprints

use crate::layout::{Blueprint, BoundingBox, Door, Room, RoomType, Wall, Window};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    labels: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            labels: vec![],
            indent: 1,
        }
    }

    /// Add CSS custom properties from a stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut tokens: Vec<(&String, &String)> = stylesheet.colors.iter().collect();
        tokens.sort();

        let mut css = String::from(":root {\n");
        for (token, value) in tokens {
            css.push_str(&format!("    --{}: {};\n", token, value));
        }
        css.push_str("  }\n");
        let prefix = self.prefix();
        css.push_str(&format!(
            "  .{}label {{ font-family: sans-serif; fill: {}; }}",
            prefix,
            stylesheet.resolve_or_default("text")
        ));
        self.styles.push(css);
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn class_list(&self, kind: &str, classes: &[String]) -> String {
        std::iter::once(format!("{}{}", self.prefix(), kind))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(
        &mut self,
        id: Option<&str>,
        bounds: &BoundingBox,
        classes: &[String],
        styles: &str,
    ) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, escape_xml(i))).unwrap_or_default();
        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            self.class_list("rect", classes),
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(
        &mut self,
        id: Option<&str>,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        classes: &[String],
        styles: &str,
    ) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, escape_xml(i))).unwrap_or_default();
        self.elements.push(format!(
            r#"{}<line{} class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            id_attr,
            self.class_list("line", classes),
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            styles
        ));
    }

    /// Add a text label centered on `(x, y)`; labels are drawn above every
    /// other element
    pub fn add_text(&mut self, text: &str, x: f64, y: f64, styles: &str) {
        self.labels.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle"{}>{}</text>"#,
            self.indent_str(),
            self.prefix(),
            fmt_num(x),
            fmt_num(y),
            styles,
            escape_xml(text)
        ));
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let vb_x = viewbox.x - padding;
        let vb_y = viewbox.y - padding;
        let vb_w = viewbox.width + 2.0 * padding;
        let vb_h = viewbox.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt_num(vb_x),
            fmt_num(vb_y),
            fmt_num(vb_w),
            fmt_num(vb_h)
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        for label in &self.labels {
            svg.push_str(label);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a blueprint to an SVG string (with default stylesheet)
pub fn render_svg(blueprint: &Blueprint, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(blueprint, config, &Stylesheet::default(), false)
}

/// Render a blueprint to an SVG string with a custom stylesheet.
///
/// Debug mode adds each room's id and size under its label.
pub fn render_svg_with_stylesheet(
    blueprint: &Blueprint,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
    debug: bool,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_stylesheet(stylesheet);

    let outline = plan_outline(blueprint);
    builder.add_rect(
        None,
        &outline,
        &[],
        &format!(r#" fill="{}""#, stylesheet.resolve_or_default("plot")),
    );

    let prefix = config.class_prefix.clone().unwrap_or_default();

    builder.start_group(Some("rooms"), &[]);
    for room in &blueprint.rooms {
        render_room(room, &prefix, &mut builder);
    }
    builder.end_group();

    builder.start_group(Some("walls"), &[]);
    for wall in &blueprint.walls {
        render_wall(wall, &prefix, stylesheet, &mut builder);
    }
    builder.end_group();

    builder.start_group(Some("windows"), &[]);
    for window in &blueprint.windows {
        render_window(window, &prefix, stylesheet, &mut builder);
    }
    builder.end_group();

    builder.start_group(Some("doors"), &[]);
    for door in &blueprint.doors {
        render_door(door, &prefix, stylesheet, &mut builder);
    }
    builder.end_group();

    if config.show_labels || debug {
        for room in &blueprint.rooms {
            let center = room.bounds().center();
            let font = format!(r#" font-size="{}""#, fmt_num(config.font_size));
            builder.add_text(
                &room_label(room.room_type),
                center.x,
                center.y,
                &font,
            );
            if debug {
                builder.add_text(
                    &format!(
                        "{} {}x{}",
                        room.id,
                        fmt_num(room.width),
                        fmt_num(room.height)
                    ),
                    center.x,
                    center.y + config.font_size * 1.2,
                    &format!(r#" font-size="{}""#, fmt_num(config.font_size * 0.75)),
                );
            }
        }
    }

    builder.build(outline)
}

/// Box covering every wall and room
fn plan_outline(blueprint: &Blueprint) -> BoundingBox {
    let walls = blueprint.walls.iter().map(|w| {
        let x = w.x1.min(w.x2);
        let y = w.y1.min(w.y2);
        BoundingBox::new(x, y, (w.x1 - w.x2).abs(), (w.y1 - w.y2).abs())
    });
    let rooms = blueprint.rooms.iter().map(Room::bounds);
    let mut all = walls.chain(rooms);
    match all.next() {
        Some(first) => all.fold(first, |acc, b| acc.union(&b)),
        None => BoundingBox::zero(),
    }
}

fn render_room(room: &Room, prefix: &str, builder: &mut SvgBuilder) {
    let classes = vec![format!("{}room", prefix), format!("{}{}", prefix, room.room_type)];
    builder.add_rect(
        Some(&room.id),
        &room.bounds(),
        &classes,
        &format!(r#" fill="{}""#, escape_xml(&room.color)),
    );
}

fn render_wall(wall: &Wall, prefix: &str, stylesheet: &Stylesheet, builder: &mut SvgBuilder) {
    let token = if wall.id.starts_with("wall-exterior") {
        "wall-exterior"
    } else {
        "wall-interior"
    };
    builder.add_line(
        Some(&wall.id),
        wall.x1,
        wall.y1,
        wall.x2,
        wall.y2,
        &[format!("{}{}", prefix, token)],
        &format!(
            r#" stroke="{}" stroke-width="{}" stroke-linecap="square""#,
            stylesheet.resolve_or_default(token),
            fmt_num(wall.thickness)
        ),
    );
}

fn render_window(
    window: &Window,
    prefix: &str,
    stylesheet: &Stylesheet,
    builder: &mut SvgBuilder,
) {
    builder.add_rect(
        Some(&window.id),
        &BoundingBox::new(window.x, window.y, window.width, window.height),
        &[format!("{}window", prefix)],
        &format!(r#" fill="{}""#, stylesheet.resolve_or_default("window")),
    );
}

/// A door is drawn as an opening across its wall
fn render_door(door: &Door, prefix: &str, stylesheet: &Stylesheet, builder: &mut SvgBuilder) {
    let (sin, cos) = door.rotation.to_radians().sin_cos();
    builder.add_line(
        Some(&door.id),
        door.x,
        door.y,
        door.x + door.width * cos,
        door.y + door.width * sin,
        &[format!("{}door", prefix)],
        &format!(
            r#" stroke="{}" stroke-width="6""#,
            stylesheet.resolve_or_default("door")
        ),
    );
}

/// Human-readable room name
fn room_label(room_type: RoomType) -> String {
    match room_type {
        RoomType::LivingRoom => "Living Room".to_string(),
        RoomType::Kitchen => "Kitchen".to_string(),
        RoomType::Dining => "Dining".to_string(),
        RoomType::MasterBedroom => "Master Bedroom".to_string(),
        RoomType::Bedroom(n) => format!("Bedroom {}", n),
        RoomType::Bathroom(n) => format!("Bathroom {}", n),
        RoomType::HalfBath => "Half Bath".to_string(),
        RoomType::Study => "Study".to_string(),
        RoomType::Garage => "Garage".to_string(),
    }
}

/// Format a coordinate with at most two decimals
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Blueprint {
        let room = Room {
            id: "room-kitchen".to_string(),
            room_type: RoomType::Kitchen,
            x: 20.0,
            y: 20.0,
            width: 100.0,
            height: 80.0,
            color: "rgba(249, 115, 22, 0.3)".to_string(),
        };
        Blueprint {
            walls: vec![Wall {
                id: "wall-exterior-north".to_string(),
                x1: 20.0,
                y1: 20.0,
                x2: 220.0,
                y2: 20.0,
                thickness: 8.0,
            }],
            doors: vec![Door {
                id: "door-room-kitchen".to_string(),
                x: 80.0,
                y: 100.0,
                width: 30.0,
                rotation: 0.0,
                wall_id: None,
            }],
            windows: vec![Window {
                id: "window-room-kitchen-1".to_string(),
                x: 55.0,
                y: 17.0,
                width: 30.0,
                height: 6.0,
                wall_id: Some("wall-exterior-north".to_string()),
            }],
            rooms: vec![room],
            fits_within_plot: true,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(20.0), "20");
        assert_eq!(fmt_num(224.18377), "224.18");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn test_room_labels() {
        assert_eq!(room_label(RoomType::Bedroom(3)), "Bedroom 3");
        assert_eq!(room_label(RoomType::HalfBath), "Half Bath");
    }

    #[test]
    fn test_render_blueprint() {
        let svg = render_svg(&sample(), &SvgConfig::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(
            r#"<rect id="room-kitchen" class="hb-rect hb-room hb-kitchen" x="20" y="20" width="100" height="80" fill="rgba(249, 115, 22, 0.3)"/>"#
        ));
        assert!(svg.contains(r#"id="wall-exterior-north""#));
        assert!(svg.contains(r#"stroke-width="8""#));
        assert!(svg.contains(r#"id="window-room-kitchen-1""#));
        assert!(svg.contains(r#"<line id="door-room-kitchen" class="hb-line hb-door" x1="80" y1="100" x2="110" y2="100""#));
        assert!(svg.contains(">Kitchen</text>"));
        // outline spans wall and room: 20..220 x 20..100, padded by 20
        assert!(svg.contains(r#"viewBox="0 0 240 120""#));
    }

    #[test]
    fn test_labels_can_be_disabled() {
        let config = SvgConfig::default().with_labels(false);
        let svg = render_svg(&sample(), &config);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_debug_adds_room_ids() {
        let svg = render_svg_with_stylesheet(
            &sample(),
            &SvgConfig::default(),
            &Stylesheet::default(),
            true,
        );
        assert!(svg.contains(">room-kitchen 100x80</text>"));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::default()
            .with_pretty_print(false)
            .with_standalone(false);
        let svg = render_svg(&sample(), &config);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("\n  <"));
    }
}
