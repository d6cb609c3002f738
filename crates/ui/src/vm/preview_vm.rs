use inspect_core::model::{ElementId, Level};
use serde::Deserialize;

pub const TOOLTIP_OFFSET: f64 = 10.0;
pub const TOOLTIP_WIDTH: f64 = 250.0;
pub const TOOLTIP_HEIGHT: f64 = 200.0;

const ZOOM_MIN: u8 = 5;
const ZOOM_MAX: u8 = 15;
const ZOOM_DEFAULT: u8 = 10;

/// Preview zoom, kept in tenths so repeated steps stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zoom(u8);

impl Default for Zoom {
    fn default() -> Self {
        Self(ZOOM_DEFAULT)
    }
}

impl Zoom {
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(ZOOM_MAX))
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(1).max(ZOOM_MIN))
    }

    #[must_use]
    pub fn can_zoom_in(self) -> bool {
        self.0 < ZOOM_MAX
    }

    #[must_use]
    pub fn can_zoom_out(self) -> bool {
        self.0 > ZOOM_MIN
    }

    #[must_use]
    pub fn scale(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    /// Percentage label, e.g. `"110%"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", u32::from(self.0) * 10)
    }
}

/// Size of the window's client area, measured from the webview.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Tooltip anchor in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPosition {
    pub left: f64,
    pub top: f64,
}

impl TooltipPosition {
    /// Offset from the pointer, pulled back so the box stays inside the viewport.
    #[must_use]
    pub fn clamped(x: f64, y: f64, viewport: Viewport) -> Self {
        Self {
            left: (x + TOOLTIP_OFFSET).min(viewport.width - TOOLTIP_WIDTH),
            top: (y + TOOLTIP_OFFSET).min(viewport.height - TOOLTIP_HEIGHT),
        }
    }

    #[must_use]
    pub fn style(self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipVm {
    pub title: String,
    pub lines: Vec<(String, String)>,
}

impl TooltipVm {
    /// Name and declared styles of an element. Unknown ids get a title and no lines.
    #[must_use]
    pub fn for_element(level: &Level, id: &ElementId) -> Self {
        match level.element(id) {
            Some(element) => Self {
                title: element.display_name(),
                lines: element.styles().to_vec(),
            },
            None => Self {
                title: id.as_str().replacen('-', " ", 1),
                lines: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use services::LevelCatalog;

    use super::*;

    #[test]
    fn zoom_steps_and_clamps() {
        let mut zoom = Zoom::default();
        assert_eq!(zoom.label(), "100%");
        for _ in 0..10 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.label(), "150%");
        assert!(!zoom.can_zoom_in());
        for _ in 0..20 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.label(), "50%");
        assert!((zoom.scale() - 0.5).abs() < f32::EPSILON);
        assert!(!zoom.can_zoom_out());
        assert_eq!(zoom.zoom_in().label(), "60%");
    }

    #[test]
    fn tooltip_follows_pointer_with_offset() {
        let pos = TooltipPosition::clamped(100.0, 50.0, Viewport::default());
        assert_eq!(pos, TooltipPosition { left: 110.0, top: 60.0 });
        assert_eq!(pos.style(), "left: 110px; top: 60px;");
    }

    #[test]
    fn tooltip_is_clamped_near_edges() {
        let viewport = Viewport {
            width: 1000.0,
            height: 700.0,
        };
        let pos = TooltipPosition::clamped(990.0, 690.0, viewport);
        assert_eq!(pos, TooltipPosition { left: 750.0, top: 500.0 });
    }

    #[test]
    fn tooltip_lists_styles_in_order() {
        let catalog = LevelCatalog::builtin().unwrap();
        let easy = catalog.get(&"easy".parse().unwrap()).unwrap();
        let tooltip = TooltipVm::for_element(&easy, &ElementId::new("header"));
        assert_eq!(tooltip.title, "Header");
        assert!(!tooltip.lines.is_empty());
    }

    #[test]
    fn unknown_element_title_falls_back_to_id() {
        let catalog = LevelCatalog::builtin().unwrap();
        let easy = catalog.get(&"easy".parse().unwrap()).unwrap();
        let tooltip = TooltipVm::for_element(&easy, &ElementId::new("side-bar-left"));
        assert_eq!(tooltip.title, "side bar-left");
        assert!(tooltip.lines.is_empty());
    }
}
