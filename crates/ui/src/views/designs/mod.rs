//! Per-level design canvases shown in the preview pane.
//!
//! Each built-in level has a hand-drawn mock page. Levels loaded from a custom
//! catalog fall back to a generic canvas built from their design elements.

mod blog;
mod dashboard;
mod generic;
mod landing;

use std::collections::HashMap;
use std::sync::Arc;

use dioxus::prelude::*;
use inspect_core::model::{ElementId, Level, LevelId};

pub use blog::BlogCanvas;
pub use dashboard::DashboardCanvas;
pub use generic::GenericCanvas;
pub use landing::LandingCanvas;

/// Pointer entered an inspectable element.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverEvent {
    pub element: ElementId,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, PartialEq)]
pub struct CanvasProps {
    pub highlighted: Option<ElementId>,
    pub hovered: Option<ElementId>,
    pub on_hover: EventHandler<HoverEvent>,
    pub on_leave: EventHandler<()>,
}

impl CanvasProps {
    #[must_use]
    pub fn is_active(&self, element: &str) -> bool {
        self.highlighted.as_ref().is_some_and(|id| id == element)
            || self.hovered.as_ref().is_some_and(|id| id == element)
    }
}

pub trait DesignCanvas: Send + Sync {
    fn render(&self, level: &Level, props: CanvasProps) -> Element;
}

/// Canvases keyed by level id.
#[derive(Clone)]
pub struct DesignRegistry {
    canvases: HashMap<LevelId, Arc<dyn DesignCanvas>>,
    fallback: Arc<dyn DesignCanvas>,
}

impl DesignRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            canvases: HashMap::new(),
            fallback: Arc::new(GenericCanvas),
        }
    }

    /// Canvases for the bundled easy / medium / hard levels.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(LevelId::new("easy"), Arc::new(BlogCanvas));
        registry.register(LevelId::new("medium"), Arc::new(LandingCanvas));
        registry.register(LevelId::new("hard"), Arc::new(DashboardCanvas));
        registry
    }

    pub fn register(&mut self, level_id: LevelId, canvas: Arc<dyn DesignCanvas>) {
        self.canvases.insert(level_id, canvas);
    }

    #[must_use]
    pub fn has_canvas(&self, level_id: &LevelId) -> bool {
        self.canvases.contains_key(level_id)
    }

    /// Canvas for a level, or the generic one when none is registered.
    #[must_use]
    pub fn get(&self, level_id: &LevelId) -> Arc<dyn DesignCanvas> {
        self.canvases
            .get(level_id)
            .map_or_else(|| Arc::clone(&self.fallback), Arc::clone)
    }
}

impl Default for DesignRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Hover target wrapping one design element.
#[component]
pub(crate) fn Inspectable(
    #[props(into)] element: String,
    #[props(into)] class: String,
    canvas: CanvasProps,
    children: Element,
) -> Element {
    let outline = if canvas.is_active(&element) {
        " inspector-outline"
    } else {
        ""
    };
    let on_hover = canvas.on_hover;
    let on_leave = canvas.on_leave;
    let hovered_id = ElementId::new(element.clone());

    rsx! {
        div {
            class: "{class} inspectable{outline}",
            "data-element": "{element}",
            onmouseenter: move |evt: MouseEvent| {
                evt.stop_propagation();
                let point = evt.client_coordinates();
                on_hover.call(HoverEvent {
                    element: hovered_id.clone(),
                    x: point.x,
                    y: point.y,
                });
            },
            onmouseleave: move |_| on_leave.call(()),
            {children}
        }
    }
}
