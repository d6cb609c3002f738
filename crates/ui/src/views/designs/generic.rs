use dioxus::prelude::*;
use inspect_core::model::Level;

use super::{CanvasProps, DesignCanvas, Inspectable};

/// One labelled block per design element, for levels without a dedicated canvas.
pub struct GenericCanvas;

impl DesignCanvas for GenericCanvas {
    fn render(&self, level: &Level, props: CanvasProps) -> Element {
        rsx! {
            div { class: "mock mock--generic",
                for element in level.design_elements() {
                    Inspectable {
                        key: "{element.id()}",
                        element: element.id().to_string(),
                        class: "generic-block",
                        canvas: props.clone(),
                        span { class: "generic-block__name", "{element.display_name()}" }
                    }
                }
            }
        }
    }
}
