use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use inspect_core::model::{ElementId, Level};

use crate::context::AppContext;
use crate::views::designs::{CanvasProps, HoverEvent};
use crate::vm::{TooltipPosition, TooltipVm, Viewport, Zoom};

const VIEWPORT_PROBE: &str =
    "dioxus.send({ width: window.innerWidth, height: window.innerHeight });";

#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
    element: ElementId,
    position: TooltipPosition,
}

#[component]
pub fn DesignPreview(level: Arc<Level>, highlighted: ElementId) -> Element {
    let ctx = use_context::<AppContext>();
    let mut zoom = use_signal(Zoom::default);
    let mut hovered = use_signal(|| None::<ElementId>);
    let mut tooltip = use_signal(|| None::<Tooltip>);
    let mut viewport = use_signal(Viewport::default);

    // Re-measured on every hover so window resizes are picked up.
    let measure = use_callback(move |()| {
        spawn(async move {
            let mut probe = eval(VIEWPORT_PROBE);
            match probe.recv::<Viewport>().await {
                Ok(measured) => viewport.set(measured),
                Err(err) => log::debug!("viewport probe failed: {err:?}"),
            }
        });
    });
    use_hook(move || measure.call(()));

    let on_hover = use_callback(move |event: HoverEvent| {
        measure.call(());
        let position = TooltipPosition::clamped(event.x, event.y, viewport());
        hovered.set(Some(event.element.clone()));
        tooltip.set(Some(Tooltip {
            element: event.element,
            position,
        }));
    });
    let on_leave = use_callback(move |()| {
        hovered.set(None);
        tooltip.set(None);
    });

    let canvas = ctx.designs().get(level.id());
    let canvas_props = CanvasProps {
        highlighted: Some(highlighted),
        hovered: hovered(),
        on_hover,
        on_leave,
    };
    let current_zoom = zoom();
    let tooltip_view = tooltip().map(|tip| {
        (
            TooltipVm::for_element(&level, &tip.element),
            tip.position.style(),
        )
    });

    rsx! {
        section { class: "preview",
            div { class: "preview__toolbar",
                span { class: "preview__zoom", "{current_zoom.label()}" }
                button {
                    class: "btn btn-ghost btn-icon",
                    id: "preview-zoom-out",
                    r#type: "button",
                    title: "Zoom out",
                    disabled: !current_zoom.can_zoom_out(),
                    onclick: move |_| zoom.set(current_zoom.zoom_out()),
                    "−"
                }
                button {
                    class: "btn btn-ghost btn-icon",
                    id: "preview-zoom-in",
                    r#type: "button",
                    title: "Zoom in",
                    disabled: !current_zoom.can_zoom_in(),
                    onclick: move |_| zoom.set(current_zoom.zoom_in()),
                    "+"
                }
            }
            div { class: "preview__stage",
                div {
                    class: "preview__canvas",
                    style: "transform: scale({current_zoom.scale()});",
                    {canvas.render(&level, canvas_props)}
                }
            }
            if let Some((tip, style)) = tooltip_view {
                div { class: "tooltip", style: "{style}",
                    div { class: "tooltip__title", "{tip.title}" }
                    for (property, value) in tip.lines {
                        div { key: "{property}", class: "tooltip__line",
                            span { class: "tooltip__prop", "{property}:" }
                            span { class: "tooltip__value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
