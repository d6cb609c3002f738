use dioxus::prelude::*;
use inspect_core::model::Level;

use super::{CanvasProps, DesignCanvas, Inspectable};

const MENU: [&str; 4] = ["Overview", "Analytics", "Reports", "Settings"];
const STATS: [&str; 4] = ["Revenue", "Users", "Orders", "Growth"];

/// Admin dashboard for the hard level.
pub struct DashboardCanvas;

impl DesignCanvas for DashboardCanvas {
    fn render(&self, _level: &Level, props: CanvasProps) -> Element {
        rsx! {
            div { class: "mock mock--dashboard",
                Inspectable { element: "sidebar", class: "dash-sidebar", canvas: props.clone(),
                    div { class: "dash-sidebar__brand", "Dashboard" }
                    for item in MENU {
                        div { key: "{item}", class: "dash-sidebar__item", "{item}" }
                    }
                }
                Inspectable { element: "main-content", class: "dash-main", canvas: props.clone(),
                    Inspectable { element: "top-nav", class: "dash-topnav", canvas: props.clone(),
                        span { "Welcome back, User" }
                        div { class: "dash-topnav__avatar" }
                    }
                    Inspectable { element: "dashboard-content", class: "dash-grid", canvas: props.clone(),
                        for stat in STATS {
                            div { key: "{stat}", class: "dash-card",
                                Inspectable { element: "card-header", class: "dash-card__header", canvas: props.clone(),
                                    span { "{stat}" }
                                    span { class: "dash-card__trend", "↑" }
                                }
                                div { class: "dash-card__value", "$12,345" }
                                div { class: "dash-card__delta", "+12% from last month" }
                            }
                        }
                    }
                }
            }
        }
    }
}
