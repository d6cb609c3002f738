use dioxus::prelude::*;
use inspect_core::model::Level;

use super::{CanvasProps, DesignCanvas, Inspectable};

const FEATURES: [&str; 3] = ["Fast", "Secure", "Scale"];

/// Product landing page for the medium level.
pub struct LandingCanvas;

impl DesignCanvas for LandingCanvas {
    fn render(&self, _level: &Level, props: CanvasProps) -> Element {
        rsx! {
            div { class: "mock mock--landing",
                Inspectable { element: "hero", class: "landing-hero", canvas: props.clone(),
                    h1 { "Build Amazing Products" }
                    p { "The all-in-one platform for modern development teams" }
                    Inspectable { element: "cta-button", class: "landing-cta", canvas: props.clone(),
                        "Get Started Free"
                    }
                }
                Inspectable { element: "features", class: "landing-features", canvas: props.clone(),
                    for feature in FEATURES {
                        Inspectable { key: "{feature}", element: "feature-card", class: "landing-feature", canvas: props.clone(),
                            div { class: "landing-feature__icon", "✦" }
                            h3 { "{feature}" }
                            p { "Lightning fast performance for your apps" }
                        }
                    }
                }
            }
        }
    }
}
