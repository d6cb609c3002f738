use dioxus::prelude::*;
use inspect_core::model::Level;

use super::{CanvasProps, DesignCanvas, Inspectable};

/// Blog page for the easy level.
pub struct BlogCanvas;

impl DesignCanvas for BlogCanvas {
    fn render(&self, _level: &Level, props: CanvasProps) -> Element {
        rsx! {
            div { class: "mock mock--blog",
                Inspectable { element: "header", class: "blog-header", canvas: props.clone(),
                    h1 { class: "blog-header__title", "My Blog" }
                    Inspectable { element: "nav", class: "blog-nav", canvas: props.clone(),
                        span { "Home" }
                        span { "About" }
                        span { "Contact" }
                    }
                }
                Inspectable { element: "main", class: "blog-main", canvas: props.clone(),
                    for i in 1..=4 {
                        Inspectable { key: "{i}", element: "article", class: "blog-article", canvas: props.clone(),
                            h3 { "Article {i}" }
                            p { "Lorem ipsum dolor sit amet, consectetur adipiscing elit." }
                        }
                    }
                }
                Inspectable { element: "footer", class: "blog-footer", canvas: props,
                    p { "© 2024 My Blog" }
                }
            }
        }
    }
}
