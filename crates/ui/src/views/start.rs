use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LevelCardVm, map_level_cards};

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let cards = use_hook(|| map_level_cards(&ctx.catalog()));

    use_effect(move || {
        if let Some(level_id) = ctx.take_initial_level() {
            log::info!("opening level {level_id} on launch");
            let _ = navigator.replace(Route::Play {
                level_id: level_id.to_string(),
            });
        }
    });

    rsx! {
        div { class: "page start-page",
            header { class: "start-hero",
                span { class: "start-hero__eyebrow", "✦ Learn by Inspection" }
                h1 { class: "start-hero__title",
                    span { class: "text-gradient", "HTML & CSS" }
                    br {}
                    span { "Builder Game" }
                }
                p { class: "start-hero__lead",
                    "Inspect designs like in Figma, answer questions, and watch your code come to life. No typing required, just visual thinking!"
                }
                p { class: "start-hero__hint",
                    "Hover over design elements to inspect them • Answer questions to build the layout"
                }
            }
            div { class: "level-grid",
                for card in cards.iter().cloned() {
                    LevelCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn LevelCard(card: LevelCardVm) -> Element {
    let navigator = use_navigator();
    let level_id = card.id.to_string();

    rsx! {
        article { class: "level-card",
            div { class: "level-card__thumb level-card__thumb--{card.difficulty}",
                div { class: "level-card__mini" }
            }
            div { class: "level-card__meta",
                span { class: "{card.difficulty_class}", "{card.difficulty}" }
                span { class: "level-card__count", "• {card.question_count_label}" }
            }
            h3 { class: "level-card__title", "{card.title}" }
            p { class: "level-card__description", "{card.description}" }
            button {
                class: "btn btn-hero",
                id: "start-{card.id}",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Play {
                        level_id: level_id.clone(),
                    });
                },
                "Start Challenge"
            }
        }
    }
}
