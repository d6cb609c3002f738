use dioxus::prelude::*;

use crate::vm::{MistakeVm, ResultVm};

#[component]
pub fn EndScreen(
    result: ResultVm,
    on_restart: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page end-page",
            div { class: "end-card",
                div { class: "end-trophy", "🏆" }
                h1 { class: result.tone_class, "{result.emoji} {result.headline}" }
                p { class: "end-subtitle", "{result.subtitle}" }

                div { class: "score-ring",
                    svg { class: "score-ring__svg", view_box: "0 0 160 160",
                        circle { class: "score-ring__track", cx: "80", cy: "80", r: "70" }
                        circle {
                            class: "score-ring__fill",
                            cx: "80",
                            cy: "80",
                            r: "70",
                            stroke_dasharray: "{result.ring_circumference}",
                            stroke_dashoffset: "{result.ring_offset}",
                        }
                    }
                    div { class: "score-ring__label",
                        span { class: "score-ring__score", "{result.score}" }
                        span { class: "score-ring__total", "of {result.total}" }
                    }
                }

                div { class: "end-stats",
                    div { class: "end-stat end-stat--correct",
                        span { class: "end-stat__value", "✓ {result.score}" }
                        span { class: "end-stat__label", "Correct" }
                    }
                    div { class: "end-stat end-stat--incorrect",
                        span { class: "end-stat__value", "✕ {result.incorrect}" }
                        span { class: "end-stat__label", "Incorrect" }
                    }
                }

                div { class: "end-actions",
                    button {
                        class: "btn btn-outline",
                        id: "end-home",
                        r#type: "button",
                        onclick: move |_| on_home.call(()),
                        "Home"
                    }
                    button {
                        class: "btn btn-hero",
                        id: "end-restart",
                        r#type: "button",
                        onclick: move |_| on_restart.call(()),
                        "Try Again"
                    }
                }
            }

            if result.has_mistakes() {
                section { class: "mistakes",
                    h2 { class: "mistakes__title", "💡 Review Your Mistakes" }
                    for mistake in result.mistakes.iter().cloned() {
                        MistakeItem { key: "{mistake.key}", mistake }
                    }
                }
            }
        }
    }
}

#[component]
fn MistakeItem(mistake: MistakeVm) -> Element {
    rsx! {
        article { class: "mistake",
            h3 { class: "mistake__title", "{mistake.title}" }
            div { class: "mistake__answer mistake__answer--yours",
                span { "✕ Your answer:" }
                code { "{mistake.your_answer}" }
            }
            div { class: "mistake__answer mistake__answer--correct",
                span { "✓ Correct:" }
                code { "{mistake.correct_answer}" }
            }
            p { class: "mistake__explanation", "{mistake.explanation}" }
        }
    }
}
