use dioxus::prelude::*;

use crate::vm::{ChoiceVm, CodeLineVm, QuestionPanelVm, SessionIntent, SessionPhase};

pub(crate) const EXPLANATION_ID: &str = "question-explanation";

#[component]
pub fn QuestionPanel(panel: QuestionPanelVm, on_intent: EventHandler<SessionIntent>) -> Element {
    let answered = panel.phase != SessionPhase::Choosing;

    rsx! {
        section { class: "question-panel",
            header { class: "question-panel__header",
                div { class: "question-panel__meta",
                    span { class: "question-panel__count", "{panel.question_label}" }
                    span { class: "question-panel__score",
                        "Score: "
                        strong { "{panel.score}" }
                    }
                }
                div { class: "progress",
                    div { class: "progress__bar", style: "width: {panel.progress_width};" }
                }
            }
            div { class: "question-panel__body", id: "question-scroll",
                span { class: "badge badge--inspecting", "Inspecting: {panel.inspecting}" }
                h2 { class: "question-panel__title", "{panel.title}" }
                p { class: "question-panel__description", "{panel.description}" }

                div { class: "code-snippet",
                    span { class: "code-snippet__label", "Code Snippet" }
                    CodeBlock { lines: panel.code.clone() }
                }

                div { class: "choices",
                    for choice in panel.choices.iter().cloned() {
                        ChoiceButton { key: "{choice.id}", choice, on_intent }
                    }
                }

                if let Some(explanation) = panel.explanation.as_ref() {
                    div { class: "explanation", id: EXPLANATION_ID,
                        span { class: "explanation__title", "💡 Explanation" }
                        p { class: "explanation__text", "{explanation}" }
                    }
                }
            }
            footer { class: "question-panel__actions",
                if answered {
                    if panel.can_explain {
                        button {
                            class: "btn btn-outline",
                            id: "question-explain",
                            r#type: "button",
                            onclick: move |_| on_intent.call(SessionIntent::Explain),
                            "Explain"
                        }
                    }
                    button {
                        class: "btn btn-hero",
                        id: "question-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(SessionIntent::Next),
                        "{panel.next_label} →"
                    }
                } else {
                    button {
                        class: "btn btn-hero btn-block",
                        id: "question-submit",
                        r#type: "button",
                        disabled: !panel.can_submit,
                        onclick: move |_| on_intent.call(SessionIntent::Submit),
                        "Submit Answer"
                    }
                }
            }
        }
    }
}

#[component]
fn CodeBlock(lines: Vec<CodeLineVm>) -> Element {
    rsx! {
        pre { class: "code-block",
            code {
                for line in lines {
                    div { key: "{line.number}", class: "code-line",
                        span { class: "code-line__number", "{line.number}" }
                        span { class: "code-line__text",
                            for token in line.tokens {
                                span { class: token.kind.class(), "{token.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_intent: EventHandler<SessionIntent>) -> Element {
    let id = choice.id.clone();

    rsx! {
        button {
            class: choice.variant.class(),
            id: "choice-{choice.id}",
            r#type: "button",
            disabled: choice.disabled,
            onclick: move |_| on_intent.call(SessionIntent::Select(id.clone())),
            span { class: "choice__badge", "{choice.badge()}" }
            code { class: "choice__code", "{choice.code}" }
        }
    }
}
