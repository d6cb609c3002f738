use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{DesignPreview, EndScreen, QuestionPanel, ViewError};
use crate::vm::{SessionIntent, SessionPhase, start_session};
#[cfg(test)]
use crate::vm::SessionVm;

use super::question_panel::EXPLANATION_ID;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const GAME_ROOT_ID: &str = "game-root";

/// Keyed by level id so switching levels starts a fresh session.
#[component]
pub fn GameView(level_id: String) -> Element {
    rsx! {
        GameScreen { key: "{level_id}", level_id: level_id.clone() }
    }
}

#[component]
fn GameScreen(level_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_loop = ctx.session_loop();

    let vm = use_signal({
        let session_loop = session_loop.clone();
        move || start_session(&session_loop, &level_id)
    });

    use_effect(move || {
        match &*vm.read() {
            Err(ViewError::LevelNotFound) => {
                let _ = navigator.replace(Route::Start {});
            }
            Err(ViewError::Unknown) => {}
            Ok(_) => {
                let _ = eval(&format!(
                    "document.getElementById({GAME_ROOT_ID:?})?.focus();"
                ));
            }
        }
    });

    use_effect(move || {
        let shown = vm
            .read()
            .as_ref()
            .is_ok_and(|state| state.session().show_explanation());
        if shown {
            let _ = eval(&format!(
                "setTimeout(() => document.getElementById({EXPLANATION_ID:?})?.scrollIntoView({{ behavior: 'smooth', block: 'nearest' }}), 150);"
            ));
        }
    });

    let dispatch_intent = {
        let session_loop = session_loop.clone();
        use_callback(move |intent: SessionIntent| {
            let mut vm = vm;
            let mut guard = vm.write();
            if let Ok(state) = &mut *guard {
                state.dispatch(&session_loop, intent);
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            evt.prevent_default();
            let _ = navigator.push(Route::Start {});
            return;
        }
        if evt
            .data
            .modifiers()
            .intersects(Modifiers::CONTROL | Modifiers::META | Modifiers::ALT)
        {
            return;
        }
        let key = evt.data.key().to_string();
        let intent = vm
            .read()
            .as_ref()
            .ok()
            .and_then(|state| state.key_intent(&key));
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let on_home = move |()| {
        let _ = navigator.push(Route::Start {});
    };
    let on_restart = move |()| dispatch_intent.call(SessionIntent::Restart);

    let vm_guard = vm.read();
    let state = match &*vm_guard {
        Err(err) => {
            return rsx! {
                div { class: "page not-found",
                    p { class: "not-found__message", "{err.message()}" }
                    Link { class: "btn btn-outline", to: Route::Start {}, "Back to levels" }
                }
            };
        }
        Ok(state) => state,
    };

    if state.phase() == SessionPhase::Complete {
        let result = state.result(&session_loop);
        return rsx! {
            div { id: GAME_ROOT_ID, class: "game game--complete", tabindex: "0", onkeydown: on_key,
                EndScreen { result, on_restart, on_home }
            }
        };
    }

    let level = Arc::clone(state.level());
    let highlighted = state.session().current_question().highlight_element().clone();
    let panel = state.panel();
    let title = level.title().to_string();
    let difficulty = state.difficulty_label();
    let difficulty_class = state.difficulty_class();
    let score = state.session().score();
    drop(vm_guard);

    rsx! {
        div { id: GAME_ROOT_ID, class: "game", tabindex: "0", onkeydown: on_key,
            header { class: "topbar",
                div { class: "topbar__left",
                    button {
                        class: "btn btn-ghost",
                        id: "game-home",
                        r#type: "button",
                        onclick: move |_| on_home(()),
                        "⌂ Home"
                    }
                    span { class: "topbar__divider" }
                    span { class: "topbar__title", "{title}" }
                    span { class: "{difficulty_class}", "{difficulty}" }
                }
                span { class: "topbar__score",
                    "Score: "
                    strong { "{score}" }
                }
            }
            main { class: "game__body",
                div { class: "game__pane",
                    DesignPreview { level, highlighted }
                }
                div { class: "game__pane",
                    QuestionPanel { panel, on_intent: dispatch_intent }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Result<SessionVm, ViewError>>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SessionIntent>,
        vm: Signal<Result<SessionVm, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<SessionVm, ViewError>> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
