use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use inspect_core::model::LevelId;
use services::{LevelCatalog, SessionLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::game::GameTestHandles;
use crate::views::{GameView, StartView};

struct TestApp {
    catalog: Arc<LevelCatalog>,
    session_loop: Arc<SessionLoopService>,
    initial_level: Option<LevelId>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<LevelCatalog> {
        Arc::clone(&self.catalog)
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    fn initial_level(&self) -> Option<LevelId> {
        self.initial_level.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Play(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    game_handles: Option<GameTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.game_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Play(level_id) => rsx! { GameView { level_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub game_handles: Option<GameTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the game screen's dispatcher and re-render.
    pub fn dispatch(&mut self, intent: crate::vm::SessionIntent) {
        let handles = self.game_handles.clone().expect("game handles");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = Arc::new(LevelCatalog::builtin().expect("builtin catalog"));
    let session_loop = Arc::new(SessionLoopService::new(Arc::clone(&catalog)));
    let game_handles = match view {
        ViewKind::Play(_) => Some(GameTestHandles::default()),
        ViewKind::Start => None,
    };

    let app = Arc::new(TestApp {
        catalog,
        session_loop,
        initial_level: None,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            game_handles: game_handles.clone(),
        },
    );

    ViewHarness { dom, game_handles }
}
