use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{GameView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", StartView)] Start {},
    #[route("/play/:level_id", GameView)] Play { level_id: String },
}
