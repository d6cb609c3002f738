mod design_preview;
mod designs;
mod end_screen;
pub(crate) mod game;
mod question_panel;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use design_preview::DesignPreview;
pub use designs::{
    BlogCanvas, CanvasProps, DashboardCanvas, DesignCanvas, DesignRegistry, GenericCanvas,
    HoverEvent, LandingCanvas,
};
pub use end_screen::EndScreen;
pub use game::GameView;
pub use question_panel::QuestionPanel;
pub use start::StartView;
pub use state::ViewError;
