mod code_vm;
mod level_vm;
mod preview_vm;
mod result_vm;
mod session_vm;

pub use code_vm::{CodeLineVm, CodeToken, TokenKind, code_lines, highlight_line};
pub use level_vm::{LevelCardVm, difficulty_class, map_level_cards};
pub use preview_vm::{TooltipPosition, TooltipVm, Viewport, Zoom};
pub use result_vm::{MistakeVm, ResultVm, headline};
pub use session_vm::{
    ChoiceVariant, ChoiceVm, QuestionPanelVm, SessionIntent, SessionOutcome, SessionPhase,
    SessionVm, start_session,
};
