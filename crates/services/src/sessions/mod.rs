mod progress;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use view::{MistakeReview, SessionResult};
pub use workflow::{SessionLoopService, SessionStep};
