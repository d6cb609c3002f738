mod grade;
mod ids;
mod level;
mod question;
mod session;

pub use ids::{ChoiceId, ElementId, LevelId, ParseIdError, QuestionId};

pub use grade::{GradeTier, percentage};
pub use level::{DesignElement, Difficulty, Level, LevelDraft, LevelError};
pub use question::{Choice, Question, QuestionDraft, QuestionError};
pub use session::{Answer, QuizSession, SessionCommand, SessionSnapshot};
