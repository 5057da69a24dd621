mod events;
mod flow;
mod plan;
mod progress;
mod session;
mod view;

// Public API of the session subsystem.
pub use crate::error::{QuizError, ValidationError};
pub use events::{AnswerFeedback, QuizAction, QuizEvent};
pub use flow::QuizFlow;
pub use plan::{DEFAULT_MAX_LIVES, DEFAULT_QUESTION_LIMIT, QuizRules, SessionBuilder, SessionPlan};
pub use progress::SessionProgress;
pub use session::QuizSession;
pub use view::{QuestionView, QuizSnapshot, Screen};
