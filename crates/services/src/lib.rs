#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use error::{QuizError, ValidationError};

pub use sessions::{
    AnswerFeedback, QuestionView, QuizAction, QuizEvent, QuizFlow, QuizRules, QuizSession,
    QuizSnapshot, Screen, SessionProgress,
};
