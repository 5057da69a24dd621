//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::Difficulty;

use crate::sessions::Screen;

/// Input rejected at a transition boundary. The machine state is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,
    #[error("Please select an option before continuing.")]
    NoSelection,
    #[error("This question has already been answered.")]
    AlreadyAnswered,
    #[error("option {index} does not exist (choose 1 to {available})")]
    UnknownOption { index: usize, available: usize },
}

/// Errors emitted by the quiz flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("No quiz data found for {tier} level: {reason}")]
    DataUnavailable { tier: Difficulty, reason: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cannot {action} on the {screen} screen")]
    InvalidAction { action: &'static str, screen: Screen },
    #[error("the hint for this question has already been shown")]
    HintAlreadyUsed,
}
