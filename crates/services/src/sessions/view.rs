use std::fmt;

use quiz_core::model::{Difficulty, ScoreBand};

use super::events::AnswerFeedback;
use super::progress::SessionProgress;

/// Screens of the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    NameEntry,
    DifficultySelect,
    QuestionActive,
    AnswerRevealed,
    SessionComplete,
    GameOver,
}

impl Screen {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NameEntry => "name entry",
            Self::DifficultySelect => "difficulty selection",
            Self::QuestionActive => "question",
            Self::AnswerRevealed => "answer",
            Self::SessionComplete => "final score",
            Self::GameOver => "game over",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// One-based position within the session.
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

/// Presentation-agnostic picture of the flow handed to renderers.
///
/// This is intentionally **not** a UI view-model: apart from the player's own
/// input and question content it carries no pre-formatted strings.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub screen: Screen,
    /// Last accepted name, kept for pre-filling the name entry.
    pub player_name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub question: Option<QuestionView>,
    pub score: u32,
    pub total: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub progress: SessionProgress,
    pub feedback: Option<AnswerFeedback>,
    pub hint_enabled: bool,
    pub options_enabled: bool,
    pub band: Option<ScoreBand>,
}
