use quiz_core::model::Difficulty;

use super::Screen;

/// Discrete user actions accepted by the quiz flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    SubmitName(String),
    SelectDifficulty(Difficulty),
    /// Zero-based index into the current question's options.
    SelectOption(usize),
    RequestHint,
    ConfirmAnswer,
    Advance,
    Retry,
    /// Leave the running session for the difficulty menu.
    ChangeLevel,
    ReturnToMenu,
}

/// Outcome of checking the selected option against the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub chosen: String,
    pub correct_answer: String,
}

impl AnswerFeedback {
    #[must_use]
    pub fn message(&self) -> String {
        if self.correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect! Correct: {}", self.correct_answer)
        }
    }
}

/// Semantic events for the renderer to map onto sounds, images and dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    ScreenChanged(Screen),
    OptionSelected { index: usize },
    HintShown { text: String },
    AnsweredCorrectly,
    AnsweredIncorrectly { correct_answer: String },
    LifeLost { remaining: u32 },
    ResultRecorded,
    ResultNotSaved { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_messages() {
        let mut feedback = AnswerFeedback {
            correct: true,
            chosen: "Meow".into(),
            correct_answer: "Meow".into(),
        };
        assert_eq!(feedback.message(), "Correct!");

        feedback.correct = false;
        feedback.chosen = "Woof".into();
        assert_eq!(feedback.message(), "Incorrect! Correct: Meow");
    }
}
