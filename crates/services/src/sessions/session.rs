use std::fmt;

use quiz_core::model::{Difficulty, PlayerName, Question, ResultRecord, ResultRecordError};

use super::events::AnswerFeedback;
use super::plan::SessionPlan;
use super::progress::SessionProgress;
use crate::error::{QuizError, ValidationError};

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of a tier: question list, position, score and lives.
///
/// The session steps through its questions sequentially. Each question is
/// answered at most once; `advance` moves on after the answer is revealed.
#[derive(Clone)]
pub struct QuizSession {
    difficulty: Difficulty,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    lives: u32,
    max_lives: u32,
    selection: Option<usize>,
    hint_used: bool,
    feedback: Option<AnswerFeedback>,
    recorded: bool,
}

impl QuizSession {
    /// Start a session from a non-empty plan with full lives.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataUnavailable` if the plan holds no questions.
    pub fn new(plan: SessionPlan, max_lives: u32) -> Result<Self, QuizError> {
        if plan.is_empty() {
            return Err(QuizError::DataUnavailable {
                tier: plan.difficulty,
                reason: "the question pool is empty".to_string(),
            });
        }

        Ok(Self {
            difficulty: plan.difficulty,
            questions: plan.questions,
            current: 0,
            score: 0,
            lives: max_lives,
            max_lives,
            selection: None,
            hint_used: false,
            feedback: None,
            recorded: false,
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Feedback for the current question once it has been answered.
    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Total questions as stored in the results log.
    #[must_use]
    pub fn total_u32(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Number of questions answered so far, including the revealed one.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        let revealed = usize::from(self.feedback.is_some());
        (self.current + revealed).min(self.questions.len())
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = self.answered_count();
        SessionProgress {
            total: self.total_questions(),
            answered,
            remaining: self.total_questions().saturating_sub(answered),
            is_complete: self.is_finished(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// All questions have been stepped through.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Select an option of the current question, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownOption` if `index` is out of range.
    pub fn select(&mut self, index: usize) -> Result<(), QuizError> {
        let available = self.current_question().map_or(0, |q| q.options().len());
        if index >= available {
            return Err(ValidationError::UnknownOption { index: index + 1, available }.into());
        }
        self.selection = Some(index);
        Ok(())
    }

    /// Reveal the current question's hint. Allowed once per question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::HintAlreadyUsed` on a second request.
    pub fn take_hint(&mut self) -> Result<String, QuizError> {
        if self.hint_used {
            return Err(QuizError::HintAlreadyUsed);
        }
        let text = self
            .current_question()
            .map(|q| q.hint_or_default().to_string())
            .ok_or(QuizError::HintAlreadyUsed)?;
        self.hint_used = true;
        Ok(text)
    }

    /// Check the selected option, then update score or lives.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoSelection` if nothing is selected, or
    /// `ValidationError::AlreadyAnswered` if the question was already answered.
    pub fn answer(&mut self) -> Result<&AnswerFeedback, QuizError> {
        if self.feedback.is_some() {
            return Err(ValidationError::AlreadyAnswered.into());
        }
        let question = self
            .questions
            .get(self.current)
            .ok_or(ValidationError::NoSelection)?;
        let chosen = self
            .selection
            .and_then(|idx| question.options().get(idx))
            .ok_or(ValidationError::NoSelection)?
            .clone();

        let correct = question.is_correct(&chosen);
        let feedback = AnswerFeedback {
            correct,
            chosen,
            correct_answer: question.answer().to_string(),
        };

        if correct {
            self.score = self.score.saturating_add(1);
        } else {
            self.lives = self.lives.saturating_sub(1);
        }
        // The hint is no longer offered once the answer is shown.
        self.hint_used = true;

        Ok(self.feedback.insert(feedback))
    }

    /// Move past the revealed question.
    ///
    /// Returns `true` while another question remains.
    pub fn advance(&mut self) -> bool {
        if self.current < self.questions.len() {
            self.current += 1;
        }
        self.selection = None;
        self.hint_used = false;
        self.feedback = None;
        !self.is_finished()
    }

    /// Build the results-log entry for this session.
    ///
    /// # Errors
    ///
    /// Returns `ResultRecordError` if the score does not fit the question count.
    pub fn to_record(&self, player: PlayerName) -> Result<ResultRecord, ResultRecordError> {
        ResultRecord::new(player, self.difficulty, self.score, self.total_u32())
    }

    pub(crate) fn mark_recorded(&mut self) {
        self.recorded = true;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("difficulty", &self.difficulty)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("lives", &self.lives)
            .field("selection", &self.selection)
            .field("recorded", &self.recorded)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
