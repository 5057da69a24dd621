use quiz_core::model::{Difficulty, Question, QuestionError, ResultRecord};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Column names of the results log, written once at the top of the file.
pub const RESULTS_HEADER: [&str; 4] = ["Name", "Difficulty", "Score", "TotalItems"];

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Persisted shape of the question bank document.
///
/// Tiers missing from the document deserialize as empty lists; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionBankDocument {
    #[serde(default)]
    easy: Vec<QuestionRecord>,
    #[serde(default)]
    medium: Vec<QuestionRecord>,
    #[serde(default)]
    hard: Vec<QuestionRecord>,
}

impl QuestionBankDocument {
    pub(crate) fn into_tier(self, tier: Difficulty) -> Vec<QuestionRecord> {
        match tier {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Persisted shape of a single question entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuestionRecord {
    question: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    hint: Option<String>,
}

impl QuestionRecord {
    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the entry breaks a question invariant.
    pub(crate) fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(self.question, self.options, self.answer, self.hint)
    }
}

/// One data row of the results log.
#[derive(Debug, Serialize)]
pub(crate) struct ResultRow<'a> {
    name: &'a str,
    difficulty: &'static str,
    score: u32,
    total_items: u32,
}

impl<'a> ResultRow<'a> {
    pub(crate) fn from_record(record: &'a ResultRecord) -> Self {
        Self {
            name: record.player().as_str(),
            difficulty: record.difficulty().label(),
            score: record.score(),
            total_items: record.total_questions(),
        }
    }
}
