use thiserror::Error;

use crate::model::{Difficulty, PlayerName, ScoreBand};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResultRecordError {
    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Outcome of one play-through, appended once to the results log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    player: PlayerName,
    difficulty: Difficulty,
    score: u32,
    total_questions: u32,
}

impl ResultRecord {
    /// # Errors
    ///
    /// Returns `ResultRecordError::ScoreExceedsTotal` if `score > total_questions`.
    pub fn new(
        player: PlayerName,
        difficulty: Difficulty,
        score: u32,
        total_questions: u32,
    ) -> Result<Self, ResultRecordError> {
        if score > total_questions {
            return Err(ResultRecordError::ScoreExceedsTotal {
                score,
                total: total_questions,
            });
        }
        Ok(Self {
            player,
            difficulty,
            score,
            total_questions,
        })
    }

    #[must_use]
    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score, self.total_questions)
    }
}
