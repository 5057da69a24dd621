use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Difficulty, Question};

/// Default number of questions asked per session.
pub const DEFAULT_QUESTION_LIMIT: usize = 10;

/// Default number of mistakes allowed per session.
pub const DEFAULT_MAX_LIVES: u32 = 10;

/// Game rules applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRules {
    pub question_limit: usize,
    pub max_lives: u32,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            question_limit: DEFAULT_QUESTION_LIMIT,
            max_lives: DEFAULT_MAX_LIVES,
        }
    }
}

/// Questions selected for a session, already in play order.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub available: usize,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Builds a session by truncating the tier's pool and shuffling it.
pub struct SessionBuilder {
    difficulty: Difficulty,
    limit: usize,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            limit: DEFAULT_QUESTION_LIMIT,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Build a plan from the questions stored for the tier.
    ///
    /// - keeps the first `limit` questions in stored order
    /// - shuffles the kept questions uniformly
    /// - shuffles each question's options independently
    pub fn build<R: Rng + ?Sized>(self, pool: Vec<Question>, rng: &mut R) -> SessionPlan {
        let available = pool.len();
        let mut questions = pool;
        questions.truncate(self.limit);

        questions.as_mut_slice().shuffle(rng);
        for question in &mut questions {
            question.shuffle_options(rng);
        }

        SessionPlan {
            difficulty: self.difficulty,
            questions,
            available,
        }
    }
}
