use quiz_core::model::{Difficulty, Question, ResultRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("malformed data: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("lock poisoned: {0}")]
    Poisoned(String),
}

/// Read-only source of questions per difficulty tier.
pub trait QuizRepository: Send + Sync {
    /// Load every question stored for `tier`, in stored order.
    ///
    /// A tier with no stored questions yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the backing source is missing, or
    /// `StorageError::Malformed` if it cannot be parsed into valid questions.
    fn load_questions(&self, tier: Difficulty) -> Result<Vec<Question>, StorageError>;
}

/// Append-only log of finished sessions.
pub trait ResultsLog: Send + Sync {
    /// Append one record. Calling twice writes two rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn append(&self, record: &ResultRecord) -> Result<(), StorageError>;
}

/// In-memory question bank for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    questions: Arc<Mutex<HashMap<Difficulty, Vec<Question>>>>,
}

impl InMemoryQuizRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the questions stored for `tier`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if the lock is poisoned.
    pub fn insert_tier(&self, tier: Difficulty, questions: Vec<Question>) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.insert(tier, questions);
        Ok(())
    }
}

impl QuizRepository for InMemoryQuizRepository {
    fn load_questions(&self, tier: Difficulty) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.get(&tier).cloned().unwrap_or_default())
    }
}

/// In-memory results log for testing.
#[derive(Clone, Default)]
pub struct InMemoryResultsLog {
    records: Arc<Mutex<Vec<ResultRecord>>>,
}

impl InMemoryResultsLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Poisoned` if the lock is poisoned.
    pub fn records(&self) -> Result<Vec<ResultRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }
}

impl ResultsLog for InMemoryResultsLog {
    fn append(&self, record: &ResultRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.push(record.clone());
        Ok(())
    }
}

/// Aggregates the question bank and results log behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuizRepository>,
    pub results: Arc<dyn ResultsLog>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(questions: InMemoryQuizRepository, results: InMemoryResultsLog) -> Self {
        Self {
            questions: Arc::new(questions),
            results: Arc::new(results),
        }
    }
}
