use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use quiz_core::model::{Difficulty, Question};

use super::mapping::QuestionBankDocument;
use crate::repository::{QuizRepository, StorageError};

/// Question bank backed by a JSON document keyed by tier.
///
/// The file is read on every load so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonQuizRepository {
    path: PathBuf,
}

impl JsonQuizRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<QuestionBankDocument, StorageError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(self.path.display().to_string()),
            _ => StorageError::Io(e),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            StorageError::Malformed(format!("{}: {e}", self.path.display()))
        })
    }
}

impl QuizRepository for JsonQuizRepository {
    fn load_questions(&self, tier: Difficulty) -> Result<Vec<Question>, StorageError> {
        let records = self.read_document()?.into_tier(tier);
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                record.into_question().map_err(|e| {
                    StorageError::Malformed(format!("{} question #{}: {e}", tier.key(), idx + 1))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            tier = tier.key(),
            count = questions.len(),
            path = %self.path.display(),
            "Loaded questions"
        );
        Ok(questions)
    }
}
