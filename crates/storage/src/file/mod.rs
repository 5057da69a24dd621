use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::{QuizRepository, ResultsLog, Storage};

mod mapping;
mod question_bank_repo;
mod results_csv_repo;

pub use mapping::RESULTS_HEADER;
pub use question_bank_repo::JsonQuizRepository;
pub use results_csv_repo::CsvResultsLog;

impl Storage {
    /// Build a `Storage` backed by a JSON question bank and a CSV results log.
    ///
    /// Nothing is touched on disk until the first load or append.
    #[must_use]
    pub fn files(questions_path: impl Into<PathBuf>, results_path: impl Into<PathBuf>) -> Self {
        let questions: Arc<dyn QuizRepository> = Arc::new(JsonQuizRepository::new(questions_path));
        let results: Arc<dyn ResultsLog> = Arc::new(CsvResultsLog::new(results_path));
        Self { questions, results }
    }
}
