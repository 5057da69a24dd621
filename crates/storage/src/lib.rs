#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::{CsvResultsLog, JsonQuizRepository};
pub use repository::{
    InMemoryQuizRepository, InMemoryResultsLog, QuizRepository, ResultsLog, Storage, StorageError,
};
