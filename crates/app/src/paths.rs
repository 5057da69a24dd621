use std::fmt;
use std::path::{Path, PathBuf};

pub const QUESTION_BANK_FILE: &str = "quiz_level.json";
pub const RESULTS_FILE: &str = "quiz_results.csv";

#[derive(Debug)]
pub enum PathsError {
    QuestionBankNotFound { searched: Vec<PathBuf> },
}

impl fmt::Display for PathsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathsError::QuestionBankNotFound { searched } => {
                write!(f, "could not find {QUESTION_BANK_FILE} in any of:")?;
                for dir in searched {
                    write!(f, "\n  {}", dir.display())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PathsError {}

/// Locations of the question bank and the results log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub questions: PathBuf,
    pub results: PathBuf,
}

impl AppPaths {
    /// Search the executable's directory, the working directory, then the
    /// bundled `data/` directory.
    pub fn resolve() -> Result<Self, PathsError> {
        let mut candidates = Vec::new();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir);
        }
        if let Ok(dir) = std::env::current_dir() {
            candidates.push(dir);
        }
        candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        Self::resolve_from(&candidates)
    }

    /// The first candidate holding a question bank wins; the results log sits beside it.
    pub fn resolve_from(candidates: &[PathBuf]) -> Result<Self, PathsError> {
        candidates
            .iter()
            .find(|dir| dir.join(QUESTION_BANK_FILE).is_file())
            .map(|dir| Self {
                questions: dir.join(QUESTION_BANK_FILE),
                results: dir.join(RESULTS_FILE),
            })
            .ok_or_else(|| PathsError::QuestionBankNotFound {
                searched: candidates.to_vec(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn first_directory_with_a_bank_wins() {
        let empty = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join(QUESTION_BANK_FILE), "{}").unwrap();
        fs::write(second.path().join(QUESTION_BANK_FILE), "{}").unwrap();

        let paths = AppPaths::resolve_from(&[
            empty.path().to_path_buf(),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ])
        .unwrap();

        assert_eq!(paths.questions, first.path().join(QUESTION_BANK_FILE));
        assert_eq!(paths.results, first.path().join(RESULTS_FILE));
    }

    #[test]
    fn missing_bank_lists_searched_directories() {
        let empty = tempfile::tempdir().unwrap();
        let err = AppPaths::resolve_from(&[empty.path().to_path_buf()]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(QUESTION_BANK_FILE));
        assert!(message.contains(&empty.path().display().to_string()));
    }

    #[test]
    fn bundled_bank_is_found() {
        let paths = AppPaths::resolve_from(&[Path::new(env!("CARGO_MANIFEST_DIR")).join("data")])
            .unwrap();
        assert!(paths.questions.is_file());
    }
}
