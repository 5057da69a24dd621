use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Fallback text shown when a question has no hint.
pub const NO_HINT: &str = "No hint available.";

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("expected {OPTION_COUNT} options, found {len}")]
    OptionCount { len: usize },

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question.
///
/// The answer always matches one of the options verbatim. Options may be
/// reordered but never edited, so the invariant holds for the lifetime of
/// the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    answer: String,
    hint: Option<String>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank text,
    /// `QuestionError::OptionCount` unless exactly four options are given, and
    /// `QuestionError::AnswerNotInOptions` if the answer is not an exact option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount { len: options.len() });
        }
        let answer = answer.into();
        if !options.iter().any(|option| option == &answer) {
            return Err(QuestionError::AnswerNotInOptions { answer });
        }

        Ok(Self {
            text,
            options,
            answer,
            hint: hint.filter(|h| !h.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Hint text, or the fallback message when the question has none.
    #[must_use]
    pub fn hint_or_default(&self) -> &str {
        self.hint().unwrap_or(NO_HINT)
    }

    /// Exact, case-sensitive comparison against the answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }

    /// Reorder the options with a uniform random permutation.
    pub fn shuffle_options<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.options.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn options() -> Vec<String> {
        ["Lion", "Tiger", "Cat", "Dog"].map(String::from).to_vec()
    }

    #[test]
    fn builds_valid_question() {
        let q = Question::new("Which one meows?", options(), "Cat", None).unwrap();
        assert_eq!(q.answer(), "Cat");
        assert!(q.is_correct("Cat"));
        assert!(!q.is_correct("cat"));
        assert_eq!(q.hint_or_default(), NO_HINT);
    }

    #[test]
    fn rejects_answer_outside_options() {
        let err = Question::new("Which one meows?", options(), "Cow", None).unwrap_err();
        assert!(matches!(err, QuestionError::AnswerNotInOptions { .. }));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let err = Question::new("Q", vec!["a".into(), "b".into()], "a", None).unwrap_err();
        assert_eq!(err, QuestionError::OptionCount { len: 2 });
    }

    #[test]
    fn rejects_blank_text() {
        let err = Question::new("  ", options(), "Cat", None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn blank_hint_is_treated_as_missing() {
        let q = Question::new("Q", options(), "Cat", Some("  ".into())).unwrap();
        assert_eq!(q.hint(), None);
    }

    #[test]
    fn shuffle_keeps_the_same_options() {
        let mut q = Question::new("Q", options(), "Cat", Some("purrs".into())).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        q.shuffle_options(&mut rng);

        let mut shuffled = q.options().to_vec();
        shuffled.sort();
        let mut original = options();
        original.sort();
        assert_eq!(shuffled, original);
        assert!(q.options().iter().any(|o| o == q.answer()));
    }
}
