use services::{QuizSnapshot, Screen};

const FULL_HEART: &str = "❤️";
const EMPTY_HEART: &str = "🤍";

/// One answer button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    /// One-based key the player presses.
    pub key: usize,
    pub text: String,
    pub selected: bool,
    /// Set once the answer is revealed.
    pub is_answer: bool,
}

/// Everything drawn on the question and answer screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub title: String,
    pub options: Vec<OptionVm>,
    pub hearts: String,
    pub lives_label: String,
    pub score_label: String,
    pub progress_label: String,
    pub feedback: Option<String>,
    pub feedback_correct: Option<bool>,
    pub hint_enabled: bool,
    pub options_enabled: bool,
    pub revealed: bool,
}

/// Full hearts for remaining lives, empty ones for lost lives.
#[must_use]
pub fn format_hearts(lives: u32, max_lives: u32) -> String {
    let full = lives.min(max_lives) as usize;
    let empty = max_lives.saturating_sub(lives) as usize;
    let mut out = FULL_HEART.repeat(full);
    out.push_str(&EMPTY_HEART.repeat(empty));
    out
}

/// Map the question and answer screens; `None` everywhere else.
#[must_use]
pub fn map_question_screen(snapshot: &QuizSnapshot) -> Option<QuestionScreenVm> {
    if !matches!(
        snapshot.screen,
        Screen::QuestionActive | Screen::AnswerRevealed
    ) {
        return None;
    }
    let question = snapshot.question.as_ref()?;
    let revealed = snapshot.screen == Screen::AnswerRevealed;
    let correct_answer = snapshot
        .feedback
        .as_ref()
        .map(|feedback| feedback.correct_answer.as_str());

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| OptionVm {
            key: i + 1,
            text: text.clone(),
            selected: question.selected == Some(i),
            is_answer: revealed && correct_answer == Some(text.as_str()),
        })
        .collect();

    Some(QuestionScreenVm {
        title: format!("Q{}: {}", question.number, question.text),
        options,
        hearts: format_hearts(snapshot.lives, snapshot.max_lives),
        lives_label: format!("Lives: {}/{}", snapshot.lives, snapshot.max_lives),
        score_label: format!("Score: {}", snapshot.score),
        progress_label: format!("{}/{}", question.number, snapshot.total),
        feedback: snapshot.feedback.as_ref().map(|f| f.message()),
        feedback_correct: snapshot.feedback.as_ref().map(|f| f.correct),
        hint_enabled: snapshot.hint_enabled,
        options_enabled: snapshot.options_enabled,
        revealed,
    })
}
