use quiz_core::model::ScoreBand;
use services::{QuizSnapshot, Screen};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalScoreVm {
    pub headline: String,
    pub score_line: String,
    pub band: ScoreBand,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverVm {
    pub headline: String,
    /// Feedback for the answer that cost the last life.
    pub feedback: Option<String>,
    pub message: String,
    pub score_line: String,
}

fn player(snapshot: &QuizSnapshot) -> &str {
    snapshot.player_name.as_deref().unwrap_or("Player")
}

fn score_line(snapshot: &QuizSnapshot) -> String {
    format!("Your Score: {}/{}", snapshot.score, snapshot.total)
}

#[must_use]
pub fn map_final_score(snapshot: &QuizSnapshot) -> Option<FinalScoreVm> {
    if snapshot.screen != Screen::SessionComplete {
        return None;
    }
    let band = snapshot
        .band
        .unwrap_or_else(|| ScoreBand::from_score(snapshot.score, snapshot.total));
    let tier = snapshot.difficulty.map_or("", |d| d.label());

    Some(FinalScoreVm {
        headline: format!("{}, you finished the {tier} quiz!", player(snapshot)),
        score_line: score_line(snapshot),
        band,
        message: band.message(),
    })
}

#[must_use]
pub fn map_game_over(snapshot: &QuizSnapshot) -> Option<GameOverVm> {
    if snapshot.screen != Screen::GameOver {
        return None;
    }
    Some(GameOverVm {
        headline: "Game Over".to_string(),
        feedback: snapshot.feedback.as_ref().map(|f| f.message()),
        message: format!("You ran out of lives, {}!", player(snapshot)),
        score_line: score_line(snapshot),
    })
}
