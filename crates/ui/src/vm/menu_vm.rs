use quiz_core::model::Difficulty;
use services::QuizSnapshot;

pub const APP_TITLE: &str = "Cat Quiz Adventure";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntryVm {
    pub title: String,
    pub prompt: String,
    /// Last accepted name, offered again after returning to the menu.
    pub prefill: Option<String>,
}

#[must_use]
pub fn map_name_entry(snapshot: &QuizSnapshot) -> NameEntryVm {
    NameEntryVm {
        title: format!("Welcome to {APP_TITLE}!"),
        prompt: "Enter your name:".to_string(),
        prefill: snapshot.player_name.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyChoiceVm {
    /// One-based menu key.
    pub key: usize,
    pub label: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyMenuVm {
    pub greeting: String,
    pub prompt: String,
    pub choices: Vec<DifficultyChoiceVm>,
}

#[must_use]
pub fn map_difficulty_menu(snapshot: &QuizSnapshot) -> DifficultyMenuVm {
    let greeting = match snapshot.player_name.as_deref() {
        Some(name) => format!("Hi {name}!"),
        None => "Hi!".to_string(),
    };
    let choices = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| DifficultyChoiceVm {
            key: i + 1,
            label: difficulty.label(),
            difficulty,
        })
        .collect();

    DifficultyMenuVm {
        greeting,
        prompt: "Choose your difficulty level:".to_string(),
        choices,
    }
}
