use std::str::FromStr;

use quiz_core::model::Difficulty;
use services::{QuizAction, Screen};

/// One line of player input, interpreted for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(QuizAction),
    Help,
    Quit,
    Unrecognized(String),
}

/// Map a line typed on `screen` to a command.
///
/// On the name entry screen every line except `:q` is taken as the name,
/// so names such as "Q" or "Max" stay usable. A blank line is passed on as
/// well; the flow then keeps the previous name.
#[must_use]
pub fn parse_command(screen: Screen, line: &str) -> Command {
    let trimmed = line.trim();
    let key = trimmed.to_ascii_lowercase();

    if key == ":q" {
        return Command::Quit;
    }
    if screen == Screen::NameEntry {
        return Command::Action(QuizAction::SubmitName(trimmed.to_string()));
    }

    match key.as_str() {
        "q" | "quit" => return Command::Quit,
        "?" | "help" => return Command::Help,
        "m" | "menu" => return Command::Action(QuizAction::ReturnToMenu),
        _ => {}
    }

    let action = match screen {
        Screen::NameEntry => None,
        Screen::DifficultySelect => parse_difficulty(&key).map(QuizAction::SelectDifficulty),
        Screen::QuestionActive => match key.as_str() {
            "" | "c" | "ok" => Some(QuizAction::ConfirmAnswer),
            "h" | "hint" => Some(QuizAction::RequestHint),
            "l" | "level" => Some(QuizAction::ChangeLevel),
            // Out-of-range numbers still reach the flow so it can explain the range.
            other => other
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .map(|n| QuizAction::SelectOption(n - 1)),
        },
        Screen::AnswerRevealed => match key.as_str() {
            "" | "n" | "next" => Some(QuizAction::Advance),
            "l" | "level" => Some(QuizAction::ChangeLevel),
            _ => None,
        },
        Screen::SessionComplete => match key.as_str() {
            "r" | "retry" => Some(QuizAction::Retry),
            "" => Some(QuizAction::ReturnToMenu),
            _ => None,
        },
        Screen::GameOver => match key.as_str() {
            "" => Some(QuizAction::ReturnToMenu),
            _ => None,
        },
    };

    action.map_or_else(|| Command::Unrecognized(trimmed.to_string()), Command::Action)
}

fn parse_difficulty(key: &str) -> Option<Difficulty> {
    match key {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        other => Difficulty::from_str(other).ok(),
    }
}

/// Key reference for `screen`.
#[must_use]
pub fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::NameEntry => "Type your name and press Enter (blank keeps the last one). :q quits.",
        Screen::DifficultySelect => "1 Easy, 2 Medium, 3 Hard. m back, q quit.",
        Screen::QuestionActive => {
            "1-4 select, Enter confirm, h hint (once per question). l level, m menu, q quit."
        }
        Screen::AnswerRevealed => "Enter for the next question. l level, m menu, q quit.",
        Screen::SessionComplete => "r try again, Enter or m back to menu, q quit.",
        Screen::GameOver => "Enter or m back to menu, q quit.",
    }
}
