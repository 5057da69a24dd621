use std::io::{self, Write};

use services::{QuizError, QuizEvent, QuizSnapshot, Screen};

use crate::input::help_text;
use crate::renderer::Renderer;
use crate::vm::{
    map_difficulty_menu, map_final_score, map_game_over, map_name_entry, map_question_screen,
};

/// Line-oriented renderer for an interactive terminal.
///
/// Write failures are logged and otherwise ignored; the quiz keeps running.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Echo input that no key on `screen` maps to.
    pub fn unrecognized(&mut self, screen: Screen, raw: &str) {
        let result = writeln!(self.out, "Unknown input {raw:?}. {}", help_text(screen))
            .and_then(|()| self.out.flush());
        log_write_error(result);
    }

    pub fn help(&mut self, screen: Screen) {
        let result = writeln!(self.out, "{}", help_text(screen)).and_then(|()| self.out.flush());
        log_write_error(result);
    }

    fn draw(&mut self, snapshot: &QuizSnapshot) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        match snapshot.screen {
            Screen::NameEntry => {
                let vm = map_name_entry(snapshot);
                writeln!(out, "{}", vm.title)?;
                match vm.prefill {
                    Some(name) => writeln!(out, "{} [{name}]", vm.prompt)?,
                    None => writeln!(out, "{}", vm.prompt)?,
                }
            }
            Screen::DifficultySelect => {
                let vm = map_difficulty_menu(snapshot);
                writeln!(out, "{}", vm.greeting)?;
                writeln!(out, "{}", vm.prompt)?;
                for choice in &vm.choices {
                    writeln!(out, "  {}) {}", choice.key, choice.label)?;
                }
            }
            Screen::QuestionActive | Screen::AnswerRevealed => {
                if let Some(vm) = map_question_screen(snapshot) {
                    writeln!(out, "{}  {}  {}", vm.progress_label, vm.score_label, vm.hearts)?;
                    writeln!(out, "{}", vm.title)?;
                    for option in &vm.options {
                        let marker = if option.is_answer {
                            '✓'
                        } else if option.selected {
                            '>'
                        } else {
                            ' '
                        };
                        writeln!(out, " {marker} {}) {}", option.key, option.text)?;
                    }
                    if let Some(feedback) = &vm.feedback {
                        writeln!(out, "{feedback}")?;
                    }
                    if vm.hint_enabled {
                        writeln!(out, "(h for a hint)")?;
                    }
                }
            }
            Screen::SessionComplete => {
                if let Some(vm) = map_final_score(snapshot) {
                    writeln!(out, "{}", vm.headline)?;
                    writeln!(out, "{}", vm.score_line)?;
                    writeln!(out, "{}", vm.message)?;
                }
            }
            Screen::GameOver => {
                if let Some(vm) = map_game_over(snapshot) {
                    if let Some(feedback) = &vm.feedback {
                        writeln!(out, "{feedback}")?;
                    }
                    writeln!(out, "{}", vm.headline)?;
                    writeln!(out, "{}", vm.message)?;
                    writeln!(out, "{}", vm.score_line)?;
                }
            }
        }
        write!(out, "{}\n> ", help_text(snapshot.screen))?;
        out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &QuizSnapshot) {
        let result = self.draw(snapshot);
        log_write_error(result);
    }

    fn notify(&mut self, event: &QuizEvent) {
        let result = match event {
            QuizEvent::HintShown { text } => writeln!(self.out, "Hint: {text}"),
            QuizEvent::ResultNotSaved { reason } => {
                writeln!(self.out, "Your result could not be saved: {reason}")
            }
            _ => Ok(()),
        };
        log_write_error(result);
    }

    fn report_error(&mut self, error: &QuizError) {
        let result = writeln!(self.out, "{error}");
        log_write_error(result);
    }
}

fn log_write_error(result: io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!(error = %err, "Failed to write to terminal");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::{Difficulty, Question};
    use services::{QuizAction, QuizFlow, QuizRules};
    use storage::repository::{InMemoryQuizRepository, InMemoryResultsLog};

    use super::*;
    use crate::controller::QuizController;

    fn transcript(actions: Vec<QuizAction>) -> String {
        transcript_with_lives(10, actions)
    }

    fn transcript_with_lives(max_lives: u32, actions: Vec<QuizAction>) -> String {
        let repo = InMemoryQuizRepository::new();
        let question = Question::new(
            "What do cats say?",
            ["Meow", "Woof", "Moo", "Quack"].map(String::from).to_vec(),
            "Meow",
            Some("Not a dog".into()),
        )
        .unwrap();
        repo.insert_tier(Difficulty::Easy, vec![question]).unwrap();
        let flow = QuizFlow::new(Arc::new(repo), Arc::new(InMemoryResultsLog::new()))
            .with_seed(1)
            .with_rules(QuizRules {
                question_limit: 10,
                max_lives,
            });

        let mut controller = QuizController::new(flow, TerminalRenderer::new(Vec::new()));
        controller.start();
        for action in actions {
            controller.handle(action);
        }
        let (_, renderer) = controller.into_parts();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn renders_menus() {
        let out = transcript(vec![QuizAction::SubmitName("Mochi".into())]);
        assert!(out.contains("Welcome to Cat Quiz Adventure!"));
        assert!(out.contains("Hi Mochi!"));
        assert!(out.contains("  3) Hard"));
    }

    #[test]
    fn renders_question_hint_and_errors() {
        let out = transcript(vec![
            QuizAction::SubmitName("Mochi".into()),
            QuizAction::SelectDifficulty(Difficulty::Easy),
            QuizAction::RequestHint,
            QuizAction::RequestHint,
            QuizAction::ConfirmAnswer,
        ]);
        assert!(out.contains("Q1: What do cats say?"));
        assert!(out.contains("1/1"));
        assert!(out.contains("Hint: Not a dog"));
        assert!(out.contains("already been shown"));
        assert!(out.contains("Please select an option before continuing."));
    }

    #[test]
    fn renders_final_score() {
        let repo_answer = transcript(vec![
            QuizAction::SubmitName("Mochi".into()),
            QuizAction::SelectDifficulty(Difficulty::Easy),
        ]);
        let key = meow_key(&repo_answer);

        let out = transcript(vec![
            QuizAction::SubmitName("Mochi".into()),
            QuizAction::SelectDifficulty(Difficulty::Easy),
            QuizAction::SelectOption(key - 1),
            QuizAction::ConfirmAnswer,
            QuizAction::Advance,
        ]);
        assert!(out.contains("Correct!"));
        assert!(out.contains("Mochi, you finished the Easy quiz!"));
        assert!(out.contains("Your Score: 1/1"));
        assert!(out.contains("Excellent! Perfect score!"));
    }

    fn meow_key(out: &str) -> usize {
        out.lines()
            .find_map(|line| line.strip_suffix(") Meow"))
            .and_then(|prefix| prefix.trim().parse::<usize>().ok())
            .unwrap()
    }

    #[test]
    fn game_over_shows_the_final_feedback() {
        let opening = transcript(vec![
            QuizAction::SubmitName("Mochi".into()),
            QuizAction::SelectDifficulty(Difficulty::Easy),
        ]);
        let wrong = if meow_key(&opening) == 1 { 2 } else { 1 };

        let out = transcript_with_lives(
            1,
            vec![
                QuizAction::SubmitName("Mochi".into()),
                QuizAction::SelectDifficulty(Difficulty::Easy),
                QuizAction::SelectOption(wrong - 1),
                QuizAction::ConfirmAnswer,
            ],
        );
        // The answer screen is skipped, so the feedback can only come from game over.
        assert!(!out.contains("Enter for the next question"));
        assert!(out.contains("Incorrect! Correct: Meow\nGame Over"));
        assert!(out.contains("You ran out of lives, Mochi!"));
    }

    #[test]
    fn blank_line_accepts_the_prefilled_name() {
        let out = transcript(vec![
            QuizAction::SubmitName("Mochi".into()),
            QuizAction::ReturnToMenu,
        ]);
        assert!(out.contains("Enter your name: [Mochi]"));

        let repo = InMemoryQuizRepository::new();
        let flow = QuizFlow::new(Arc::new(repo), Arc::new(InMemoryResultsLog::new()));
        let mut controller = QuizController::new(flow, TerminalRenderer::new(Vec::new()));
        controller.handle(QuizAction::SubmitName("Mochi".into()));
        controller.handle(QuizAction::ReturnToMenu);

        let command = crate::input::parse_command(controller.screen(), "");
        let crate::input::Command::Action(action) = command else {
            panic!("blank name entry should be an action");
        };
        assert!(controller.handle(action));
        assert_eq!(controller.screen(), Screen::DifficultySelect);
        assert_eq!(controller.snapshot().player_name.as_deref(), Some("Mochi"));
    }
}
