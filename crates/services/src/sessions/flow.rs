use std::fmt;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{Difficulty, PlayerName, ScoreBand};
use storage::repository::{QuizRepository, ResultsLog, Storage};

use super::events::{AnswerFeedback, QuizAction, QuizEvent};
use super::plan::{QuizRules, SessionBuilder};
use super::session::QuizSession;
use super::view::{QuestionView, QuizSnapshot, Screen};
use crate::error::{QuizError, ValidationError};

/// The quiz state machine.
///
/// Owns the current screen, the player's name and the active session, and
/// applies every transition synchronously. Renderers drive it through
/// [`QuizFlow::dispatch`] and read it back through [`QuizFlow::snapshot`].
pub struct QuizFlow {
    questions: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultsLog>,
    rules: QuizRules,
    rng: StdRng,
    screen: Screen,
    player: Option<PlayerName>,
    session: Option<QuizSession>,
    events: Vec<QuizEvent>,
}

impl QuizFlow {
    #[must_use]
    pub fn new(questions: Arc<dyn QuizRepository>, results: Arc<dyn ResultsLog>) -> Self {
        Self {
            questions,
            results,
            rules: QuizRules::default(),
            rng: StdRng::from_os_rng(),
            screen: Screen::NameEntry,
            player: None,
            session: None,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(Arc::clone(&storage.questions), Arc::clone(&storage.results))
    }

    #[must_use]
    pub fn with_rules(mut self, rules: QuizRules) -> Self {
        self.rules = rules;
        self
    }

    /// Use a deterministic shuffle source.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn rules(&self) -> QuizRules {
        self.rules
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Drain the events queued by earlier transitions.
    pub fn take_events(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one user action and return the events it produced.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the action is rejected; the state is unchanged.
    pub fn dispatch(&mut self, action: QuizAction) -> Result<Vec<QuizEvent>, QuizError> {
        tracing::debug!(screen = %self.screen, action = ?action, "Quiz action received");
        let result = match action {
            QuizAction::SubmitName(name) => self.submit_name(&name),
            QuizAction::SelectDifficulty(tier) => self.select_difficulty(tier),
            QuizAction::SelectOption(index) => self.select_option(index),
            QuizAction::RequestHint => self.request_hint().map(|_| ()),
            QuizAction::ConfirmAnswer => self.confirm_answer().map(|_| ()),
            QuizAction::Advance => self.advance(),
            QuizAction::Retry => self.retry(),
            QuizAction::ChangeLevel => self.change_level(),
            QuizAction::ReturnToMenu => self.return_to_menu(),
        };
        let events = self.take_events();
        result.map(|()| events)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// `NameEntry → DifficultySelect`.
    ///
    /// A blank entry keeps the name from the previous round, if there is one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name with nothing to keep.
    pub fn submit_name(&mut self, raw: &str) -> Result<(), QuizError> {
        self.require(&[Screen::NameEntry], "submit a name")?;
        let name = match PlayerName::parse(raw) {
            Ok(name) => name,
            Err(_) => self.player.clone().ok_or(ValidationError::EmptyName)?,
        };
        self.player = Some(name);
        self.set_screen(Screen::DifficultySelect);
        Ok(())
    }

    /// `DifficultySelect → QuestionActive` with a freshly shuffled session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataUnavailable` if the tier has no usable questions.
    pub fn select_difficulty(&mut self, tier: Difficulty) -> Result<(), QuizError> {
        self.require(&[Screen::DifficultySelect], "select a difficulty")?;
        self.start_session(tier)
    }

    /// Select an option of the current question.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownOption` if `index` is out of range.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        let session = self.active_session(&[Screen::QuestionActive], "select an option")?;
        session.select(index)?;
        self.events.push(QuizEvent::OptionSelected { index });
        Ok(())
    }

    /// Reveal the hint for the current question, once.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::HintAlreadyUsed` on a repeated request.
    pub fn request_hint(&mut self) -> Result<String, QuizError> {
        let session = self.active_session(&[Screen::QuestionActive], "request a hint")?;
        let text = session.take_hint()?;
        self.events.push(QuizEvent::HintShown { text: text.clone() });
        Ok(text)
    }

    /// `QuestionActive → AnswerRevealed`, or straight to `GameOver` when the
    /// last life is lost.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoSelection` if no option is selected.
    pub fn confirm_answer(&mut self) -> Result<AnswerFeedback, QuizError> {
        let session = self.active_session(&[Screen::QuestionActive], "confirm an answer")?;
        let feedback = session.answer()?.clone();
        let lives = session.lives();
        let out_of_lives = session.is_out_of_lives();

        if feedback.correct {
            self.events.push(QuizEvent::AnsweredCorrectly);
        } else {
            self.events.push(QuizEvent::AnsweredIncorrectly {
                correct_answer: feedback.correct_answer.clone(),
            });
            self.events.push(QuizEvent::LifeLost { remaining: lives });
        }

        if out_of_lives {
            self.set_screen(Screen::GameOver);
            self.record_result();
        } else {
            self.set_screen(Screen::AnswerRevealed);
        }
        Ok(feedback)
    }

    /// `AnswerRevealed → QuestionActive`, or `SessionComplete` after the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidAction` unless an answer is revealed.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        let session = self.active_session(&[Screen::AnswerRevealed], "advance")?;
        if session.advance() {
            self.set_screen(Screen::QuestionActive);
        } else {
            self.set_screen(Screen::SessionComplete);
            self.record_result();
        }
        Ok(())
    }

    /// Replay the finished tier with a fresh shuffle.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataUnavailable` if the tier can no longer be loaded.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        let tier = self
            .active_session(&[Screen::SessionComplete], "retry")?
            .difficulty();
        self.start_session(tier)
    }

    /// Leave the running session for the difficulty menu, keeping the name.
    ///
    /// Partial progress is recorded the same way as [`QuizFlow::return_to_menu`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidAction` unless a question or answer is on screen.
    pub fn change_level(&mut self) -> Result<(), QuizError> {
        self.require(
            &[Screen::QuestionActive, Screen::AnswerRevealed],
            "change the level",
        )?;
        self.close_session();
        self.set_screen(Screen::DifficultySelect);
        Ok(())
    }

    /// Abandon whatever is on screen and go back to name entry.
    ///
    /// A session that has not been recorded yet is recorded first, so partial
    /// progress lands in the results log. The player's name is kept.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches the other transitions.
    pub fn return_to_menu(&mut self) -> Result<(), QuizError> {
        if self.screen == Screen::NameEntry {
            return Ok(());
        }
        self.close_session();
        self.set_screen(Screen::NameEntry);
        Ok(())
    }

    //
    // ─── SNAPSHOT ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let player_name = self.player.as_ref().map(|p| p.as_str().to_string());
        let Some(session) = self.session.as_ref() else {
            return QuizSnapshot {
                screen: self.screen,
                player_name,
                difficulty: None,
                question: None,
                score: 0,
                total: 0,
                lives: self.rules.max_lives,
                max_lives: self.rules.max_lives,
                progress: Default::default(),
                feedback: None,
                hint_enabled: false,
                options_enabled: false,
                band: None,
            };
        };

        let in_question = matches!(self.screen, Screen::QuestionActive | Screen::AnswerRevealed);
        let question = session
            .current_question()
            .filter(|_| in_question)
            .map(|q| QuestionView {
                number: session.current_index() + 1,
                text: q.text().to_string(),
                options: q.options().to_vec(),
                selected: session.selection(),
            });
        let active = self.screen == Screen::QuestionActive;
        let band = (self.screen == Screen::SessionComplete)
            .then(|| ScoreBand::from_score(session.score(), session.total_u32()));

        QuizSnapshot {
            screen: self.screen,
            player_name,
            difficulty: Some(session.difficulty()),
            question,
            score: session.score(),
            total: session.total_u32(),
            lives: session.lives(),
            max_lives: session.max_lives(),
            progress: session.progress(),
            feedback: session.feedback().cloned(),
            hint_enabled: active && !session.hint_used(),
            options_enabled: active,
            band,
        }
    }

    //
    // ─── HELPERS ───────────────────────────────────────────────────────────────
    //

    fn require(&self, allowed: &[Screen], action: &'static str) -> Result<(), QuizError> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            Err(QuizError::InvalidAction {
                action,
                screen: self.screen,
            })
        }
    }

    fn active_session(
        &mut self,
        allowed: &[Screen],
        action: &'static str,
    ) -> Result<&mut QuizSession, QuizError> {
        self.require(allowed, action)?;
        let screen = self.screen;
        self.session
            .as_mut()
            .ok_or(QuizError::InvalidAction { action, screen })
    }

    fn start_session(&mut self, tier: Difficulty) -> Result<(), QuizError> {
        let pool = self.questions.load_questions(tier).map_err(|e| {
            tracing::warn!(tier = tier.key(), error = %e, "Question data unavailable");
            QuizError::DataUnavailable {
                tier,
                reason: e.to_string(),
            }
        })?;

        let plan = SessionBuilder::new(tier)
            .with_limit(self.rules.question_limit)
            .build(pool, &mut self.rng);
        let available = plan.available;
        let session = QuizSession::new(plan, self.rules.max_lives).inspect_err(|e| {
            tracing::warn!(tier = tier.key(), error = %e, "Question data unavailable");
        })?;

        tracing::info!(
            tier = tier.key(),
            questions = session.total_questions(),
            available,
            "Quiz session started"
        );
        self.session = Some(session);
        self.set_screen(Screen::QuestionActive);
        Ok(())
    }

    /// Record the session if it still owes a row, then drop it.
    fn close_session(&mut self) {
        let unrecorded = self
            .session
            .as_ref()
            .is_some_and(|s| !s.is_recorded() && s.total_questions() > 0);
        if unrecorded {
            self.record_result();
        }
        self.session = None;
    }

    /// Append the active session to the results log, at most once.
    ///
    /// Write failures are logged and reported as an event; the flow carries on.
    fn record_result(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_recorded() {
            return;
        }
        session.mark_recorded();

        let Some(player) = self.player.clone() else {
            tracing::warn!("Session finished without a player name; result not recorded");
            return;
        };

        let outcome = session
            .to_record(player)
            .map_err(|e| e.to_string())
            .and_then(|record| {
                self.results
                    .append(&record)
                    .map(|()| record)
                    .map_err(|e| e.to_string())
            });

        match outcome {
            Ok(record) => {
                tracing::info!(
                    player = record.player().as_str(),
                    tier = record.difficulty().key(),
                    score = record.score(),
                    total = record.total_questions(),
                    "Quiz result recorded"
                );
                self.events.push(QuizEvent::ResultRecorded);
            }
            Err(reason) => {
                tracing::warn!(error = %reason, "Failed to record quiz result");
                self.events.push(QuizEvent::ResultNotSaved { reason });
            }
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = %self.screen, to = %screen, "Screen changed");
        }
        self.screen = screen;
        self.events.push(QuizEvent::ScreenChanged(screen));
    }
}

impl fmt::Debug for QuizFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizFlow")
            .field("screen", &self.screen)
            .field("player", &self.player)
            .field("session", &self.session)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
