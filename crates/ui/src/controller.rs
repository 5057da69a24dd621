use services::{QuizAction, QuizError, QuizFlow, QuizSnapshot, Screen};

use crate::renderer::Renderer;

/// Couples a [`QuizFlow`] with a [`Renderer`].
///
/// Every action is dispatched, its events forwarded, any rejection reported,
/// and the resulting screen redrawn. Errors never escape to the caller.
pub struct QuizController<R: Renderer> {
    flow: QuizFlow,
    renderer: R,
}

impl<R: Renderer> QuizController<R> {
    #[must_use]
    pub fn new(flow: QuizFlow, renderer: R) -> Self {
        Self { flow, renderer }
    }

    /// Draw the initial screen.
    pub fn start(&mut self) {
        let snapshot = self.flow.snapshot();
        self.renderer.render(&snapshot);
    }

    /// Apply one action. Returns `false` when the flow rejected it.
    pub fn handle(&mut self, action: QuizAction) -> bool {
        let accepted = match self.flow.dispatch(action) {
            Ok(events) => {
                for event in &events {
                    self.renderer.notify(event);
                }
                true
            }
            Err(err) => {
                log_rejection(&err);
                self.renderer.report_error(&err);
                false
            }
        };
        let snapshot = self.flow.snapshot();
        self.renderer.render(&snapshot);
        accepted
    }

    /// Close out an unfinished session before the program exits, so partial
    /// progress reaches the results log. Nothing is redrawn.
    pub fn shutdown(&mut self) {
        if self.flow.screen() == Screen::NameEntry {
            return;
        }
        match self.flow.dispatch(QuizAction::ReturnToMenu) {
            Ok(events) => {
                for event in &events {
                    self.renderer.notify(event);
                }
            }
            Err(err) => log_rejection(&err),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.flow.screen()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.flow.snapshot()
    }

    #[must_use]
    pub fn flow(&self) -> &QuizFlow {
        &self.flow
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_parts(self) -> (QuizFlow, R) {
        (self.flow, self.renderer)
    }
}

fn log_rejection(err: &QuizError) {
    match err {
        QuizError::DataUnavailable { .. } => tracing::warn!(error = %err, "Quiz action failed"),
        _ => tracing::debug!(error = %err, "Quiz action rejected"),
    }
}
