use services::{QuizError, QuizEvent, QuizSnapshot};

/// Presentation boundary driven by [`crate::QuizController`].
///
/// Implementations own every visual and audio concern; the flow only hands
/// them snapshots, semantic events and rejected actions.
pub trait Renderer {
    /// Redraw the current screen.
    fn render(&mut self, snapshot: &QuizSnapshot);

    /// React to a semantic event (sound, animation, dialog).
    fn notify(&mut self, event: &QuizEvent);

    /// Tell the user why an action was rejected.
    fn report_error(&mut self, error: &QuizError);
}
