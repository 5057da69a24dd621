pub mod controller;
pub mod input;
pub mod renderer;
pub mod terminal;
pub mod vm;

pub use controller::QuizController;
pub use input::{Command, help_text, parse_command};
pub use renderer::Renderer;
pub use terminal::TerminalRenderer;
