mod paths;

use std::io::{self, BufRead, Write};

use services::QuizFlow;
use storage::Storage;
use tracing_subscriber::EnvFilter;
use ui::{Command, QuizController, TerminalRenderer, parse_command};

use crate::paths::AppPaths;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Files (first directory containing quiz_level.json wins):");
    eprintln!("  <exe dir>, <current dir>, crates/app/data");
    eprintln!("  quiz_results.csv is written beside quiz_level.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG (default: warn)");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        print_usage();
        if matches!(arg.as_str(), "--help" | "-h") {
            return Ok(());
        }
        return Err(format!("unknown argument: {arg}").into());
    }

    let paths = AppPaths::resolve()?;
    tracing::info!(
        questions = %paths.questions.display(),
        results = %paths.results.display(),
        "Resolved quiz files"
    );

    let storage = Storage::files(&paths.questions, &paths.results);
    let flow = QuizFlow::from_storage(&storage);
    let stdout = io::stdout();
    let mut controller = QuizController::new(flow, TerminalRenderer::new(stdout.lock()));
    controller.start();

    drive(&mut controller, io::stdin().lock())?;
    Ok(())
}

/// Feed typed lines to the controller until quit, end of input or a read error.
///
/// An unfinished session is closed out before returning, also on a read error.
fn drive<B: BufRead, W: Write>(
    controller: &mut QuizController<TerminalRenderer<W>>,
    input: B,
) -> io::Result<()> {
    let mut read_error = None;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                read_error = Some(err);
                break;
            }
        };
        let screen = controller.screen();
        match parse_command(screen, &line) {
            Command::Action(action) => {
                controller.handle(action);
            }
            Command::Help => controller.renderer_mut().help(screen),
            Command::Unrecognized(raw) => controller.renderer_mut().unrecognized(screen, &raw),
            Command::Quit => break,
        }
    }

    controller.shutdown();
    read_error.map_or(Ok(()), Err)
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};
    use std::sync::Arc;

    use quiz_core::model::{Difficulty, Question};
    use storage::repository::{InMemoryQuizRepository, InMemoryResultsLog};

    use super::*;

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal went away"))
        }
    }

    fn build_controller() -> (QuizController<TerminalRenderer<Vec<u8>>>, InMemoryResultsLog) {
        let repo = InMemoryQuizRepository::new();
        let pool = (0..3)
            .map(|id| {
                let options = ["Meow", "Woof", "Moo", "Quack"].map(String::from).to_vec();
                Question::new(format!("Q{id}"), options, "Meow", None).unwrap()
            })
            .collect();
        repo.insert_tier(Difficulty::Easy, pool).unwrap();
        let log = InMemoryResultsLog::new();
        let flow = QuizFlow::new(Arc::new(repo), Arc::new(log.clone())).with_seed(9);
        (
            QuizController::new(flow, TerminalRenderer::new(Vec::new())),
            log,
        )
    }

    #[test]
    fn read_error_still_records_the_running_session() {
        let (mut controller, log) = build_controller();
        let input = BufReader::new(Cursor::new("Mochi\n1\n").chain(BrokenInput));

        let err = drive(&mut controller, input).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
        assert_eq!(controller.screen(), services::Screen::NameEntry);

        let records = log.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!((records[0].score(), records[0].total_questions()), (0, 3));
    }

    #[test]
    fn quit_closes_the_session_once() {
        let (mut controller, log) = build_controller();
        drive(&mut controller, Cursor::new("Mochi\neasy\nq\n")).unwrap();
        assert_eq!(log.records().unwrap().len(), 1);
    }
}
