use std::path::Path;

use quiz_core::model::Difficulty;
use storage::JsonQuizRepository;
use storage::repository::QuizRepository;

#[test]
fn every_tier_has_a_full_session_of_questions() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/quiz_level.json");
    let repo = JsonQuizRepository::new(path);

    for tier in Difficulty::ALL {
        let questions = repo.load_questions(tier).unwrap();
        assert!(questions.len() >= 10, "{tier} has {} questions", questions.len());
    }
}
