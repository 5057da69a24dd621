use std::sync::Arc;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{Difficulty, Question};
use services::sessions::SessionBuilder;
use services::{QuizAction, QuizFlow, QuizRules, Screen};
use storage::repository::{InMemoryQuizRepository, InMemoryResultsLog};

fn build_pool(len: usize) -> Vec<Question> {
    (0..len)
        .map(|id| {
            let options = (0..4).map(|o| format!("q{id}-o{o}")).collect::<Vec<_>>();
            let answer = options[id % 4].clone();
            Question::new(format!("Q{id}"), options, answer, None).unwrap()
        })
        .collect()
}

fn sorted_texts(questions: &[Question]) -> Vec<String> {
    let mut texts: Vec<String> = questions.iter().map(|q| q.text().to_string()).collect();
    texts.sort();
    texts
}

proptest! {
    #[test]
    fn plan_is_a_permutation_of_the_kept_prefix(len in 1usize..25, seed in any::<u64>()) {
        let pool = build_pool(len);
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = SessionBuilder::new(Difficulty::Easy).build(pool.clone(), &mut rng);

        prop_assert_eq!(plan.total(), len.min(10));
        prop_assert_eq!(sorted_texts(&plan.questions), sorted_texts(&pool[..len.min(10)]));

        for question in &plan.questions {
            let original = pool.iter().find(|q| q.text() == question.text()).unwrap();
            let mut got = question.options().to_vec();
            let mut want = original.options().to_vec();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
            prop_assert_eq!(question.answer(), original.answer());
        }
    }

    #[test]
    fn session_invariants_hold_for_any_answer_pattern(
        len in 1usize..15,
        max_lives in 1u32..=10,
        pattern in proptest::collection::vec(any::<bool>(), 15),
        seed in any::<u64>(),
    ) {
        let repo = InMemoryQuizRepository::new();
        repo.insert_tier(Difficulty::Easy, build_pool(len)).unwrap();
        let log = InMemoryResultsLog::new();
        let mut flow = QuizFlow::new(Arc::new(repo), Arc::new(log.clone()))
            .with_seed(seed)
            .with_rules(QuizRules { question_limit: 10, max_lives });

        flow.dispatch(QuizAction::SubmitName("Prop".into())).unwrap();
        flow.dispatch(QuizAction::SelectDifficulty(Difficulty::Easy)).unwrap();
        prop_assert_eq!(flow.snapshot().total as usize, len.min(10));

        for &correct in &pattern {
            if flow.screen() != Screen::QuestionActive {
                break;
            }
            let (idx, before_lives, before_score) = {
                let session = flow.session().unwrap();
                let question = session.current_question().unwrap();
                let idx = question
                    .options()
                    .iter()
                    .position(|o| (o == question.answer()) == correct)
                    .unwrap();
                (idx, session.lives(), session.score())
            };

            flow.dispatch(QuizAction::SelectOption(idx)).unwrap();
            flow.dispatch(QuizAction::ConfirmAnswer).unwrap();

            let snapshot = flow.snapshot();
            prop_assert!(snapshot.score <= snapshot.total);
            prop_assert!(snapshot.lives <= max_lives);
            if correct {
                prop_assert_eq!(snapshot.lives, before_lives);
                prop_assert_eq!(snapshot.score, before_score + 1);
            } else {
                prop_assert_eq!(snapshot.lives, before_lives - 1);
                prop_assert_eq!(snapshot.score, before_score);
            }

            if snapshot.lives == 0 {
                prop_assert_eq!(flow.screen(), Screen::GameOver);
                break;
            }
            prop_assert_eq!(flow.screen(), Screen::AnswerRevealed);
            flow.dispatch(QuizAction::Advance).unwrap();
        }

        let answered_all = flow.session().unwrap().is_finished();
        match flow.screen() {
            Screen::GameOver => prop_assert_eq!(flow.snapshot().lives, 0),
            Screen::SessionComplete => {
                prop_assert!(answered_all);
                prop_assert!(flow.snapshot().lives > 0);
            }
            other => prop_assert!(false, "unexpected terminal screen {other}"),
        }

        flow.dispatch(QuizAction::ReturnToMenu).unwrap();
        prop_assert_eq!(log.records().unwrap().len(), 1);
    }
}
