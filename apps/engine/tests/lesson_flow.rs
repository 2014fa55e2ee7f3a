//! Lesson session flow tests.

mod common;

use coach_core::PairOutcome;
use common::{harness, now};
use pretty_assertions::assert_eq;
use sprachcoach_engine::EngineError;

#[test]
fn completing_the_intro_lesson_credits_the_reward_once() {
    let mut h = harness();
    h.engine.start_lesson("intro").unwrap();

    // Note block.
    assert!(h.engine.advance_lesson(now()).unwrap().is_none());

    // Audio block: listen-and-repeat.
    h.engine.play_block_audio().unwrap();
    let utterances = h.voice.drain_utterances();
    assert_eq!(utterances.len(), 1);
    assert_eq!(utterances[0].text, "Hallo! Ich heiße Alex. Wie geht's?");
    assert!(h.engine.advance_lesson(now()).unwrap().is_none());

    // Multiple choice.
    assert!(h.engine.answer_choice(1).unwrap());
    assert!(h.engine.advance_lesson(now()).unwrap().is_none());

    // Typed answer, forgiving about case and whitespace.
    assert!(h.engine.submit_typed(" danke  ").unwrap());
    let outcome = h
        .engine
        .advance_lesson(now())
        .unwrap()
        .expect("fourth advance completes the lesson");

    assert_eq!(outcome.lesson_id, "intro");
    assert_eq!(outcome.reward_xp, 30);
    assert_eq!(outcome.correct, 2);
    assert_eq!(h.engine.progress().xp, 30);
    // 30 XP meets the default daily goal.
    assert_eq!(h.engine.progress().streak.count, 1);

    // The session is gone once the outcome is reported.
    assert!(h.engine.current_block().is_none());
    assert!(matches!(
        h.engine.advance_lesson(now()),
        Err(EngineError::NoActiveSession)
    ));
}

#[test]
fn second_completion_same_day_does_not_double_credit_the_streak() {
    let mut h = harness();
    for lesson_id in ["intro", "numbers"] {
        h.engine.start_lesson(lesson_id).unwrap();
        loop {
            if let Some(outcome) = h.engine.advance_lesson(now()).unwrap() {
                assert!(outcome.reward_xp > 0);
                break;
            }
        }
    }

    let progress = h.engine.progress();
    assert_eq!(progress.xp, 55);
    assert_eq!(progress.streak.count, 1);
}

#[test]
fn matching_block_counts_errors_without_blocking_completion() {
    let mut h = harness();
    h.engine.start_lesson("articles").unwrap();

    // Note, then multiple choice.
    h.engine.advance_lesson(now()).unwrap();
    assert!(h.engine.answer_choice(1).unwrap());
    h.engine.advance_lesson(now()).unwrap();

    // Matching block: one wrong pairing, then finish it out.
    assert_eq!(
        h.engine.match_pair("der", "Frau").unwrap(),
        PairOutcome::Mismatch
    );
    assert_eq!(
        h.engine.match_pair("der", "Mann").unwrap(),
        PairOutcome::Matched
    );
    assert_eq!(
        h.engine.match_pair("die", "Frau").unwrap(),
        PairOutcome::Matched
    );
    assert_eq!(
        h.engine.match_pair("das", "Kind").unwrap(),
        PairOutcome::BlockComplete
    );

    let outcome = h
        .engine
        .advance_lesson(now())
        .unwrap()
        .expect("lesson completes");
    assert_eq!(outcome.reward_xp, 40);
    assert_eq!(outcome.matching_errors, 1);
    // The multiple choice counted; the flawed matching block did not.
    assert_eq!(outcome.correct, 1);
}

#[test]
fn wrong_answers_never_gate_advancement() {
    let mut h = harness();
    h.engine.start_lesson("numbers").unwrap();

    h.engine.advance_lesson(now()).unwrap();
    assert!(!h.engine.answer_choice(0).unwrap());
    h.engine.advance_lesson(now()).unwrap();
    assert!(!h.engine.submit_typed("zwei").unwrap());

    let outcome = h
        .engine
        .advance_lesson(now())
        .unwrap()
        .expect("lesson completes despite wrong answers");
    assert_eq!(outcome.correct, 0);
    assert_eq!(outcome.reward_xp, 25);
}

#[test]
fn unknown_lesson_is_reported() {
    let mut h = harness();
    let err = h.engine.start_lesson("advanced-grammar").unwrap_err();
    assert!(matches!(err, EngineError::LessonNotFound(id) if id == "advanced-grammar"));
}

#[test]
fn answering_without_a_session_is_an_error() {
    let mut h = harness();
    assert!(matches!(
        h.engine.answer_choice(0),
        Err(EngineError::NoActiveSession)
    ));
    assert!(matches!(
        h.engine.submit_typed("Danke"),
        Err(EngineError::NoActiveSession)
    ));
    assert!(matches!(
        h.engine.match_pair("der", "Mann"),
        Err(EngineError::NoActiveSession)
    ));
}

#[test]
fn abandoning_a_lesson_credits_nothing() {
    let mut h = harness();
    h.engine.start_lesson("intro").unwrap();
    h.engine.advance_lesson(now()).unwrap();
    h.engine.abandon_lesson();

    assert!(h.engine.current_block().is_none());
    assert_eq!(h.engine.progress().xp, 0);

    // A fresh session starts from the first block again.
    h.engine.start_lesson("intro").unwrap();
    let block = h.engine.current_block().expect("active block");
    assert!(matches!(block, coach_core::Block::Note { .. }));
}
