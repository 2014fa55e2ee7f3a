//! Goal, streak, reset, dictionary, and speech practice tests.

mod common;

use coach_core::{CoreError, ReviewQuality};
use common::{harness, now, reopen, today};
use pretty_assertions::assert_eq;
use sprachcoach_engine::{EngineError, KeyValueStore};

#[test]
fn goal_outside_bounds_is_rejected() {
    let mut h = harness();
    for goal in [5, 0, 500] {
        let err = h.engine.set_daily_goal(goal, today()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Core(CoreError::GoalOutOfRange { .. })
        ));
    }
    assert_eq!(h.engine.progress().daily_goal, 30);
}

#[test]
fn goal_change_survives_a_restart() {
    let h = harness();
    let mut engine = h.engine;
    engine.set_daily_goal(50, today()).unwrap();
    drop(engine);

    assert_eq!(reopen(h.store).progress().daily_goal, 50);
}

#[test]
fn lowering_the_goal_can_credit_today_at_most_once() {
    let mut h = harness();
    // 20 XP: four successful reviews.
    for card_id in 0..4 {
        h.engine
            .review_card(card_id, ReviewQuality::Good, now())
            .unwrap();
    }
    assert_eq!(h.engine.progress().streak.count, 0);

    h.engine.set_daily_goal(15, today()).unwrap();
    assert_eq!(h.engine.progress().streak.count, 1);

    h.engine.set_daily_goal(10, today()).unwrap();
    assert_eq!(h.engine.progress().streak.count, 1);
}

#[test]
fn reset_clears_persisted_state_and_reseeds_the_deck() {
    let mut h = harness();
    for card_id in 0..6 {
        h.engine
            .review_card(card_id, ReviewQuality::Good, now())
            .unwrap();
    }
    assert!(h.engine.progress().xp > 0);

    h.engine.reset(now());

    let progress = h.engine.progress();
    assert_eq!(progress.xp, 0);
    assert_eq!(progress.daily_goal, 30);
    assert_eq!(progress.streak.count, 0);
    assert_eq!(h.engine.due_cards(now()).len(), 20);

    for key in ["deck", "xp", "goal", "streak"] {
        assert_eq!(h.store.get_raw(key), None, "key {key} should be cleared");
    }
}

#[test]
fn dictionary_lookup_matches_both_directions() {
    let h = harness();

    let hits = h.engine.search_dictionary("danke");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].translation, "Thanks");

    let hits = h.engine.search_dictionary("the ");
    assert_eq!(hits.len(), 3, "all three articles translate to 'the'");

    assert!(h.engine.search_dictionary("").is_empty());
}

#[test]
fn drill_phrases_are_spoken_in_the_content_locale() {
    let h = harness();
    let phrase = h.engine.drill_phrases()[0].clone();
    h.engine.speak(&phrase.text);

    let utterances = h.voice.drain_utterances();
    assert_eq!(utterances.len(), 1);
    assert_eq!(utterances[0].text, phrase.text);
    assert_eq!(utterances[0].locale, "de-DE");
}

#[tokio::test]
async fn listening_delivers_a_transcript_through_the_engine() {
    let h = harness();
    let listening = h.engine.start_listening();

    let (token, locale) = h.voice.pending_listen().expect("pending listen");
    assert_eq!(locale, "de-DE");
    h.voice.deliver_transcript(token, Some("Wie geht's?".into()));

    assert_eq!(listening.transcript().await.as_deref(), Some("Wie geht's?"));
}

#[tokio::test]
async fn a_new_listen_request_supersedes_the_pending_one() {
    let h = harness();
    let first = h.engine.start_listening();
    let (first_token, _) = h.voice.pending_listen().expect("pending listen");

    let second = h.engine.start_listening();
    assert_eq!(first.transcript().await, None);

    // The stale delivery is dropped; the live request still works.
    h.voice.deliver_transcript(first_token, Some("stale".into()));
    let (second_token, _) = h.voice.pending_listen().expect("pending listen");
    h.voice.deliver_transcript(second_token, Some("Hallo".into()));
    assert_eq!(second.transcript().await.as_deref(), Some("Hallo"));
}
