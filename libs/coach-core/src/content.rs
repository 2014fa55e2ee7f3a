//! Built-in A1 German starter content: vocabulary, lessons, and
//! speaking-drill phrases.

use crate::lesson::{Block, Lesson, MatchPair};
use crate::types::VocabEntry;
use serde::{Deserialize, Serialize};

/// Locale the built-in content is voiced in.
pub const CONTENT_LOCALE: &str = "de-DE";

/// A spoken-practice prompt with an English hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPhrase {
    pub text: String,
    pub hint: String,
}

fn entry(term: &str, translation: &str, note: &str) -> VocabEntry {
    VocabEntry {
        term: term.to_string(),
        translation: translation.to_string(),
        note: if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        },
    }
}

/// Starter vocabulary used to seed a fresh deck and back the
/// dictionary.
pub fn starter_vocabulary() -> Vec<VocabEntry> {
    vec![
        entry("Hallo", "Hello", "Greeting"),
        entry("Tschüss", "Bye", "Casual farewell"),
        entry("Bitte", "Please / You're welcome", "Polite"),
        entry("Danke", "Thanks", "Polite"),
        entry("Ja", "Yes", ""),
        entry("Nein", "No", ""),
        entry("Wie geht's?", "How are you?", "Informal"),
        entry("Guten Morgen", "Good morning", "Greeting"),
        entry("Guten Abend", "Good evening", "Greeting"),
        entry("Ich heiße…", "My name is…", "Self-intro"),
        entry("Ich bin", "I am", "Verb: sein"),
        entry("Haben", "to have", "Verb: haben"),
        entry("der", "the (masc)", "Article"),
        entry("die", "the (fem/pl)", "Article"),
        entry("das", "the (neut)", "Article"),
        entry("und", "and", "Connector"),
        entry("oder", "or", "Connector"),
        entry("eins", "one", "Number"),
        entry("zwei", "two", "Number"),
        entry("drei", "three", "Number"),
    ]
}

/// The built-in lesson path, in recommended order.
pub fn starter_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "intro".into(),
            title: "Basics: Greetings & Self-Intro".into(),
            reward_xp: 30,
            blocks: vec![
                Block::Note {
                    text: "German has formal and informal registers. Use 'Hallo' or \
                           'Guten Tag' informally; 'Guten Morgen/Abend' for time-based \
                           greetings."
                        .into(),
                },
                Block::Audio {
                    text: "Hallo! Ich heiße Alex. Wie geht's?".into(),
                },
                Block::MultipleChoice {
                    prompt: "What does 'Guten Morgen' mean?".into(),
                    options: vec![
                        "Good evening".into(),
                        "Good morning".into(),
                        "Good night".into(),
                    ],
                    answer: 1,
                },
                Block::TypedAnswer {
                    prompt: "Type the German for 'Thank you'".into(),
                    answer: "Danke".into(),
                },
            ],
        },
        Lesson {
            id: "articles".into(),
            title: "Articles & Genders (der/die/das)".into(),
            reward_xp: 40,
            blocks: vec![
                Block::Note {
                    text: "German nouns have gender: masculine (der), feminine (die), \
                           neuter (das). Learn nouns with their article (e.g., der Tisch)."
                        .into(),
                },
                Block::MultipleChoice {
                    prompt: "Pick the correct article: ___ Tisch (table)".into(),
                    options: vec!["die".into(), "der".into(), "das".into()],
                    answer: 1,
                },
                Block::MatchingPairs {
                    prompt: "Match article to noun".into(),
                    pairs: vec![
                        MatchPair::new("der", "Mann"),
                        MatchPair::new("die", "Frau"),
                        MatchPair::new("das", "Kind"),
                    ],
                },
            ],
        },
        Lesson {
            id: "numbers".into(),
            title: "Numbers 1–10".into(),
            reward_xp: 25,
            blocks: vec![
                Block::Note {
                    text: "eins, zwei, drei, vier, fünf, sechs, sieben, acht, neun, zehn"
                        .into(),
                },
                Block::MultipleChoice {
                    prompt: "What is 'drei'?".into(),
                    options: vec!["two".into(), "three".into(), "four".into()],
                    answer: 1,
                },
                Block::TypedAnswer {
                    prompt: "Type the German for 'one'".into(),
                    answer: "eins".into(),
                },
            ],
        },
        Lesson {
            id: "verbs".into(),
            title: "Core Verbs: sein & haben".into(),
            reward_xp: 35,
            blocks: vec![
                Block::Note {
                    text: "sein (to be): ich bin, du bist, er/sie/es ist, wir sind, ihr \
                           seid, sie/Sie sind. haben (to have): ich habe, du hast, \
                           er/sie/es hat…"
                        .into(),
                },
                Block::MultipleChoice {
                    prompt: "'I am' in German is…".into(),
                    options: vec!["Ich habe".into(), "Ich bin".into(), "Ich ist".into()],
                    answer: 1,
                },
                Block::TypedAnswer {
                    prompt: "Type the German for 'We have' (2 words)".into(),
                    answer: "wir haben".into(),
                },
            ],
        },
    ]
}

/// Short dialogue prompts for the speaking drill.
pub fn drill_phrases() -> Vec<DrillPhrase> {
    [
        (
            "Guten Morgen! Wie geht es Ihnen? (formal)",
            "Good morning! How are you?",
        ),
        ("Ich heiße Alex. Und du?", "My name is Alex. And you?"),
        ("Ich komme aus Indien.", "I am from India."),
    ]
    .iter()
    .map(|(text, hint)| DrillPhrase {
        text: text.to_string(),
        hint: hint.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_has_unique_terms() {
        let vocab = starter_vocabulary();
        assert_eq!(vocab.len(), 20);
        let mut terms: Vec<_> = vocab.iter().map(|v| v.term.as_str()).collect();
        terms.sort_unstable();
        terms.dedup();
        assert_eq!(terms.len(), vocab.len());
    }

    #[test]
    fn lessons_are_well_formed() {
        for lesson in starter_lessons() {
            assert!(!lesson.blocks.is_empty(), "lesson {} is empty", lesson.id);
            assert!(lesson.reward_xp > 0);
            for block in &lesson.blocks {
                if let Block::MultipleChoice {
                    options, answer, ..
                } = block
                {
                    assert!(*answer < options.len());
                }
            }
        }
    }

    #[test]
    fn lesson_ids_are_unique() {
        let lessons = starter_lessons();
        let mut ids: Vec<_> = lessons.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), lessons.len());
    }
}
