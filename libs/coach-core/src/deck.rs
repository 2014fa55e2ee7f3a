//! The learner's deck: an insertion-ordered card collection.

use crate::error::{CoreError, Result};
use crate::scheduler::ReviewScheduler;
use crate::types::{Card, ReviewQuality, VocabEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered collection of cards with unique ids. Persisted as a whole
/// (a JSON array) after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Seed a fresh deck from a vocabulary list: stage 0 and due
    /// immediately for every card, ids assigned from position.
    pub fn from_vocabulary(entries: &[VocabEntry], now: DateTime<Utc>) -> Self {
        let cards = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| Card {
                id: idx as i64,
                term: entry.term.clone(),
                translation: entry.translation.clone(),
                note: entry.note.clone(),
                stage: 0,
                next_due: now,
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Cards whose next review time has passed, in insertion order.
    /// Shuffling for presentation is the shell's concern.
    pub fn due_cards(&self, now: DateTime<Utc>) -> Vec<&Card> {
        self.cards.iter().filter(|card| card.next_due <= now).collect()
    }

    /// Apply a review to one card, returning the updated deck. The
    /// deck's size and id set are invariant across reviews.
    pub fn review(
        &self,
        id: i64,
        quality: ReviewQuality,
        now: DateTime<Utc>,
        scheduler: &dyn ReviewScheduler,
    ) -> Result<Deck> {
        let position = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(CoreError::CardNotFound(id))?;

        let mut cards = self.cards.clone();
        cards[position] = scheduler.schedule(&cards[position], quality, now);
        Ok(Deck { cards })
    }
}
