//! Application engine for sprachcoach.
//!
//! Owns the mutable learner state (deck, progress, active lesson
//! session), wires the persistence and voice ports, and persists
//! after every state transition. A UI shell embeds [`CoachEngine`]
//! and forwards learner actions to it.

pub mod engine;
pub mod error;
pub mod store;
pub mod voice;

pub use engine::{CoachEngine, EngineConfig, ReviewOutcome};
pub use error::{EngineError, Result};
pub use store::{open_default, KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use voice::{BridgedVoice, Listening, NullVoice, Utterance, VoicePort};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global tracing subscriber for shells and examples.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
