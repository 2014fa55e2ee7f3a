//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sprachcoach_engine::{BridgedVoice, CoachEngine, EngineConfig, MemoryStore};

/// Fixed instant all tests run at.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub struct TestHarness {
    pub engine: CoachEngine,
    pub store: Arc<MemoryStore>,
    pub voice: Arc<BridgedVoice>,
}

/// Engine over an in-memory store and a bridged voice port, both
/// kept reachable for inspection.
pub fn harness() -> TestHarness {
    let store = Arc::new(MemoryStore::new());
    let voice = Arc::new(BridgedVoice::new());
    let engine = CoachEngine::new(
        store.clone(),
        voice.clone(),
        EngineConfig::default(),
        now(),
    )
    .expect("engine init");

    TestHarness {
        engine,
        store,
        voice,
    }
}

/// A second engine over an existing store, as after an app restart.
pub fn reopen(store: Arc<MemoryStore>) -> CoachEngine {
    CoachEngine::new(
        store,
        Arc::new(BridgedVoice::new()),
        EngineConfig::default(),
        now(),
    )
    .expect("engine reopen")
}
