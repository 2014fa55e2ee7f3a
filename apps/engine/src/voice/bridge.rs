//! Shell-driven voice bridge.
//!
//! The embedding shell drains queued utterances into its TTS engine
//! and pushes recognition results back through `deliver_transcript`.
//! Each listen request carries a token; a delivery whose token no
//! longer matches the pending request is discarded, so a superseded
//! request can never double-report.

use super::{Listening, VoicePort};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;
use uuid::Uuid;

/// An utterance queued for the shell's TTS engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
}

struct PendingListen {
    token: Uuid,
    locale: String,
    tx: oneshot::Sender<Option<String>>,
}

/// Voice port backed by the embedding shell.
#[derive(Default)]
pub struct BridgedVoice {
    utterances: Mutex<VecDeque<Utterance>>,
    pending: Mutex<Option<PendingListen>>,
}

impl BridgedVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Utterances queued since the last drain, oldest first.
    pub fn drain_utterances(&self) -> Vec<Utterance> {
        self.utterances
            .lock()
            .expect("utterance lock")
            .drain(..)
            .collect()
    }

    /// Token and locale of the listen request currently awaiting a
    /// transcript, if any.
    pub fn pending_listen(&self) -> Option<(Uuid, String)> {
        self.pending
            .lock()
            .expect("listen lock")
            .as_ref()
            .map(|p| (p.token, p.locale.clone()))
    }

    /// Resolve the pending request identified by `token` with a
    /// transcript (or `None` for end-of-listening without one).
    /// Deliveries for a superseded or already-resolved request are
    /// discarded.
    pub fn deliver_transcript(&self, token: Uuid, transcript: Option<String>) {
        let mut pending = self.pending.lock().expect("listen lock");
        match pending.take() {
            Some(p) if p.token == token => {
                let _ = p.tx.send(transcript);
            }
            other => {
                tracing::debug!(%token, "discarding transcript for stale listen request");
                *pending = other;
            }
        }
    }
}

impl VoicePort for BridgedVoice {
    fn speak(&self, text: &str, locale: &str) {
        self.utterances
            .lock()
            .expect("utterance lock")
            .push_back(Utterance {
                text: text.to_string(),
                locale: locale.to_string(),
            });
    }

    fn start_listening(&self, locale: &str) -> Listening {
        let (tx, rx) = oneshot::channel();
        let token = Uuid::new_v4();
        let previous = self
            .pending
            .lock()
            .expect("listen lock")
            .replace(PendingListen {
                token,
                locale: locale.to_string(),
                tx,
            });
        if previous.is_some() {
            // Dropping the previous sender resolves that request with None.
            tracing::debug!(%token, "superseding pending listen request");
        }
        Listening::new(rx)
    }
}
