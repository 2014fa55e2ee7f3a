//! Voice port: text-to-speech and one-shot speech recognition.
//!
//! Speaking is fire-and-forget. Listening is the one asynchronous
//! operation in the system: a request resolves exactly once with an
//! optional transcript, where "no transcript" is a valid outcome
//! (silence, denial, supersession, unsupported platform), never an
//! error.

mod bridge;

pub use bridge::{BridgedVoice, Utterance};

use tokio::sync::oneshot;

/// A pending listen request.
#[derive(Debug)]
pub struct Listening {
    rx: oneshot::Receiver<Option<String>>,
}

impl Listening {
    pub(crate) fn new(rx: oneshot::Receiver<Option<String>>) -> Self {
        Self { rx }
    }

    pub(crate) fn resolved(transcript: Option<String>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(transcript);
        Self { rx }
    }

    /// Wait for the transcript. A dropped sender (a superseded
    /// request) resolves to `None`.
    pub async fn transcript(self) -> Option<String> {
        self.rx.await.unwrap_or(None)
    }
}

/// Capability interface over the platform's speech services.
pub trait VoicePort: Send + Sync {
    /// Speak `text` in `locale`. Best-effort; may no-op.
    fn speak(&self, text: &str, locale: &str);

    /// Begin a one-shot recognition request. Starting a new request
    /// supersedes any pending one, which then resolves `None`.
    fn start_listening(&self, locale: &str) -> Listening;
}

/// Voice port for platforms without speech support: speaking is a
/// no-op and listening resolves immediately with no transcript.
#[derive(Debug, Default)]
pub struct NullVoice;

impl VoicePort for NullVoice {
    fn speak(&self, _text: &str, _locale: &str) {}

    fn start_listening(&self, _locale: &str) -> Listening {
        Listening::resolved(None)
    }
}
