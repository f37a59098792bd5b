//! The external recognition engine boundary
//!
//! The engine itself (platform recognizer, cloud stream, test double) lives
//! behind the [`SpeechEngine`] trait; everything it reports back flows as
//! [`EngineEvent`] values through a channel the implementation is
//! constructed with. The core never blocks on the engine beyond the
//! request calls themselves.

mod error;
mod locale;

pub use error::EngineError;
pub use locale::{resolve as resolve_locale, LocaleInfo};

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Listening status reported by the recognition engine
///
/// All statuses except `Listening` are terminal for the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EngineStatus {
    /// Recognition is running and results may arrive
    Listening,
    /// The engine stopped listening without a result boundary
    NotListening,
    /// The session finished after delivering a final result
    Done,
    /// The session finished without any recognized speech
    DoneNoResult,
}

impl EngineStatus {
    /// Whether this status ends the active recognition session
    pub fn ends_session(self) -> bool {
        !matches!(self, EngineStatus::Listening)
    }
}

/// Asynchronous notifications from the engine
///
/// Recognition results, lifecycle statuses, microphone levels, and errors
/// arrive interleaved in any order relative to the caller's own requests.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A partial or final recognition hypothesis for the active session
    Result { text: String, is_final: bool },
    /// A listening status change
    Status(EngineStatus),
    /// Input sound level, for presentation-layer metering
    SoundLevel(f32),
    /// An asynchronous engine error; `permanent` means re-initialization
    /// is required before listening again
    Error { message: String, permanent: bool },
}

/// Options for one listen request
#[derive(Debug, Clone, PartialEq)]
pub struct ListenOptions {
    /// Deliver in-progress hypotheses, not only the final one
    pub partial_results: bool,
    /// Engine cancels the session itself on error
    pub cancel_on_error: bool,
    /// Dictation-style continuous listening
    pub continuous: bool,
    /// Let the engine insert punctuation
    pub auto_punctuation: bool,
    /// Locale identifier; empty means the engine default
    pub locale_id: String,
    /// Maximum duration of a single session
    pub listen_for: Duration,
    /// Trailing-silence timeout that ends a session
    pub pause_for: Duration,
}

/// Capability contract of an external speech recognition engine
///
/// Implementations deliver [`EngineEvent`]s through a channel handed to
/// them at construction; the trait only carries the request direction.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Prepare the engine (permissions, model warm-up)
    ///
    /// Returns `Ok(false)` when recognition is unavailable on this system.
    async fn initialize(&self) -> Result<bool, EngineError>;

    /// Begin a listening session with the given options
    async fn listen(&self, options: ListenOptions) -> Result<(), EngineError>;

    /// Stop the active session, letting pending results flush
    async fn stop(&self) -> Result<(), EngineError>;

    /// Abort the active session, discarding pending results
    async fn cancel(&self) -> Result<(), EngineError>;

    /// Enumerate the locales the engine can recognize
    async fn locales(&self) -> Result<Vec<LocaleInfo>, EngineError>;

    /// The locale the host system prefers, if the engine knows it
    async fn system_locale(&self) -> Result<Option<LocaleInfo>, EngineError>;
}
