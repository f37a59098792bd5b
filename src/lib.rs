#![deny(clippy::all)]

//! Live dictation transcript engine
//!
//! Assembles a running transcript from a stream of partial and final
//! speech-recognition results delivered by an external engine. The engine
//! is abstract (see [`engine::SpeechEngine`]); this crate owns the part
//! that is easy to get wrong: deciding what to keep, what to discard, and
//! how to stitch session boundaries together while callbacks race user
//! actions.
//!
//! A [`controller::DictationController`] tracks engine readiness and
//! serializes start/stop requests, a [`transcript::TranscriptAccumulator`]
//! folds finished sessions into the committed transcript with duplicate
//! suppression, and the presentation layer re-reads the derived display
//! text and status after each transition.

pub mod config;
pub mod controller;
pub mod engine;
pub mod preferences;
pub mod transcript;

#[cfg(test)]
pub mod test_support;

pub use controller::{spawn_event_pump, DictationController, DictationStatus};
pub use engine::{EngineError, EngineEvent, EngineStatus, ListenOptions, LocaleInfo, SpeechEngine};
pub use transcript::{TranscriptAccumulator, TranscriptState};
