//! Transcript accumulation across recognition sessions
//!
//! Folds a stream of partial/final recognition results into a permanent
//! transcript. Within one session the engine re-sends the whole hypothesis
//! on every update, so the session buffer is overwritten, not appended.
//! When a session ends its text is committed, with a normalized suffix
//! check suppressing the common "final result repeats the last partial"
//! duplication.

use tracing::{debug, trace};

use super::normalize::normalized_ends_with;

/// Default text shown when nothing has been recognized yet
pub const DEFAULT_PLACEHOLDER: &str = "Press start and begin speaking";

/// The two transcript buffers
///
/// `committed` holds only text from sessions that have ended; `session`
/// holds the most recent, possibly incomplete hypothesis of the active
/// session. Live recognition events mutate exactly one of them at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranscriptState {
    /// Text from all completed sessions, original casing and punctuation
    pub committed: String,
    /// Latest hypothesis of the active session, if any
    pub session: String,
}

/// Accumulates recognition results into a running transcript
#[derive(Debug, Clone)]
pub struct TranscriptAccumulator {
    state: TranscriptState,
    placeholder: String,
}

impl Default for TranscriptAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptAccumulator {
    /// Create an empty accumulator with the default placeholder
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Create an empty accumulator with a custom placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            state: TranscriptState::default(),
            placeholder: placeholder.into(),
        }
    }

    /// Apply a partial or final recognition result
    ///
    /// Replaces the session buffer with the trimmed hypothesis; a final
    /// result additionally commits the session. Empty text is valid and
    /// clears the visible in-flight fragment.
    pub fn on_result(&mut self, text: &str, is_final: bool) {
        self.state.session = text.trim().to_string();
        trace!(
            is_final,
            chars = self.state.session.len(),
            "recognition result applied"
        );
        if is_final {
            self.commit_session();
        }
    }

    /// Fold the active session into the committed transcript
    ///
    /// Called when the engine reports a terminal status even without a
    /// final result. Idempotent: with an empty session buffer this is a
    /// no-op.
    pub fn end_session(&mut self) {
        self.commit_session();
    }

    fn commit_session(&mut self) {
        let session = self.state.session.trim();
        if session.is_empty() {
            self.state.session.clear();
            return;
        }

        if self.state.committed.is_empty() {
            self.state.committed = session.to_string();
            debug!(chars = self.state.committed.len(), "session committed");
        } else if normalized_ends_with(&self.state.committed, session) {
            // The engine re-sent a tail we already hold; drop it.
            debug!(chars = session.len(), "duplicate session suffix suppressed");
        } else {
            self.state.committed.push(' ');
            self.state.committed.push_str(session);
            debug!(
                appended = session.len(),
                total = self.state.committed.len(),
                "session committed"
            );
        }
        self.state.session.clear();
    }

    /// Clear both buffers
    pub fn reset(&mut self) {
        self.state = TranscriptState::default();
    }

    /// Derive the single display string
    ///
    /// Committed and session text joined by one space when both are
    /// present; the placeholder when both are empty. Never mutates.
    pub fn display_text(&self) -> String {
        match (
            self.state.committed.is_empty(),
            self.state.session.is_empty(),
        ) {
            (true, true) => self.placeholder.clone(),
            (false, true) => self.state.committed.clone(),
            (true, false) => self.state.session.clone(),
            (false, false) => format!("{} {}", self.state.committed, self.state.session),
        }
    }

    /// Text from all completed sessions
    pub fn committed_text(&self) -> &str {
        &self.state.committed
    }

    /// Latest hypothesis of the active session
    pub fn session_text(&self) -> &str {
        &self.state.session
    }

    /// The raw buffer pair
    pub fn state(&self) -> &TranscriptState {
        &self.state
    }
}
