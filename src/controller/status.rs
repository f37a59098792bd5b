//! Lifecycle phases and the status surface
//!
//! The initialize and listen lifecycles are separate tagged state
//! machines, so overlapping transitions are unrepresentable instead of
//! being guarded by ad hoc booleans.

use std::fmt;

use crate::engine::EngineStatus;

/// Initialization lifecycle of the engine binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum EnginePhase {
    /// Never initialized, or invalidated by a permanent error
    #[default]
    Uninitialized,
    /// An initialize call is in flight
    Initializing,
    /// Engine available and locale resolved
    Ready,
    /// Initialization failed; a later initialize may retry
    Failed,
}

/// Listening lifecycle within a ready engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SessionPhase {
    /// No session active
    #[default]
    Idle,
    /// A start request is in flight
    Starting,
    /// A session is running
    Listening,
}

/// Status exposed to the presentation layer
///
/// Combines the controller's own phases with the last engine-reported
/// status, covering the whole vocabulary a status label may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationStatus {
    Idle,
    Initializing,
    Ready,
    Failed,
    Starting,
    Listening,
    Done,
    NotListening,
    DoneNoResult,
}

impl DictationStatus {
    pub(crate) fn derive(
        engine_phase: EnginePhase,
        session_phase: SessionPhase,
        last_engine_status: Option<EngineStatus>,
    ) -> Self {
        match engine_phase {
            EnginePhase::Uninitialized => DictationStatus::Idle,
            EnginePhase::Initializing => DictationStatus::Initializing,
            EnginePhase::Failed => DictationStatus::Failed,
            EnginePhase::Ready => match session_phase {
                SessionPhase::Starting => DictationStatus::Starting,
                SessionPhase::Listening => DictationStatus::Listening,
                SessionPhase::Idle => match last_engine_status {
                    Some(EngineStatus::Done) => DictationStatus::Done,
                    Some(EngineStatus::NotListening) => DictationStatus::NotListening,
                    Some(EngineStatus::DoneNoResult) => DictationStatus::DoneNoResult,
                    // Listening with an idle session means the terminal
                    // status has not arrived yet; report the phase.
                    Some(EngineStatus::Listening) | None => DictationStatus::Ready,
                },
            },
        }
    }
}

impl fmt::Display for DictationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DictationStatus::Idle => "idle",
            DictationStatus::Initializing => "initializing",
            DictationStatus::Ready => "ready",
            DictationStatus::Failed => "failed",
            DictationStatus::Starting => "starting",
            DictationStatus::Listening => "listening",
            DictationStatus::Done => "done",
            DictationStatus::NotListening => "notListening",
            DictationStatus::DoneNoResult => "doneNoResult",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_phase_dominates() {
        assert_eq!(
            DictationStatus::derive(EnginePhase::Uninitialized, SessionPhase::Idle, None),
            DictationStatus::Idle
        );
        assert_eq!(
            DictationStatus::derive(EnginePhase::Initializing, SessionPhase::Idle, None),
            DictationStatus::Initializing
        );
        assert_eq!(
            DictationStatus::derive(EnginePhase::Failed, SessionPhase::Idle, None),
            DictationStatus::Failed
        );
    }

    #[test]
    fn test_session_phase_when_ready() {
        assert_eq!(
            DictationStatus::derive(EnginePhase::Ready, SessionPhase::Starting, None),
            DictationStatus::Starting
        );
        assert_eq!(
            DictationStatus::derive(
                EnginePhase::Ready,
                SessionPhase::Listening,
                Some(EngineStatus::Listening)
            ),
            DictationStatus::Listening
        );
    }

    #[test]
    fn test_idle_session_reports_last_terminal_status() {
        assert_eq!(
            DictationStatus::derive(
                EnginePhase::Ready,
                SessionPhase::Idle,
                Some(EngineStatus::DoneNoResult)
            ),
            DictationStatus::DoneNoResult
        );
        assert_eq!(
            DictationStatus::derive(EnginePhase::Ready, SessionPhase::Idle, None),
            DictationStatus::Ready
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DictationStatus::NotListening.to_string(), "notListening");
        assert_eq!(DictationStatus::DoneNoResult.to_string(), "doneNoResult");
        assert_eq!(DictationStatus::Listening.to_string(), "listening");
    }
}
