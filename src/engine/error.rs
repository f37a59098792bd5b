//! Error types for the recognition engine boundary

/// Errors reported by, or while driving, the recognition engine
///
/// All of these are recovered locally: the controller converts them into a
/// user-visible message and stays alive. A `Reported` error with
/// `permanent` set means the engine must be re-initialized before the next
/// listen request; a transient one allows retry as-is.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Listen request failed: {0}")]
    Start(String),

    #[error("Engine error: {message}")]
    Reported { message: String, permanent: bool },
}

impl EngineError {
    /// Whether this error invalidates the current initialization
    pub fn is_permanent(&self) -> bool {
        match self {
            EngineError::Initialization(_) => true,
            EngineError::Start(_) => false,
            EngineError::Reported { permanent, .. } => *permanent,
        }
    }
}
