//! Dictation lifecycle control
//!
//! Serializes initialize/start/stop requests against the external engine,
//! feeds its asynchronous events into the transcript accumulator, and
//! surfaces the derived display text, status, and error message to the
//! presentation layer.
//!
//! # Architecture
//! One `DictationController` owns one engine binding and one accumulator.
//! Requests (`initialize`, `start`, `stop`, `cancel`) are async because
//! they call into the engine; event application (`handle_event`) is a
//! synchronous, sequential state transition. The design assumes a
//! cooperative single-threaded caller; `spawn_event_pump` serializes a
//! channel of events into a shared controller for embedders that want a
//! background drain.

mod events;
mod status;

pub use events::spawn_event_pump;
pub use status::DictationStatus;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::{DisplaySettings, ListenSettings};
use crate::engine::{
    resolve_locale, EngineError, EngineEvent, EngineStatus, ListenOptions, LocaleInfo, SpeechEngine,
};
use crate::transcript::TranscriptAccumulator;
use status::{EnginePhase, SessionPhase};

/// Drives one recognition engine and accumulates its transcript
pub struct DictationController {
    engine: Arc<dyn SpeechEngine>,
    transcript: TranscriptAccumulator,
    listen_settings: ListenSettings,
    engine_phase: EnginePhase,
    session_phase: SessionPhase,
    last_engine_status: Option<EngineStatus>,
    error_message: Option<String>,
    locale_id: String,
    sound_level: f32,
}

impl DictationController {
    /// Create a controller with default settings
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self::with_settings(engine, ListenSettings::default(), DisplaySettings::default())
    }

    /// Create a controller with explicit listen and display settings
    pub fn with_settings(
        engine: Arc<dyn SpeechEngine>,
        listen_settings: ListenSettings,
        display_settings: DisplaySettings,
    ) -> Self {
        Self {
            engine,
            transcript: TranscriptAccumulator::with_placeholder(display_settings.placeholder),
            listen_settings,
            engine_phase: EnginePhase::default(),
            session_phase: SessionPhase::default(),
            last_engine_status: None,
            error_message: None,
            locale_id: String::new(),
            sound_level: 0.0,
        }
    }

    /// Prepare the engine and resolve the recognition locale
    ///
    /// Returns the readiness after the call. A controller that is already
    /// ready returns `true` without touching the engine; one with an
    /// initialize in flight returns `false` immediately.
    pub async fn initialize(&mut self) -> bool {
        match self.engine_phase {
            EnginePhase::Ready => return true,
            EnginePhase::Initializing => return false,
            EnginePhase::Uninitialized | EnginePhase::Failed => {}
        }

        self.engine_phase = EnginePhase::Initializing;
        match self.engine.initialize().await {
            Ok(true) => {
                self.locale_id = self.resolve_locale().await;
                self.engine_phase = EnginePhase::Ready;
                info!(locale = %self.locale_id, "recognition engine ready");
                true
            }
            Ok(false) => {
                self.fail_initialization("Speech recognition is not available on this system");
                false
            }
            Err(e) => {
                self.fail_initialization(&e.to_string());
                false
            }
        }
    }

    fn fail_initialization(&mut self, message: &str) {
        error!("engine initialization failed: {}", message);
        self.error_message = Some(message.to_string());
        self.engine_phase = EnginePhase::Failed;
    }

    async fn resolve_locale(&self) -> String {
        let catalog = match self.engine.locales().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("locale enumeration failed, using engine default: {}", e);
                Vec::new()
            }
        };
        let system = match self.engine.system_locale().await {
            Ok(system) => system,
            Err(e) => {
                warn!("system locale lookup failed: {}", e);
                None
            }
        };
        resolve_locale(
            self.listen_settings.preferred_locale.as_deref(),
            system.as_ref(),
            &catalog,
        )
    }

    /// Begin a new listening session
    ///
    /// A start with a start or initialize already in flight returns
    /// without side effects. Otherwise any leftover session text is
    /// committed first (a new start ends whatever session was open), the
    /// engine is initialized if needed, and listening is requested with
    /// partial results, cancel-on-error, and continuous dictation mode.
    /// Failure is surfaced as an error message; the phase never sticks in
    /// `Starting`.
    pub async fn start(&mut self) {
        if self.session_phase == SessionPhase::Starting
            || self.engine_phase == EnginePhase::Initializing
        {
            debug!("start ignored, another request is in flight");
            return;
        }

        self.session_phase = SessionPhase::Starting;
        self.error_message = None;
        self.transcript.end_session();

        if self.engine_phase != EnginePhase::Ready && !self.initialize().await {
            self.session_phase = SessionPhase::Idle;
            return;
        }

        let options = ListenOptions {
            partial_results: true,
            cancel_on_error: true,
            continuous: true,
            auto_punctuation: self.listen_settings.auto_punctuation,
            locale_id: self.locale_id.clone(),
            listen_for: self.listen_settings.listen_for(),
            pause_for: self.listen_settings.pause_for(),
        };
        match self.engine.listen(options).await {
            Ok(()) => {
                self.last_engine_status = None;
                self.session_phase = SessionPhase::Listening;
                info!(locale = %self.locale_id, "listening started");
            }
            Err(e) => {
                error!("listen request failed: {}", e);
                self.error_message = Some(e.to_string());
                self.session_phase = SessionPhase::Idle;
            }
        }
    }

    /// Stop the active session
    ///
    /// Pending session text is committed before the engine is asked to
    /// stop, so stopping never loses text. Safe to call when not
    /// listening.
    pub async fn stop(&mut self) {
        self.transcript.end_session();
        if let Err(e) = self.engine.stop().await {
            warn!("engine stop failed: {}", e);
            self.error_message = Some(e.to_string());
        }
        self.session_phase = SessionPhase::Idle;
        info!("listening stopped");
    }

    /// Abort the active session, discarding its in-flight text
    pub async fn cancel(&mut self) {
        self.transcript.on_result("", false);
        if let Err(e) = self.engine.cancel().await {
            warn!("engine cancel failed: {}", e);
            self.error_message = Some(e.to_string());
        }
        self.session_phase = SessionPhase::Idle;
        info!("listening cancelled");
    }

    /// Clear the transcript and any surfaced error
    pub fn reset(&mut self) {
        self.transcript.reset();
        self.error_message = None;
    }

    /// Apply one engine event as a sequential state transition
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Result { text, is_final } => {
                self.transcript.on_result(&text, is_final);
            }
            EngineEvent::Status(status) => {
                debug!(?status, "engine status");
                self.last_engine_status = Some(status);
                if status.ends_session() {
                    self.transcript.end_session();
                    self.session_phase = SessionPhase::Idle;
                } else {
                    self.session_phase = SessionPhase::Listening;
                }
            }
            EngineEvent::SoundLevel(level) => {
                self.sound_level = level;
            }
            EngineEvent::Error { message, permanent } => {
                let e = EngineError::Reported { message, permanent };
                error!("{}", e);
                self.error_message = Some(e.to_string());
                if permanent {
                    // Keep whatever was recognized, then force the next
                    // start through initialize again.
                    self.transcript.end_session();
                    self.session_phase = SessionPhase::Idle;
                    self.engine_phase = EnginePhase::Uninitialized;
                }
            }
        }
    }

    /// The single display string: committed plus in-flight text
    pub fn display_text(&self) -> String {
        self.transcript.display_text()
    }

    /// Current status for the presentation layer
    pub fn status(&self) -> DictationStatus {
        DictationStatus::derive(self.engine_phase, self.session_phase, self.last_engine_status)
    }

    /// The last surfaced error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the engine is initialized and ready to listen
    pub fn is_ready(&self) -> bool {
        self.engine_phase == EnginePhase::Ready
    }

    /// The resolved locale id; empty means the engine default
    pub fn resolved_locale_id(&self) -> &str {
        &self.locale_id
    }

    /// The last reported input sound level
    pub fn sound_level(&self) -> f32 {
        self.sound_level
    }

    /// Enumerate the locales the engine can recognize
    pub async fn locales(&self) -> Result<Vec<LocaleInfo>, EngineError> {
        self.engine.locales().await
    }

    /// Read access to the accumulated transcript
    pub fn transcript(&self) -> &TranscriptAccumulator {
        &self.transcript
    }
}
