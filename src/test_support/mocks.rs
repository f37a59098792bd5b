//! Mock implementations for unit testing
//!
//! `MockEngine` implements [`crate::engine::SpeechEngine`] so controller
//! behavior can be tested without a real recognizer. Events are not
//! emitted by the mock; tests feed them to the controller directly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::engine::{EngineError, ListenOptions, LocaleInfo, SpeechEngine};

/// Scripted recognition engine that records the calls it receives
pub struct MockEngine {
    available: bool,
    initialize_failures: Mutex<usize>,
    fail_listen: bool,
    locales: Vec<LocaleInfo>,
    system_locale: Option<LocaleInfo>,
    initialize_calls: AtomicUsize,
    listen_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    cancel_calls: AtomicUsize,
    last_listen_options: Mutex<Option<ListenOptions>>,
}

impl MockEngine {
    fn base() -> Self {
        Self {
            available: true,
            initialize_failures: Mutex::new(0),
            fail_listen: false,
            locales: Vec::new(),
            system_locale: None,
            initialize_calls: AtomicUsize::new(0),
            listen_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
            cancel_calls: AtomicUsize::new(0),
            last_listen_options: Mutex::new(None),
        }
    }

    /// An engine that initializes and listens without complaint
    pub fn ready() -> Self {
        Self::base()
    }

    /// An engine whose initialize reports recognition as unavailable
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::base()
        }
    }

    /// An engine whose first initialize errors, then succeeds
    pub fn failing_initialize_once() -> Self {
        Self {
            initialize_failures: Mutex::new(1),
            ..Self::base()
        }
    }

    /// An engine whose listen requests always error
    pub fn failing_listen() -> Self {
        Self {
            fail_listen: true,
            ..Self::base()
        }
    }

    /// Set the locale catalog the engine enumerates
    pub fn with_locales(mut self, locales: Vec<LocaleInfo>) -> Self {
        self.locales = locales;
        self
    }

    /// Set the system-preferred locale the engine reports
    pub fn with_system_locale(mut self, locale: LocaleInfo) -> Self {
        self.system_locale = Some(locale);
        self
    }

    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    pub fn listen_calls(&self) -> usize {
        self.listen_calls.load(Ordering::SeqCst)
    }

    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }

    /// The options of the most recent listen request
    pub fn last_listen_options(&self) -> Option<ListenOptions> {
        self.last_listen_options.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechEngine for MockEngine {
    async fn initialize(&self) -> Result<bool, EngineError> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        let mut failures = self.initialize_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(EngineError::Initialization(
                "recognizer backend refused to start".to_string(),
            ));
        }
        Ok(self.available)
    }

    async fn listen(&self, options: ListenOptions) -> Result<(), EngineError> {
        self.listen_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_listen_options.lock().unwrap() = Some(options);
        if self.fail_listen {
            return Err(EngineError::Start("audio session busy".to_string()));
        }
        Ok(())
    }

    async fn stop(&self) -> Result<(), EngineError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn cancel(&self) -> Result<(), EngineError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn locales(&self) -> Result<Vec<LocaleInfo>, EngineError> {
        Ok(self.locales.clone())
    }

    async fn system_locale(&self) -> Result<Option<LocaleInfo>, EngineError> {
        Ok(self.system_locale.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ready_mock_reports_available() {
        let engine = MockEngine::ready();
        assert!(engine.initialize().await.unwrap());
        assert_eq!(engine.initialize_calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_mock() {
        let engine = MockEngine::unavailable();
        assert!(!engine.initialize().await.unwrap());
    }

    #[tokio::test]
    async fn test_failing_initialize_once_recovers() {
        let engine = MockEngine::failing_initialize_once();
        assert!(engine.initialize().await.is_err());
        assert!(engine.initialize().await.unwrap());
    }

    #[tokio::test]
    async fn test_listen_records_options() {
        let engine = MockEngine::ready();
        let options = ListenOptions {
            partial_results: true,
            cancel_on_error: true,
            continuous: true,
            auto_punctuation: false,
            locale_id: "en_US".to_string(),
            listen_for: std::time::Duration::from_secs(30),
            pause_for: std::time::Duration::from_secs(2),
        };
        engine.listen(options.clone()).await.unwrap();
        assert_eq!(engine.last_listen_options(), Some(options));
    }

    #[tokio::test]
    async fn test_mock_as_trait_object() {
        let engine: Box<dyn SpeechEngine> = Box::new(
            MockEngine::ready().with_locales(vec![LocaleInfo::new("en_US", "English")]),
        );
        assert_eq!(engine.locales().await.unwrap().len(), 1);
        engine.stop().await.unwrap();
        engine.cancel().await.unwrap();
    }
}
