#![deny(clippy::all)]

//! Replay harness for the dictation engine
//!
//! Reads a JSON-lines script of driver commands and engine events from a
//! file argument or stdin, applies them to a [`DictationController`] in
//! order, and prints the resulting status and display text after each
//! step. Useful for exercising event interleavings (re-sent finals,
//! terminal-status floods, permanent errors) end to end without a real
//! recognizer.
//!
//! Script steps:
//! ```json
//! {"step": "start"}
//! {"step": "result", "text": "cat sat", "is_final": false}
//! {"step": "status", "status": "done"}
//! {"step": "sound_level", "level": 0.4}
//! {"step": "error", "message": "mic lost", "permanent": true}
//! {"step": "stop"}
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use speechpad::config::Config;
use speechpad::preferences;
use speechpad::{
    DictationController, EngineError, EngineEvent, EngineStatus, ListenOptions, LocaleInfo,
    SpeechEngine,
};

/// Engine stand-in for script replay
///
/// Accepts every request; the script itself supplies the events a real
/// engine would emit.
struct ReplayEngine;

#[async_trait]
impl SpeechEngine for ReplayEngine {
    async fn initialize(&self) -> Result<bool, EngineError> {
        Ok(true)
    }

    async fn listen(&self, _options: ListenOptions) -> Result<(), EngineError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), EngineError> {
        Ok(())
    }

    async fn cancel(&self) -> Result<(), EngineError> {
        Ok(())
    }

    async fn locales(&self) -> Result<Vec<LocaleInfo>, EngineError> {
        Ok(vec![LocaleInfo::new("en_US", "English (United States)")])
    }

    async fn system_locale(&self) -> Result<Option<LocaleInfo>, EngineError> {
        Ok(Some(LocaleInfo::new("en_US", "English (United States)")))
    }
}

/// One line of the replay script
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum ScriptStep {
    Start,
    Stop,
    Cancel,
    Reset,
    Result {
        text: String,
        #[serde(default)]
        is_final: bool,
    },
    Status {
        status: EngineStatus,
    },
    SoundLevel {
        level: f32,
    },
    Error {
        message: String,
        #[serde(default)]
        permanent: bool,
    },
}

async fn apply_step(controller: &mut DictationController, step: ScriptStep) {
    match step {
        ScriptStep::Start => controller.start().await,
        ScriptStep::Stop => controller.stop().await,
        ScriptStep::Cancel => controller.cancel().await,
        ScriptStep::Reset => controller.reset(),
        ScriptStep::Result { text, is_final } => {
            controller.handle_event(EngineEvent::Result { text, is_final });
        }
        ScriptStep::Status { status } => {
            controller.handle_event(EngineEvent::Status(status));
        }
        ScriptStep::SoundLevel { level } => {
            controller.handle_event(EngineEvent::SoundLevel(level));
        }
        ScriptStep::Error { message, permanent } => {
            controller.handle_event(EngineEvent::Error { message, permanent });
        }
    }
}

fn print_state(controller: &DictationController) {
    let line = serde_json::json!({
        "status": controller.status().to_string(),
        "display": controller.display_text(),
        "error": controller.error_message(),
    });
    println!("{}", line);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::embedded().context("embedded config.toml is invalid")?;
    let mut listen_settings = config.listen;
    preferences::load_preferences().apply_to(&mut listen_settings);

    let mut controller = DictationController::with_settings(
        Arc::new(ReplayEngine),
        listen_settings,
        config.display,
    );

    let reader: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("cannot open script file {path}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("failed to read script line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step: ScriptStep = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid script step on line {}", number + 1))?;
        apply_step(&mut controller, step).await;
        print_state(&controller);
    }

    info!(
        transcript = controller.transcript().committed_text(),
        "replay finished"
    );

    Ok(())
}
