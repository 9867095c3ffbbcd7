//! Application entry point — smart voice assistant, line-oriented front end.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the NLP client ([`HttpNlpClient`]) from config.
//! 4. Probe the speech capability; offer the mic command only when present.
//! 5. Read lines from stdin: `:mic` triggers capture, anything else is
//!    submitted to the NLP service; the terminal display state is printed
//!    after each cycle.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use voice_assistant::{
    assistant::{new_shared_state, RequestOrchestrator},
    config::AppConfig,
    display,
    nlp::HttpNlpClient,
    speech::{CaptureController, SpeechProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("voice assistant starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("NLP endpoint: {}", config.endpoint.base_url);

    // 3. Shared state + orchestrator
    let state = new_shared_state();
    let client = Arc::new(HttpNlpClient::from_config(&config.endpoint));
    let orchestrator = RequestOrchestrator::new(Arc::clone(&state), client);

    // 4. Speech capability — degrade gracefully to text-only input.
    let capture = match SpeechProvider::detect() {
        provider @ SpeechProvider::Available(_) => {
            match CaptureController::new(Arc::clone(&state), provider, &config.speech) {
                Ok(controller) => Some(controller),
                Err(e) => {
                    log::warn!("speech capture unavailable: {e}");
                    None
                }
            }
        }
        SpeechProvider::Unavailable => {
            log::info!("no speech recognition capability; text input only");
            None
        }
    };

    // 5. Input loop
    println!(
        "Enter text to process{}; Ctrl-D to quit.",
        if capture.is_some() { ", or :mic to speak" } else { "" }
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == ":mic" {
            match &capture {
                Some(controller) if controller.can_start_capture() => {
                    controller.start_capture().await;
                    let st = state.lock().unwrap();
                    println!("> {}", st.input_text);
                    continue;
                }
                Some(_) => {
                    println!("(already listening)");
                    continue;
                }
                None => {
                    println!("(speech capture is not available)");
                    continue;
                }
            }
        }

        orchestrator.submit(&line).await;

        let st = state.lock().unwrap();
        println!("{}", display::render_result(&st.result));
        if let voice_assistant::assistant::ProcessingResult::Success(text) = &st.result {
            println!("\nCalendar Events:");
            println!("{}", display::render_calendar_events(&text.calendar_events));
            println!("\nTasks:");
            println!("{}", display::render_tasks(&text.tasks));
        }
    }

    Ok(())
}
