//! Assistant core — state machine, event reducer and request orchestration.
//!
//! # Architecture
//!
//! ```text
//! user edit ──InputEdited──────────────┐
//! CaptureController ──CaptureStarted──▶│
//!          ──TranscriptReceived───────▶│  AssistantState::apply()
//!          ──CaptureFailed────────────▶│  (one pure transition per event)
//! RequestOrchestrator ─SubmitRequested▶│
//!          ──ResponseReceived─────────▶│
//!          ──ResponseFailed───────────▶│
//!                                      └──▶ SharedState (Arc<Mutex<…>>)
//!                                              ▲ read by the UI layer
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voice_assistant::assistant::{new_shared_state, RequestOrchestrator};
//! use voice_assistant::config::AppConfig;
//! use voice_assistant::nlp::HttpNlpClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let state = new_shared_state();
//!     let client = Arc::new(HttpNlpClient::from_config(&config.endpoint));
//!
//!     let orchestrator = RequestOrchestrator::new(state.clone(), client);
//!     orchestrator.submit("schedule a meeting tomorrow at 3pm").await;
//!
//!     let st = state.lock().unwrap();
//!     println!("{:?}", st.result);
//! }
//! ```

pub mod orchestrator;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use orchestrator::RequestOrchestrator;
pub use state::{
    new_shared_state, AssistantEvent, AssistantState, ListeningState, ProcessingResult,
    ProcessingState, SharedState,
};
