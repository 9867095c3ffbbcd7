//! Smart voice assistant client core.
//!
//! Captures text — typed or transcribed through an external
//! speech-recognition capability — submits it to a remote NLP service, and
//! maps the structured response (transcription, action items, meeting
//! details, summary, derived calendar events and tasks) into a terminal
//! display state.
//!
//! # Architecture
//!
//! ```text
//! SpeechRecognizer ──▶ CaptureController ──┐
//!                                          │  AssistantEvent
//! user input ──────────────────────────────┤      │
//!                                          ▼      ▼
//!                                   AssistantState::apply()
//!                                          ▲
//! NlpClient (HTTP) ◀── RequestOrchestrator─┘
//! ```
//!
//! * [`speech`] — capture controller and the recognition capability seam.
//! * [`assistant`] — state machine, event reducer, request orchestrator.
//! * [`nlp`] — HTTP client and response mapping for the NLP endpoint.
//! * [`display`] — plain-text rendering of terminal display states.
//! * [`config`] — settings and TOML persistence.

pub mod assistant;
pub mod config;
pub mod display;
pub mod nlp;
pub mod speech;
