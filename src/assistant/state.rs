//! Assistant state machine and shared application state.
//!
//! [`AssistantState`] is the single source of truth: current input text,
//! listening flag, processing flag, and the last terminal display result.
//! All mutation goes through [`AssistantState::apply`], one pure transition
//! per [`AssistantEvent`] — this makes the state machine directly testable
//! without a UI harness.
//!
//! [`SharedState`] is a type alias for `Arc<Mutex<AssistantState>>` — cheap
//! to clone and safe to share across tasks.

use std::sync::{Arc, Mutex};

use crate::nlp::{ProcessedText, ResponseOutcome};

/// Display message for a submission attempted with blank input.
pub const MSG_INPUT_REQUIRED: &str = "input required";

/// Generic display message for any transport or decoding failure.  The
/// underlying cause is logged, never shown.
pub const MSG_FETCH_FAILED: &str = "Error fetching data. Please check the server.";

// ---------------------------------------------------------------------------
// ListeningState
// ---------------------------------------------------------------------------

/// Whether the speech capability is currently capturing an utterance.
///
/// ```text
/// Idle ──capture start──▶ Listening
/// Listening ──transcript / capture error──▶ Idle
/// ```
///
/// Capture cannot be started while already `Listening`; the capture
/// controller enforces this before invoking the capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListeningState {
    #[default]
    Idle,
    Listening,
}

// ---------------------------------------------------------------------------
// ProcessingState
// ---------------------------------------------------------------------------

/// Whether a submission cycle is in flight.
///
/// `Idle → Processing` on a valid submission; `Processing → Idle`
/// unconditionally when the remote call settles — never left pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingState {
    #[default]
    Idle,
    Processing,
}

// ---------------------------------------------------------------------------
// ProcessingResult
// ---------------------------------------------------------------------------

/// Terminal display state of the most recent submission cycle.
///
/// Mutated only by orchestrator events, exactly once per cycle; shown to the
/// user until the next submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessingResult {
    /// No submission has completed yet.
    #[default]
    None,
    /// The service returned a well-formed success payload.
    Success(ProcessedText),
    /// The payload decoded but its `status` was not `"success"`.
    UnexpectedFormat,
    /// Validation, transport or decoding failure.  `message` is what the
    /// user sees; diagnostics go to the log.
    Error { message: String },
}

// ---------------------------------------------------------------------------
// AssistantEvent
// ---------------------------------------------------------------------------

/// Everything that can change [`AssistantState`].
///
/// Capture events come from the [`crate::speech::CaptureController`];
/// submission events from the [`crate::assistant::RequestOrchestrator`];
/// `InputEdited` from direct user edits.
#[derive(Debug, Clone)]
pub enum AssistantEvent {
    /// The user edited the input text directly.
    InputEdited(String),
    /// Speech capture began; the capability is awaiting an utterance.
    CaptureStarted,
    /// Recognition succeeded — the transcript replaces (never appends to)
    /// the input text.
    TranscriptReceived(String),
    /// Recognition failed; the reason was logged by the capture controller.
    CaptureFailed,
    /// A submission was requested with the given text.  Blank (after
    /// trimming) input short-circuits to a validation error with no
    /// processing transition.
    SubmitRequested { text: String },
    /// The remote call settled with a decodable payload.
    ResponseReceived(ResponseOutcome),
    /// The remote call failed (transport, non-2xx, or malformed payload).
    ResponseFailed,
}

// ---------------------------------------------------------------------------
// AssistantState
// ---------------------------------------------------------------------------

/// Shared application state — the single source of truth for the UI.
///
/// Held behind [`SharedState`].  Created with empty defaults at startup;
/// nothing is persisted across sessions.
#[derive(Debug, Clone, Default)]
pub struct AssistantState {
    /// Current input text — typed or transcribed.
    pub input_text: String,
    /// Speech capture phase.
    pub listening: ListeningState,
    /// Submission cycle phase.
    pub processing: ProcessingState,
    /// Terminal display state of the last completed cycle.
    pub result: ProcessingResult,
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the capture control may be offered to the user.
    pub fn can_start_capture(&self) -> bool {
        self.listening == ListeningState::Idle
    }

    /// `true` while a submission cycle is in flight.  The UI uses this to
    /// disable the submit control.
    pub fn is_processing(&self) -> bool {
        self.processing == ProcessingState::Processing
    }

    /// Apply one event — the only way state is mutated.
    pub fn apply(&mut self, event: AssistantEvent) {
        match event {
            AssistantEvent::InputEdited(text) => {
                self.input_text = text;
            }

            AssistantEvent::CaptureStarted => {
                self.listening = ListeningState::Listening;
            }

            AssistantEvent::TranscriptReceived(transcript) => {
                self.input_text = transcript;
                self.listening = ListeningState::Idle;
            }

            AssistantEvent::CaptureFailed => {
                self.listening = ListeningState::Idle;
            }

            AssistantEvent::SubmitRequested { text } => {
                if text.trim().is_empty() {
                    // Fast local validation — no processing transition, no
                    // remote call.  This is the cycle's single result
                    // mutation.
                    self.result = ProcessingResult::Error {
                        message: MSG_INPUT_REQUIRED.to_string(),
                    };
                } else {
                    self.processing = ProcessingState::Processing;
                }
            }

            AssistantEvent::ResponseReceived(outcome) => {
                self.processing = ProcessingState::Idle;
                self.result = match outcome {
                    ResponseOutcome::Success(text) => ProcessingResult::Success(text),
                    ResponseOutcome::UnexpectedFormat => ProcessingResult::UnexpectedFormat,
                };
            }

            AssistantEvent::ResponseFailed => {
                self.processing = ProcessingState::Idle;
                self.result = ProcessingResult::Error {
                    message: MSG_FETCH_FAILED.to_string(),
                };
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`AssistantState`].
///
/// Cheap to clone (`Arc` clone).  Lock with `.lock().unwrap()` for a short
/// critical section; do **not** hold the lock across `.await` points.
pub type SharedState = Arc<Mutex<AssistantState>>;

/// Construct a new [`SharedState`] wrapping a default [`AssistantState`].
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(AssistantState::new()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
