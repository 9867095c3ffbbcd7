//! Speech capture module.
//!
//! This module provides:
//! * [`SpeechRecognizer`] — async trait implemented by recognition engines.
//! * [`SpeechProvider`] — capability lookup, `Available` / `Unavailable`.
//! * [`CaptureController`] — drives one-shot capture into the input text.
//! * [`RecognitionSettings`] / [`RecognitionOutcome`] — session config and
//!   result shapes.
//! * [`SpeechError`] — error variants for the capability.

pub mod capture;
pub mod recognizer;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use capture::CaptureController;
pub use recognizer::{
    RecognitionAlternative, RecognitionOutcome, RecognitionSettings, SpeechError, SpeechProvider,
    SpeechRecognizer,
};

// test-only re-export so other test modules can import MockRecognizer
// without `use voice_assistant::speech::recognizer::MockRecognizer`.
#[cfg(test)]
pub use recognizer::MockRecognizer;
