//! Capture controller — converts a one-shot spoken utterance into input text.
//!
//! [`CaptureController`] bridges a [`SpeechRecognizer`] into the shared
//! assistant state.  Capture is fire-and-forget from the caller's point of
//! view: `start_capture` applies the state transitions itself and never
//! returns an error — recognition failures are logged and silently reset
//! the listening flag without disturbing any in-flight submission cycle.

use std::sync::Arc;

use crate::assistant::state::{AssistantEvent, SharedState};
use crate::config::SpeechConfig;

use super::recognizer::{RecognitionSettings, SpeechError, SpeechProvider, SpeechRecognizer};

// ---------------------------------------------------------------------------
// CaptureController
// ---------------------------------------------------------------------------

/// Owns the listening side of the state machine.
///
/// Construction fails when no recognition capability exists — the caller
/// checks [`SpeechProvider::is_available`] before offering the control.
pub struct CaptureController {
    state: SharedState,
    recognizer: Arc<dyn SpeechRecognizer>,
    settings: RecognitionSettings,
}

impl CaptureController {
    /// Create a capture controller over `provider`.
    ///
    /// Recognition is fixed to single-utterance, final-results-only; the
    /// locale comes from `config`.
    ///
    /// # Errors
    ///
    /// [`SpeechError::Unavailable`] when `provider` carries no engine.
    pub fn new(
        state: SharedState,
        provider: SpeechProvider,
        config: &SpeechConfig,
    ) -> Result<Self, SpeechError> {
        let recognizer = match provider {
            SpeechProvider::Available(recognizer) => recognizer,
            SpeechProvider::Unavailable => return Err(SpeechError::Unavailable),
        };

        Ok(Self {
            state,
            recognizer,
            settings: RecognitionSettings::single_utterance(config.locale.clone()),
        })
    }

    /// `true` when capture may be triggered — the UI disables the mic
    /// control otherwise.
    pub fn can_start_capture(&self) -> bool {
        self.state.lock().unwrap().can_start_capture()
    }

    /// Capture one utterance into the input text.
    ///
    /// A no-op when already listening, so a re-trigger cannot invoke the
    /// capability twice.  On success the top transcript of the first result
    /// replaces the input text; on failure the reason is logged and the
    /// listening flag resets.  Either way the state is `Idle` again when
    /// this returns.
    pub async fn start_capture(&self) {
        {
            let mut st = self.state.lock().unwrap();
            if !st.can_start_capture() {
                log::debug!("capture: already listening, ignoring trigger");
                return;
            }
            st.apply(AssistantEvent::CaptureStarted);
        }

        log::debug!("capture: listening ({})", self.settings.locale);

        let event = match self.recognizer.recognize(&self.settings).await {
            Ok(outcome) => match outcome.top_transcript() {
                Some(transcript) => {
                    log::debug!("capture: transcript = {transcript:?}");
                    AssistantEvent::TranscriptReceived(transcript.to_string())
                }
                None => {
                    log::warn!("capture: recognizer returned no results");
                    AssistantEvent::CaptureFailed
                }
            },
            Err(e) => {
                // Diagnostic only — never surfaced to the processing result.
                log::warn!("capture: recognition error: {e}");
                AssistantEvent::CaptureFailed
            }
        };

        self.state.lock().unwrap().apply(event);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
