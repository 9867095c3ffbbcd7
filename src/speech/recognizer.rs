//! Core `SpeechRecognizer` trait and the capability-provider lookup.
//!
//! The crate consumes speech recognition, it never implements it: a platform
//! integration supplies a recognizer handle through [`SpeechProvider`], and
//! the capture controller drives it for one utterance at a time.
//!
//! [`MockRecognizer`] (available under `#[cfg(test)]`) replays a canned
//! outcome — useful for unit-testing capture without a real engine.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors that can arise from the speech-recognition capability.
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    /// No recognition capability exists on this platform.  Fatal at
    /// construction time; callers guard availability before offering the
    /// capture control.
    #[error("no speech recognition capability available")]
    Unavailable,

    /// The engine reported a failure, carrying its reason code
    /// (e.g. `"no-speech"`, `"audio-capture"`, `"not-allowed"`).
    #[error("speech recognition failed: {0}")]
    Recognition(String),
}

// ---------------------------------------------------------------------------
// RecognitionSettings
// ---------------------------------------------------------------------------

/// Per-session engine configuration.
///
/// The capture controller always requests single-utterance, single-result
/// recognition; only the locale comes from user configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSettings {
    /// BCP-47 locale tag, e.g. `"en-US"`.
    pub locale: String,
    /// Keep recognising after the first utterance.  Always `false` here.
    pub continuous: bool,
    /// Deliver partial hypotheses before the final result.  Always `false`.
    pub interim_results: bool,
}

impl RecognitionSettings {
    /// Single-utterance, final-results-only settings for `locale`.
    pub fn single_utterance(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            continuous: false,
            interim_results: false,
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self::single_utterance("en-US")
    }
}

// ---------------------------------------------------------------------------
// Recognition result types
// ---------------------------------------------------------------------------

/// One hypothesis for an utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    /// Engine confidence in `[0.0, 1.0]`.
    pub confidence: f32,
}

/// The full outcome of one recognition session: a list of results, each
/// carrying its alternatives ordered best-first.
///
/// The capture controller reads only the first result's top alternative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionOutcome {
    pub results: Vec<Vec<RecognitionAlternative>>,
}

impl RecognitionOutcome {
    /// Convenience constructor for a single-result, single-alternative
    /// outcome.
    pub fn single(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            results: vec![vec![RecognitionAlternative {
                transcript: transcript.into(),
                confidence,
            }]],
        }
    }

    /// Top transcript of the first result, if any.
    pub fn top_transcript(&self) -> Option<&str> {
        self.results
            .first()
            .and_then(|alternatives| alternatives.first())
            .map(|alt| alt.transcript.as_str())
    }
}

// ---------------------------------------------------------------------------
// SpeechRecognizer trait
// ---------------------------------------------------------------------------

/// Async trait for one-shot speech recognition.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn SpeechRecognizer>`).  One call captures one
/// utterance and resolves with either the recognised alternatives or the
/// engine's failure reason — there is no cancellation or timeout.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        settings: &RecognitionSettings,
    ) -> Result<RecognitionOutcome, SpeechError>;
}

// ---------------------------------------------------------------------------
// SpeechProvider
// ---------------------------------------------------------------------------

/// Capability lookup result, decided once at startup.
///
/// Replaces an implicit global-state lookup with an explicit value that is
/// injected at construction — a fake recognizer slots in for tests.
pub enum SpeechProvider {
    /// A recognition engine is present.
    Available(Arc<dyn SpeechRecognizer>),
    /// No engine on this platform; the capture control must not be offered.
    Unavailable,
}

impl SpeechProvider {
    /// Probe the platform for a recognition engine.
    ///
    /// No engine ships with this crate, so the stock lookup always reports
    /// `Unavailable`; platform integrations construct the provider with
    /// [`SpeechProvider::with`] instead.
    pub fn detect() -> Self {
        SpeechProvider::Unavailable
    }

    /// Wrap an externally supplied recognizer.
    pub fn with(recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        SpeechProvider::Available(recognizer)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SpeechProvider::Available(_))
    }
}

// ---------------------------------------------------------------------------
// MockRecognizer  (test-only)
// ---------------------------------------------------------------------------

/// A test double that replays a canned outcome and counts invocations.
#[cfg(test)]
pub struct MockRecognizer {
    response: Result<RecognitionOutcome, SpeechError>,
    pub calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockRecognizer {
    /// Mock that resolves with a single transcript at full confidence.
    pub fn ok(transcript: impl Into<String>) -> Self {
        Self {
            response: Ok(RecognitionOutcome::single(transcript, 1.0)),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Mock that fails with the given engine reason code.
    pub fn err(reason: impl Into<String>) -> Self {
        Self {
            response: Err(SpeechError::Recognition(reason.into())),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Mock that resolves with an empty result list.
    pub fn empty() -> Self {
        Self {
            response: Ok(RecognitionOutcome::default()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn recognize(
        &self,
        _settings: &RecognitionSettings,
    ) -> Result<RecognitionOutcome, SpeechError> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
