//! Wire types for the NLP service response and the success-payload mapping.
//!
//! The service replies with a JSON document whose `status` field decides how
//! the rest of the payload is interpreted:
//!
//! ```text
//! {
//!   "status": "success",
//!   "message": "...",                       // ignored
//!   "transcription": "...",
//!   "action_items": ["..."],
//!   "meeting_details": { "dates": ["..."], "key_points": ["..."] },
//!   "summary": "...",
//!   "calendar_events": ["..."],             // optional
//!   "tasks": ["..."]                        // optional
//! }
//! ```
//!
//! Every field is optional at the serde level so that a payload with a
//! missing or unknown `status` still decodes — that case must map to
//! [`ResponseOutcome::UnexpectedFormat`], not to a parse error.  A payload
//! that *claims* success but lacks required fields is malformed and is
//! rejected by [`NlpResponse::into_outcome`].

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Raw response document as decoded from the wire.
///
/// Unknown fields (including `message`) are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NlpResponse {
    /// `"success"` for a well-formed result; anything else (or absent) is an
    /// unexpected format.
    pub status: Option<String>,
    pub transcription: Option<String>,
    pub action_items: Option<Vec<String>>,
    pub meeting_details: Option<MeetingDetails>,
    pub summary: Option<String>,
    #[serde(default)]
    pub calendar_events: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Nested `meeting_details` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingDetails {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

// ---------------------------------------------------------------------------
// MalformedResponse
// ---------------------------------------------------------------------------

/// A payload declared `status: "success"` but is missing a required field.
#[derive(Debug, Clone, Error)]
#[error("success payload missing required field `{field}`")]
pub struct MalformedResponse {
    /// Name of the first missing required field.
    pub field: &'static str,
}

// ---------------------------------------------------------------------------
// ProcessedText
// ---------------------------------------------------------------------------

/// The fully-mapped success payload, ready for display.
///
/// `calendar_events` and `tasks` are derived lists: they default to empty
/// when the service omits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    pub transcription: String,
    pub action_items: Vec<String>,
    pub meeting_dates: Vec<String>,
    pub key_points: Vec<String>,
    pub summary: String,
    pub calendar_events: Vec<String>,
    pub tasks: Vec<String>,
}

// ---------------------------------------------------------------------------
// ResponseOutcome
// ---------------------------------------------------------------------------

/// Result of mapping a decoded [`NlpResponse`] in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// `status == "success"` with all required fields present.
    Success(ProcessedText),
    /// Any other `status` value, including a missing field.
    UnexpectedFormat,
}

impl NlpResponse {
    /// Map the decoded document into a [`ResponseOutcome`].
    ///
    /// # Errors
    ///
    /// [`MalformedResponse`] when the payload claims success but omits a
    /// required field — the caller treats this the same as a transport
    /// failure (generic error display, detail logged).
    pub fn into_outcome(self) -> Result<ResponseOutcome, MalformedResponse> {
        if self.status.as_deref() != Some("success") {
            return Ok(ResponseOutcome::UnexpectedFormat);
        }

        let transcription = self
            .transcription
            .ok_or(MalformedResponse {
                field: "transcription",
            })?;
        let action_items = self.action_items.ok_or(MalformedResponse {
            field: "action_items",
        })?;
        let details = self.meeting_details.ok_or(MalformedResponse {
            field: "meeting_details",
        })?;
        let summary = self.summary.ok_or(MalformedResponse { field: "summary" })?;

        Ok(ResponseOutcome::Success(ProcessedText {
            transcription,
            action_items,
            meeting_dates: details.dates,
            key_points: details.key_points,
            summary,
            calendar_events: self.calendar_events,
            tasks: self.tasks,
        }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
