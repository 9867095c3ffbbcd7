//! NLP service client module.
//!
//! This module provides:
//! * [`NlpClient`] — async trait implemented by all NLP backends.
//! * [`HttpNlpClient`] — reqwest-based client for the remote `/nlp/process/`
//!   endpoint (the production backend).
//! * [`NlpResponse`] / [`MeetingDetails`] — wire types for the response body.
//! * [`ProcessedText`] / [`ResponseOutcome`] — the mapped success payload.
//! * [`NlpError`] — error variants for transport and decoding failures.

pub mod client;
pub mod response;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{HttpNlpClient, NlpClient, NlpError};
pub use response::{MalformedResponse, MeetingDetails, NlpResponse, ProcessedText, ResponseOutcome};
