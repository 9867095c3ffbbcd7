//! Request orchestrator — drives the submit → remote call → display cycle.
//!
//! [`RequestOrchestrator`] owns the submission side of the state machine:
//! it validates input, issues exactly one NLP request per valid submission,
//! and maps the settled call into a terminal display state.
//!
//! # Submission cycle
//!
//! ```text
//! submit(text)
//!   ├─ blank (trimmed) ──▶ Error("input required")            [no network]
//!   └─ valid ──▶ Processing
//!         └─ NlpClient::process (await, single call)
//!               ├─ status "success"      ──▶ Idle[Success]
//!               ├─ any other status      ──▶ Idle[UnexpectedFormat]
//!               └─ transport / malformed ──▶ Idle[Error]      (detail logged)
//! ```
//!
//! ProcessingState is `Idle` again on every path when `submit` returns; no
//! request is ever left in flight.  The orchestrator does not serialise
//! calls itself — the caller disables its triggering control while
//! [`is_processing`](RequestOrchestrator::is_processing) is `true`.

use std::sync::Arc;

use crate::nlp::NlpClient;

use super::state::{AssistantEvent, ProcessingState, SharedState};

// ---------------------------------------------------------------------------
// RequestOrchestrator
// ---------------------------------------------------------------------------

/// Submits input text to the NLP service and projects the response into
/// [`crate::assistant::ProcessingResult`].
///
/// Create with [`RequestOrchestrator::new`]; share the [`SharedState`] with
/// the capture controller and the UI.
pub struct RequestOrchestrator {
    state: SharedState,
    client: Arc<dyn NlpClient>,
}

impl RequestOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Arguments
    ///
    /// * `state`  — shared assistant state (also read by the UI).
    /// * `client` — NLP backend (e.g. [`crate::nlp::HttpNlpClient`]).
    pub fn new(state: SharedState, client: Arc<dyn NlpClient>) -> Self {
        Self { state, client }
    }

    /// `true` while a submission cycle is in flight.  Callers disable the
    /// submit control in that state; the orchestrator itself does not
    /// deduplicate overlapping calls.
    pub fn is_processing(&self) -> bool {
        self.state.lock().unwrap().is_processing()
    }

    /// Run one submission cycle with `text`.
    ///
    /// Blank (whitespace-only) input settles immediately to a validation
    /// error without a remote call.  Otherwise the untrimmed text is sent
    /// verbatim and the cycle settles when the single remote call does —
    /// there is no retry, cancellation or timeout.
    pub async fn submit(&self, text: &str) {
        {
            let mut st = self.state.lock().unwrap();
            st.apply(AssistantEvent::SubmitRequested {
                text: text.to_string(),
            });

            if st.processing != ProcessingState::Processing {
                log::debug!("orchestrator: blank input rejected without network call");
                return;
            }
        }

        log::debug!("orchestrator: submitting {} chars", text.len());

        let event = match self.client.process(text).await {
            Ok(response) => match response.into_outcome() {
                Ok(outcome) => AssistantEvent::ResponseReceived(outcome),
                Err(e) => {
                    log::error!("orchestrator: malformed success payload: {e}");
                    AssistantEvent::ResponseFailed
                }
            },
            Err(e) => {
                log::error!("orchestrator: NLP request failed: {e}");
                AssistantEvent::ResponseFailed
            }
        };

        self.state.lock().unwrap().apply(event);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::state::{
        new_shared_state, ProcessingResult, MSG_FETCH_FAILED, MSG_INPUT_REQUIRED,
    };
    use crate::nlp::{NlpError, NlpResponse};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    fn success_response() -> NlpResponse {
        serde_json::from_value(serde_json::json!({
            "status": "success",
            "message": "Processed successfully",
            "transcription": "hello",
            "action_items": [],
            "meeting_details": { "dates": [], "key_points": [] },
            "summary": "greeting"
        }))
        .unwrap()
    }

    /// Mock client that replays a canned response and counts calls.
    struct CannedClient {
        response: Mutex<Option<Result<NlpResponse, NlpError>>>,
        calls: AtomicUsize,
        /// Texts received, for asserting what was sent.
        received: Mutex<Vec<String>>,
    }

    impl CannedClient {
        fn new(response: Result<NlpResponse, NlpError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl NlpClient for CannedClient {
        async fn process(&self, text: &str) -> Result<NlpResponse, NlpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(text.to_string());
            self.response
                .lock()
                .unwrap()
                .take()
                .expect("mock client called more than once")
        }
    }

    /// Mock client that snapshots the shared ProcessingState while the
    /// remote call is notionally in flight.
    struct StateProbeClient {
        state: SharedState,
        observed: Mutex<Option<ProcessingState>>,
    }

    #[async_trait]
    impl NlpClient for StateProbeClient {
        async fn process(&self, _text: &str) -> Result<NlpResponse, NlpError> {
            let snapshot = self.state.lock().unwrap().processing;
            *self.observed.lock().unwrap() = Some(snapshot);
            Ok(success_response())
        }
    }

    fn make_orchestrator(client: Arc<dyn NlpClient>) -> (RequestOrchestrator, SharedState) {
        let state = new_shared_state();
        let orc = RequestOrchestrator::new(Arc::clone(&state), client);
        (orc, state)
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// A valid submission issues exactly one remote call with the untrimmed
    /// text and settles to the success display.
    #[tokio::test]
    async fn valid_submit_issues_one_call_and_settles_success() {
        let client = Arc::new(CannedClient::new(Ok(success_response())));
        let (orc, state) = make_orchestrator(Arc::clone(&client) as Arc<dyn NlpClient>);

        orc.submit("  hello world  ").await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(
            client.received.lock().unwrap().as_slice(),
            &["  hello world  ".to_string()]
        );

        let st = state.lock().unwrap();
        assert_eq!(st.processing, ProcessingState::Idle);
        assert!(matches!(st.result, ProcessingResult::Success(_)));
    }

    /// Blank input must settle locally: zero remote calls, immediate
    /// validation error, ProcessingState untouched.
    #[tokio::test]
    async fn blank_submit_makes_no_network_call() {
        for blank in ["", "   ", " \t \n "] {
            let client = Arc::new(CannedClient::new(Ok(success_response())));
            let (orc, state) = make_orchestrator(Arc::clone(&client) as Arc<dyn NlpClient>);

            orc.submit(blank).await;

            assert_eq!(client.call_count(), 0, "input: {blank:?}");
            let st = state.lock().unwrap();
            assert_eq!(st.processing, ProcessingState::Idle);
            assert_eq!(
                st.result,
                ProcessingResult::Error {
                    message: MSG_INPUT_REQUIRED.into()
                }
            );
        }
    }

    /// ProcessingState must be `Processing` exactly while the remote call is
    /// in flight, and `Idle` before and after.
    #[tokio::test]
    async fn processing_state_is_set_strictly_during_the_call() {
        let state = new_shared_state();
        let client = Arc::new(StateProbeClient {
            state: Arc::clone(&state),
            observed: Mutex::new(None),
        });
        let orc = RequestOrchestrator::new(Arc::clone(&state), Arc::clone(&client) as _);

        assert!(!orc.is_processing());
        orc.submit("hello").await;

        assert_eq!(
            *client.observed.lock().unwrap(),
            Some(ProcessingState::Processing)
        );
        assert!(!orc.is_processing());
    }

    #[tokio::test]
    async fn non_success_status_settles_unexpected_format() {
        let partial: NlpResponse =
            serde_json::from_value(serde_json::json!({ "status": "partial" })).unwrap();
        let client = Arc::new(CannedClient::new(Ok(partial)));
        let (orc, state) = make_orchestrator(client as Arc<dyn NlpClient>);

        orc.submit("hello").await;

        let st = state.lock().unwrap();
        assert_eq!(st.processing, ProcessingState::Idle);
        assert_eq!(st.result, ProcessingResult::UnexpectedFormat);
    }

    #[tokio::test]
    async fn missing_status_settles_unexpected_format() {
        let no_status: NlpResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        let client = Arc::new(CannedClient::new(Ok(no_status)));
        let (orc, state) = make_orchestrator(client as Arc<dyn NlpClient>);

        orc.submit("hello").await;

        assert_eq!(
            state.lock().unwrap().result,
            ProcessingResult::UnexpectedFormat
        );
    }

    /// Transport rejection becomes the generic error display and restores
    /// ProcessingState to Idle.
    #[tokio::test]
    async fn transport_failure_settles_generic_error() {
        let client = Arc::new(CannedClient::new(Err(NlpError::Request(
            "connection refused".into(),
        ))));
        let (orc, state) = make_orchestrator(client as Arc<dyn NlpClient>);

        orc.submit("hello").await;

        let st = state.lock().unwrap();
        assert_eq!(st.processing, ProcessingState::Idle);
        assert_eq!(
            st.result,
            ProcessingResult::Error {
                message: MSG_FETCH_FAILED.into()
            }
        );
    }

    /// A payload claiming success but missing required fields is treated the
    /// same as a transport failure, not as UnexpectedFormat.
    #[tokio::test]
    async fn malformed_success_payload_settles_generic_error() {
        let malformed: NlpResponse =
            serde_json::from_value(serde_json::json!({ "status": "success" })).unwrap();
        let client = Arc::new(CannedClient::new(Ok(malformed)));
        let (orc, state) = make_orchestrator(client as Arc<dyn NlpClient>);

        orc.submit("hello").await;

        let st = state.lock().unwrap();
        assert_eq!(st.processing, ProcessingState::Idle);
        assert_eq!(
            st.result,
            ProcessingResult::Error {
                message: MSG_FETCH_FAILED.into()
            }
        );
    }

    /// Parse failure at the client level is also a generic error.
    #[tokio::test]
    async fn parse_failure_settles_generic_error() {
        let client = Arc::new(CannedClient::new(Err(NlpError::Parse("bad json".into()))));
        let (orc, state) = make_orchestrator(client as Arc<dyn NlpClient>);

        orc.submit("hello").await;

        assert_eq!(
            state.lock().unwrap().result,
            ProcessingResult::Error {
                message: MSG_FETCH_FAILED.into()
            }
        );
    }
}
