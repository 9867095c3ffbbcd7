//! Plain-text rendering of terminal display states.
//!
//! Placeholder strings are part of the behavioural contract (an empty
//! action-item list renders the literal `"None"`, empty derived sections
//! render their no-items lines); layout and styling are not, and live with
//! whatever presentation layer consumes these strings.

use crate::assistant::ProcessingResult;
use crate::nlp::ProcessedText;

/// Shown before any submission has completed.
pub const WAITING_FOR_INPUT: &str = "Waiting for input...";

/// Shown when the payload decoded but its status was not `"success"`.
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format.";

/// Placeholder for an empty list inside the success summary.
pub const NONE_PLACEHOLDER: &str = "None";

/// Placeholder line for the calendar-events section.
pub const NO_CALENDAR_EVENTS: &str = "No calendar events found.";

/// Placeholder line for the tasks section.
pub const NO_TASKS: &str = "No tasks found.";

// ---------------------------------------------------------------------------
// Response rendering
// ---------------------------------------------------------------------------

/// Render the current [`ProcessingResult`] as display text.
pub fn render_result(result: &ProcessingResult) -> String {
    match result {
        ProcessingResult::None => WAITING_FOR_INPUT.to_string(),
        ProcessingResult::Success(text) => render_success(text),
        ProcessingResult::UnexpectedFormat => UNEXPECTED_FORMAT.to_string(),
        ProcessingResult::Error { message } => message.clone(),
    }
}

/// Render the success payload as labelled lines.
pub fn render_success(text: &ProcessedText) -> String {
    format!(
        "Transcription: {}\n\
         Action Items: {}\n\
         Meeting Dates: {}\n\
         Key Points: {}\n\
         Summary: {}",
        text.transcription,
        join_or_none(&text.action_items, ", "),
        join_or_none(&text.meeting_dates, ", "),
        join_or_none(&text.key_points, ". "),
        text.summary,
    )
}

/// Render the calendar-events section, one line per event.
pub fn render_calendar_events(events: &[String]) -> String {
    lines_or_placeholder(events, NO_CALENDAR_EVENTS)
}

/// Render the tasks section, one line per task.
pub fn render_tasks(tasks: &[String]) -> String {
    lines_or_placeholder(tasks, NO_TASKS)
}

fn join_or_none(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        items.join(separator)
    }
}

fn lines_or_placeholder(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join("\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::state::MSG_INPUT_REQUIRED;

    fn sample() -> ProcessedText {
        ProcessedText {
            transcription: "schedule a meeting tomorrow".into(),
            action_items: vec!["schedule".into(), "invite team".into()],
            meeting_dates: vec!["tomorrow".into()],
            key_points: vec!["quarterly review".into(), "budget".into()],
            summary: "Meeting scheduled with extracted details.".into(),
            calendar_events: vec![],
            tasks: vec![],
        }
    }

    #[test]
    fn none_renders_waiting_placeholder() {
        assert_eq!(render_result(&ProcessingResult::None), WAITING_FOR_INPUT);
    }

    #[test]
    fn unexpected_format_renders_fixed_message() {
        assert_eq!(
            render_result(&ProcessingResult::UnexpectedFormat),
            UNEXPECTED_FORMAT
        );
    }

    #[test]
    fn error_renders_its_message() {
        let result = ProcessingResult::Error {
            message: MSG_INPUT_REQUIRED.into(),
        };
        assert_eq!(render_result(&result), MSG_INPUT_REQUIRED);
    }

    #[test]
    fn success_renders_all_sections() {
        let rendered = render_success(&sample());
        assert!(rendered.contains("Transcription: schedule a meeting tomorrow"));
        assert!(rendered.contains("Action Items: schedule, invite team"));
        assert!(rendered.contains("Meeting Dates: tomorrow"));
        assert!(rendered.contains("Key Points: quarterly review. budget"));
        assert!(rendered.contains("Summary: Meeting scheduled with extracted details."));
    }

    /// Empty lists render the literal "None", not an empty string.
    #[test]
    fn empty_action_items_render_none_literal() {
        let mut text = sample();
        text.action_items.clear();
        let rendered = render_success(&text);
        assert!(rendered.contains("Action Items: None"));
    }

    #[test]
    fn empty_dates_and_key_points_render_none_literal() {
        let mut text = sample();
        text.meeting_dates.clear();
        text.key_points.clear();
        let rendered = render_success(&text);
        assert!(rendered.contains("Meeting Dates: None"));
        assert!(rendered.contains("Key Points: None"));
    }

    #[test]
    fn empty_sections_render_no_items_placeholders() {
        assert_eq!(render_calendar_events(&[]), NO_CALENDAR_EVENTS);
        assert_eq!(render_tasks(&[]), NO_TASKS);
    }

    #[test]
    fn non_empty_sections_render_one_line_per_item() {
        let events = vec!["standup 9am".to_string(), "review 2pm".to_string()];
        assert_eq!(render_calendar_events(&events), "standup 9am\nreview 2pm");

        let tasks = vec!["send agenda".to_string()];
        assert_eq!(render_tasks(&tasks), "send agenda");
    }
}
