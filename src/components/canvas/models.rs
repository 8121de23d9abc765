use serde::{Deserialize, Serialize};

/// Course name used when an event carries no `context_name`
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Assignment details attached to assignment-backed events
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentDetails {
    pub id: Option<serde_json::Value>,
    pub name: Option<String>,
    pub due_at: Option<String>,
    pub points_possible: Option<f64>,
}

/// Upcoming event as returned by `/users/self/upcoming_events`
///
/// Only the fields the dashboard reads are typed. The raw JSON is what
/// the viewer passes through, so nothing here needs to be lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub context_name: Option<String>,
    pub context_code: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub assignment: Option<AssignmentDetails>,
}

/// Where an event's effective due date comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind<'a> {
    /// Backed by an assignment; `assignment.due_at` wins over `end_at`
    Assignment(&'a AssignmentDetails),
    /// Plain calendar entry; only `end_at` applies
    Calendar,
}

impl Event {
    pub fn kind(&self) -> EventKind<'_> {
        match &self.assignment {
            Some(details) => EventKind::Assignment(details),
            None => EventKind::Calendar,
        }
    }

    /// Raw due timestamp string, before parsing
    pub fn due_source(&self) -> Option<&str> {
        let from_assignment = match self.kind() {
            EventKind::Assignment(details) => details.due_at.as_deref(),
            EventKind::Calendar => None,
        };
        from_assignment
            .filter(|s| !s.is_empty())
            .or_else(|| self.end_at.as_deref().filter(|s| !s.is_empty()))
    }

    /// Grouping key for this event
    pub fn course_name(&self) -> &str {
        self.context_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_COURSE)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}
