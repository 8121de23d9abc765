use super::models::Event;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default lookahead in days
pub const DEFAULT_WINDOW_DAYS: i64 = 14;

/// Longest accepted lookahead, ten years
pub const MAX_WINDOW_DAYS: i64 = 3_660;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Inclusive `[now, now + length]` range used to pick upcoming events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    now: DateTime<Utc>,
    length: Duration,
}

impl DueWindow {
    pub fn new(now: DateTime<Utc>, length: Duration) -> Self {
        Self { now, length }
    }

    /// Window of the default length starting at `now`
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self::new(now, Duration::days(DEFAULT_WINDOW_DAYS))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Last instant of the window, `None` past the representable range
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.now.checked_add_signed(self.length)
    }

    pub fn days(&self) -> i64 {
        self.length.num_days()
    }

    pub fn contains(&self, due: DateTime<Utc>) -> bool {
        let until = due.signed_duration_since(self.now);
        until >= Duration::zero() && until <= self.length
    }

    /// Whether the event's effective due date falls inside the window.
    /// Events without a usable due date never match.
    pub fn includes(&self, event: &Event) -> bool {
        effective_due(event).is_some_and(|due| self.contains(due))
    }
}

/// Fractional days from `now` until `due`; negative when overdue
pub fn days_until_due(due: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    due.signed_duration_since(now).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Parse a Canvas timestamp. Accepts RFC 3339 and bare dates (UTC midnight).
pub fn parse_due(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Effective due date of an event, `None` if missing or unparseable
pub fn effective_due(event: &Event) -> Option<DateTime<Utc>> {
    event.due_source().and_then(parse_due)
}

/// Human readable due date in the given timezone
pub fn format_due(due: Option<DateTime<Utc>>, tz: &Tz) -> String {
    match due {
        Some(due) => due
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => "No due date".to_string(),
    }
}
