use crate::components::canvas::time::{effective_due, format_due};
use crate::components::canvas::GroupedAssignments;
use chrono_tz::Tz;
use std::io::{self, Write};

/// Print one block per course, in the order courses were first seen
pub fn write_report<W: Write>(
    out: &mut W,
    grouped: &GroupedAssignments,
    window_days: i64,
    tz: &Tz,
) -> io::Result<()> {
    if grouped.is_empty() {
        writeln!(out, "No upcoming assignments in the next {} days!", window_days)?;
        return Ok(());
    }

    writeln!(out, "Upcoming Assignments (Next {} Days):", window_days)?;

    for (course, events) in grouped {
        writeln!(out)?;
        writeln!(out, "=== {} ===", course)?;
        for event in events {
            writeln!(out, "- {}", event.display_title())?;
            writeln!(out, "  Due: {}", format_due(effective_due(event), tz))?;
            writeln!(out, "  URL: {}", event.html_url.as_deref().unwrap_or("-"))?;
            writeln!(out)?;
        }
    }

    Ok(())
}
