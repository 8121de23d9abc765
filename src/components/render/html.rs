use crate::components::canvas::time::{effective_due, format_due};
use crate::components::canvas::GroupedAssignments;
use crate::error::CanvasResult;
use askama::Template;
use chrono_tz::Tz;
use url::Url;

/// One assignment row, already formatted for display
struct AssignmentItem {
    title: String,
    url: String,
    due: String,
}

struct CourseSection {
    name: String,
    items: Vec<AssignmentItem>,
}

/// Fragment swapped into the dashboard page after a fetch
#[derive(Template)]
#[template(path = "assignments.html")]
struct AssignmentsFragment {
    window_days: i64,
    courses: Vec<CourseSection>,
}

/// Render grouped assignments as collapsible course sections
pub fn render_assignments(grouped: &GroupedAssignments, window_days: i64, tz: &Tz) -> CanvasResult<String> {
    let courses = grouped
        .iter()
        .map(|(course, events)| CourseSection {
            name: course.clone(),
            items: events
                .iter()
                .map(|event| AssignmentItem {
                    title: event.display_title().to_string(),
                    url: link_target(event.html_url.as_deref()),
                    due: format_due(effective_due(event), tz),
                })
                .collect(),
        })
        .collect();

    let fragment = AssignmentsFragment { window_days, courses };
    Ok(fragment.render()?)
}

/// Only http(s) links are rendered; anything else points nowhere
fn link_target(raw: Option<&str>) -> String {
    raw.and_then(|raw| Url::parse(raw.trim()).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
        .unwrap_or_else(|| "#".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_target() {
        assert_eq!(
            link_target(Some("https://learn.vccs.edu/courses/11")),
            "https://learn.vccs.edu/courses/11"
        );
        assert_eq!(link_target(Some("http://canvas.test/a")), "http://canvas.test/a");

        // Script and data URLs never become links
        assert_eq!(link_target(Some("javascript:alert(1)")), "#");
        assert_eq!(link_target(Some(" JavaScript:alert(1)")), "#");
        assert_eq!(link_target(Some("data:text/html,<b>x</b>")), "#");
        assert_eq!(link_target(Some("/relative/path")), "#");
        assert_eq!(link_target(None), "#");
    }
}
