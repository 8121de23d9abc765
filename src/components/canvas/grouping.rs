use super::models::Event;
use super::time::DueWindow;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Course name to events, keeping the order courses were first seen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedAssignments {
    courses: IndexMap<String, Vec<Event>>,
}

impl GroupedAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to its course, creating the group on first use
    pub fn push(&mut self, event: Event) {
        self.courses
            .entry(event.course_name().to_string())
            .or_default()
            .push(event);
    }

    pub fn get(&self, course: &str) -> Option<&[Event]> {
        self.courses.get(course).map(Vec::as_slice)
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<Event>> {
        self.courses.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of courses
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Number of events across all courses
    pub fn event_count(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupedAssignments {
    type Item = (&'a String, &'a Vec<Event>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<Event>>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

impl FromIterator<Event> for GroupedAssignments {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut grouped = GroupedAssignments::new();
        for event in iter {
            grouped.push(event);
        }
        grouped
    }
}

/// Events due inside the window, in input order
pub fn upcoming<'a>(events: &'a [Event], window: &'a DueWindow) -> impl Iterator<Item = &'a Event> {
    events.iter().filter(move |event| window.includes(event))
}

/// Keep events due inside the window and group them by course
pub fn group_by_course(events: &[Event], window: &DueWindow) -> GroupedAssignments {
    upcoming(events, window).cloned().collect()
}

/// Group events due within the default 14 day window from `now`
pub fn group_assignments_by_course(events: &[Event], now: DateTime<Utc>) -> GroupedAssignments {
    group_by_course(events, &DueWindow::starting_at(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::canvas::models::UNKNOWN_COURSE;

    fn event(title: &str, course: Option<&str>) -> Event {
        Event {
            title: Some(title.to_string()),
            context_name: course.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_push_keeps_first_seen_order() {
        let mut grouped = GroupedAssignments::new();
        grouped.push(event("b1", Some("Biology")));
        grouped.push(event("a1", Some("Art")));
        grouped.push(event("b2", Some("Biology")));
        grouped.push(event("x", None));

        // Not alphabetical, and a revisited course keeps its slot
        assert_eq!(grouped.courses().collect::<Vec<_>>(), vec!["Biology", "Art", UNKNOWN_COURSE]);
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.event_count(), 4);

        let biology: Vec<&str> = grouped
            .get("Biology")
            .unwrap()
            .iter()
            .map(|e| e.display_title())
            .collect();
        assert_eq!(biology, vec!["b1", "b2"]);
        assert!(grouped.get("Chemistry").is_none());
    }

    #[test]
    fn test_collect_matches_push() {
        let events = vec![event("a", Some("Zoology")), event("b", Some("Algebra"))];

        let collected: GroupedAssignments = events.iter().cloned().collect();
        let mut pushed = GroupedAssignments::new();
        for e in events {
            pushed.push(e);
        }

        assert_eq!(collected, pushed);
        let order: Vec<&str> = (&collected).into_iter().map(|(course, _)| course.as_str()).collect();
        assert_eq!(order, vec!["Zoology", "Algebra"]);
    }
}
