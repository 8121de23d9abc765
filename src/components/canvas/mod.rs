pub mod client;
pub mod credentials;
pub mod grouping;
pub mod models;
pub mod time;

pub use client::{AssignmentSource, CanvasClient};
pub use credentials::Credential;
pub use grouping::{group_assignments_by_course, group_by_course, GroupedAssignments};
pub use models::{Event, EventKind, UNKNOWN_COURSE};
pub use time::DueWindow;
