pub mod console;
pub mod html;
pub mod passthrough;

pub use console::write_report;
pub use html::render_assignments;
pub use passthrough::render_raw;
