use crate::error::CanvasResult;
use serde_json::Value;

/// Serialise fetched events back to JSON untouched
pub fn render_raw(events: &[Value]) -> CanvasResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}
