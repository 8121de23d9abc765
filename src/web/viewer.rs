use super::AppState;
use crate::components::render::render_raw;
use crate::error::CanvasResult;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Build the JSON viewer router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(raw_events_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Return the upstream response unfiltered
pub async fn raw_events_handler(State(state): State<AppState>) -> Response {
    match raw_events(&state).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Failed to fetch raw events: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn raw_events(state: &AppState) -> CanvasResult<String> {
    let token = state.config.viewer_token()?;
    let events = state.source.fetch_raw(token).await?;
    render_raw(&events)
}
