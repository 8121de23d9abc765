use super::{status_for, AppState};
use crate::components::canvas::{group_by_course, DueWindow};
use crate::components::render::render_assignments;
use crate::error::{missing_token_error, CanvasResult, Error};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Body of `POST /fetch-assignments`
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Build the dashboard router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/fetch-assignments", post(fetch_assignments_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for the token entry page
pub async fn index_handler() -> impl IntoResponse {
    Html(include_str!("../../assets/dashboard/index.html"))
}

/// Fetch, filter and render the caller's upcoming assignments
pub async fn fetch_assignments_handler(
    State(state): State<AppState>,
    payload: Result<Json<FetchRequest>, JsonRejection>,
) -> Response {
    let token = match payload {
        Ok(Json(request)) => request
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
        Err(rejection) => {
            warn!("Rejected fetch request body: {}", rejection);
            None
        }
    };

    let Some(token) = token else {
        return error_response(missing_token_error());
    };

    match render_for_token(&state, &token, Utc::now()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to fetch assignments: {}", e);
            error_response(e)
        }
    }
}

/// Fetch events with `token` and render those due in the window from `now`
pub async fn render_for_token(state: &AppState, token: &str, now: DateTime<Utc>) -> CanvasResult<String> {
    let events = state.source.fetch_events(token).await?;
    let window = DueWindow::new(now, state.config.window());
    let grouped = group_by_course(&events, &window);
    info!(
        "{} of {} events due in the next {} days across {} courses",
        grouped.event_count(),
        events.len(),
        window.days(),
        grouped.len()
    );
    render_assignments(&grouped, window.days(), &state.config.tz()?)
}

// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}

fn error_response(err: Error) -> Response {
    (status_for(&err), err.to_string()).into_response()
}
