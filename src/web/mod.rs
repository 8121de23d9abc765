pub mod dashboard;
pub mod viewer;

use crate::components::canvas::AssignmentSource;
use crate::config::Config;
use crate::error::Error;
use axum::http::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// State shared by the web handlers. Nothing in here is mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn AssignmentSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn AssignmentSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}

/// HTTP status an error is reported with
pub fn status_for(err: &Error) -> StatusCode {
    if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Bind to localhost on the configured port and serve until the process ends
pub async fn serve(app: axum::Router, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await
}
