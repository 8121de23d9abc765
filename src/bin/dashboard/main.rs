use canvasboard::components::canvas::CanvasClient;
use canvasboard::startup;
use canvasboard::web::{self, dashboard, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize tracing
    startup::init_logging("info,tower_http=debug")?;

    info!("Starting Canvas dashboard");

    let config = startup::load_config()?;
    let client = CanvasClient::from_config(&config)?;
    info!("Fetching from {}", client.url());

    let port = config.port;
    let state = AppState::new(config, Arc::new(client));
    let app = dashboard::router(state);

    info!("Canvas dashboard running at http://localhost:{}", port);
    web::serve(app, port).await.map_err(canvasboard::error::Error::from)?;

    Ok(())
}
