use canvasboard::components::canvas::CanvasClient;
use canvasboard::error::Error;
use canvasboard::startup;
use canvasboard::web::{self, viewer, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    startup::init_logging("info,tower_http=debug")?;

    let config = startup::load_config()?;
    // Fail at startup rather than on every request
    config.viewer_token()?;

    let client = CanvasClient::from_config(&config)?;
    let port = config.port;
    let app = viewer::router(AppState::new(config, Arc::new(client)));

    info!("Canvas JSON viewer running at http://localhost:{}", port);
    web::serve(app, port).await.map_err(Error::from)?;

    Ok(())
}
