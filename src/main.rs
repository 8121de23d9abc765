use canvasboard::cli;
use canvasboard::components::canvas::CanvasClient;
use canvasboard::error::{local_config_error, CanvasResult};
use canvasboard::startup;
use chrono::Utc;
use clap::Parser;
use inquire::Text;
use std::io;
use std::path::PathBuf;

/// Print upcoming Canvas assignments for one person from the keys file
#[derive(Parser)]
#[command(name = "canvasboard", version)]
struct Cli {
    /// Credentials file holding a JSON list of [name, token] pairs
    #[arg(long)]
    keys: Option<PathBuf>,

    /// Pick a person by menu number instead of prompting
    #[arg(long)]
    select: Option<String>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Cli::parse();

    // Initialize logging
    startup::init_logging("warn")?;

    let mut config = startup::load_config()?;
    if let Some(keys) = args.keys {
        config.keys_file = keys;
    }

    let client = CanvasClient::from_config(&config)?;
    let select = move || match args.select {
        Some(answer) => Ok(answer),
        None => prompt_selection(),
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    cli::run(
        &config,
        select,
        &client,
        Utc::now(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .await?;

    Ok(())
}

fn prompt_selection() -> CanvasResult<String> {
    Text::new("Enter number:")
        .prompt()
        .map_err(|e| local_config_error(&format!("Failed to read selection: {}", e)))
}
