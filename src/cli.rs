use crate::components::canvas::credentials::{load_credentials, parse_selection};
use crate::components::canvas::{group_by_course, AssignmentSource, Credential, DueWindow};
use crate::components::render::write_report;
use crate::config::Config;
use crate::error::CanvasResult;
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{error, info};

/// Interactive report for one person from the keys file.
///
/// `select` is only called once the menu has been printed. Problems with the
/// keys file or the selection are returned; a failed fetch is written to
/// `err` and the run still succeeds.
pub async fn run<F, W, E>(
    config: &Config,
    select: F,
    source: &dyn AssignmentSource,
    now: DateTime<Utc>,
    out: &mut W,
    err: &mut E,
) -> CanvasResult<()>
where
    F: FnOnce() -> CanvasResult<String>,
    W: Write,
    E: Write,
{
    writeln!(out, "=== Canvas CLI Dashboard ===")?;

    let credentials = load_credentials(&config.keys_file)?;

    writeln!(out, "\nSelect a person:\n")?;
    for (i, credential) in credentials.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, credential.name)?;
    }
    out.flush()?;

    let index = parse_selection(&select()?, credentials.len())?;
    let credential = &credentials[index];

    writeln!(out, "\nFetching assignments for {}...\n", credential.name)?;

    if let Err(e) = report(config, credential, source, now, out).await {
        error!("Failed to fetch assignments for {}: {:?}", credential.name, e);
        writeln!(err, "Error: {}", e)?;
    }

    Ok(())
}

async fn report<W: Write>(
    config: &Config,
    credential: &Credential,
    source: &dyn AssignmentSource,
    now: DateTime<Utc>,
    out: &mut W,
) -> CanvasResult<()> {
    let events = source.fetch_events(&credential.token).await?;

    let window = DueWindow::new(now, config.window());
    let grouped = group_by_course(&events, &window);
    info!("{} upcoming assignments", grouped.event_count());

    write_report(out, &grouped, window.days(), &config.tz()?)?;
    Ok(())
}
