use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_roster::clock::SystemClock;
use shift_roster::view::{Presenter, DEFAULT_LAYOUT};
use shift_roster::{App, Config, ScheduleStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shift_roster=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env();

    let loaded;
    let store = match &config.roster_path {
        Some(path) => {
            loaded = ScheduleStore::from_path(path)
                .with_context(|| format!("failed to load roster from {}", path.display()))?;
            &loaded
        }
        None => ScheduleStore::reference().context("embedded roster is malformed")?,
    };
    info!(days = store.len(), sites = store.sites().len(), "roster ready");

    let presenter = Presenter::mount(DEFAULT_LAYOUT, config.timings()).context("invalid page layout")?;
    let mut app = App::new(store, presenter, SystemClock, config.clock_interval);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app.run(stdin, &mut stdout).await.context("viewer failed")?;

    Ok(())
}
