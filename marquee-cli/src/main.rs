use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod menu;
mod seed;

use menu::Menu;

fn main() -> anyhow::Result<()> {
    let config = marquee_store::Config::load().context("Failed to load config")?;

    // Logs go to stderr so they never interleave with menu prompts.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut service = seed::build_service(&config.catalog).context("Invalid catalog configuration")?;
    tracing::info!(movies = service.catalog().movies().len(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(&mut service)?;

    Ok(())
}
