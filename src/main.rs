use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use ticketdesk::api::{ApiClient, BusApi};
use ticketdesk::cli::Cli;
use ticketdesk::config::{Config, StartScreen};
use ticketdesk::logging::init_tracing;
use ticketdesk::registry::BusRegistry;
use ticketdesk::ui::runtime::{run, RunOptions};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if cli.admin {
        config.ui.start_screen = StartScreen::Admin;
    }
    config.validate()?;

    init_tracing();
    tracing::info!(base_url = %config.api.base_url, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let client = {
        let _guard = runtime.enter();
        ApiClient::new(&config.api.base_url).context("failed to build HTTP client")?
    };
    let api: Arc<dyn BusApi> = Arc::new(client);
    let registry = BusRegistry::new(Arc::clone(&api));

    let options = RunOptions {
        screen: config.ui.start_screen.into(),
        endpoint: config.api.base_url.clone(),
        tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
    };
    run(runtime.handle(), api, registry, options).context("terminal UI failed")?;

    tracing::info!("exiting");
    runtime.shutdown_background();
    Ok(())
}
