//! Terminal runner: prints the grid every interval until interrupted.

mod runner;
mod telemetry;

use anyhow::{Context, Result};
use life_core::CliConfig;
use life_world::{Simulator, TextRenderer};
use std::path::PathBuf;
use tokio::signal;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = load_config()?;

    let mut sim = Simulator::from_config(&config.simulation)?;
    let mut renderer = TextRenderer::new(std::io::stdout().lock())
        .with_clear_screen(config.render.clear_screen)
        .with_generation_header(config.render.show_generation);

    let reason = runner::run(&mut sim, &mut renderer, &config.render, shutdown_signal()).await?;

    let summary = sim.summary();
    info!(
        event = "run_summary",
        reason = ?reason,
        generations = summary.generations,
        width = summary.width,
        height = summary.height,
        live_cells = summary.live_cells,
        "Simulation stopped"
    );

    Ok(())
}

/// Config path from the first argument, else `LIFE_CONFIG`, else defaults
fn load_config() -> Result<CliConfig> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("LIFE_CONFIG").map(PathBuf::from));

    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CliConfig::from_json_file(&path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => {
            info!("No configuration given, using defaults");
            let config = CliConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
