use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{CatalogSource, HttpCatalogSource, Navigator, View};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod media;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{StartupConfig, StudioApp};

#[derive(Parser, Debug)]
#[command(name = "tryon-studio", about = "Virtual try-on studio window")]
struct Args {
    #[arg(long, env = "TRYON_SERVER_URL", default_value = "http://127.0.0.1:8443")]
    server_url: String,
    /// View to open first, e.g. `/gallery` or `/new-outfit`.
    #[arg(long, default_value = "/")]
    start_path: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let startup = StartupConfig {
        server_url: args.server_url,
        start_path: args.start_path,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("studio-runtime")
        .build()
        .context("failed to start async runtime")?;

    let http_source = HttpCatalogSource::new(&startup.server_url)
        .with_context(|| format!("invalid --server-url '{}'", startup.server_url))?;
    let base_url = http_source.base_url().clone();
    let source: Arc<dyn CatalogSource> = Arc::new(http_source);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(512);
    backend_bridge::runtime::launch(runtime.handle().clone(), base_url, cmd_rx, ui_tx)
        .context("failed to spawn backend bridge thread")?;

    let navigator = Navigator::with_start(
        source,
        runtime.handle().clone(),
        View::from_path(&startup.start_path),
    );
    let landed = navigator.current();
    tracing::info!(server = %startup.server_url, view = landed.path(), "studio starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Virtual Try-On Studio")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Virtual Try-On Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::new(startup, navigator, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("studio window failed: {err}"))?;

    drop(runtime);
    Ok(())
}
