//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::resolve_image_url;
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::media::{decode_preview_image, PreviewImage};

pub fn launch(
    runtime: Handle,
    base_url: Url,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<()> {
    thread::Builder::new()
        .name("studio-bridge".to_string())
        .spawn(move || {
            let client = HttpClient::new();
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchImage { reference } => {
                        let client = client.clone();
                        let base_url = base_url.clone();
                        let ui_tx = ui_tx.clone();
                        runtime.spawn(async move {
                            let event = match fetch_image(&client, &base_url, &reference).await {
                                Ok(image) => UiEvent::ImageLoaded { reference, image },
                                Err(reason) => {
                                    warn!(%reference, %reason, "catalog image unavailable");
                                    UiEvent::ImageFailed { reference, reason }
                                }
                            };
                            deliver(ui_tx, event).await;
                        });
                    }
                }
            }
            info!("backend bridge stopped: UI command queue closed");
        })?;
    Ok(())
}

/// Waits for room in the UI queue so an image result is never dropped; blocks a
/// pool thread rather than the runtime worker. Returns `false` once the UI is gone.
pub(crate) async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent) -> bool {
    match tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok()).await {
        Ok(true) => true,
        Ok(false) => {
            debug!("UI event queue closed; image result discarded");
            false
        }
        Err(err) => {
            warn!(error = %err, "UI event delivery task failed");
            false
        }
    }
}

async fn fetch_image(
    client: &HttpClient,
    base_url: &Url,
    reference: &str,
) -> Result<PreviewImage, String> {
    let url = resolve_image_url(base_url, reference)
        .map_err(|err| format!("invalid image reference '{reference}': {err}"))?;
    debug!(%url, "fetching catalog image");

    let bytes = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| format!("failed to fetch {url}: {err}"))?
        .error_for_status()
        .map_err(|err| format!("image endpoint returned error: {err}"))?
        .bytes()
        .await
        .map_err(|err| format!("failed to read image body from {url}: {err}"))?;

    tokio::task::spawn_blocking(move || decode_preview_image(&bytes))
        .await
        .map_err(|err| format!("image decoder task failed: {err}"))?
}
