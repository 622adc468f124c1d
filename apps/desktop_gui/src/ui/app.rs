use std::collections::HashMap;
use std::time::Duration;

use client_core::{ActiveView, Navigator, View};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_image_failure, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::media::PreviewImage;
use crate::ui::views;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    pub start_path: String,
}

pub(crate) enum ImageState {
    Loading,
    Ready(TextureHandle),
    Failed(String),
}

/// Textures for catalog images, keyed by the reference the catalog carries.
pub(crate) struct ImageCache {
    cmd_tx: Sender<BackendCommand>,
    entries: HashMap<String, ImageState>,
    status: String,
}

impl ImageCache {
    pub(crate) fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            cmd_tx,
            entries: HashMap::new(),
            status: String::new(),
        }
    }

    /// Queues a fetch the first time a reference is seen. `None` means the queue refused the
    /// request and it will be retried next frame.
    pub(crate) fn get_or_request(&mut self, reference: &str) -> Option<&ImageState> {
        if !self.entries.contains_key(reference) {
            let cmd = BackendCommand::FetchImage {
                reference: reference.to_string(),
            };
            if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
                return None;
            }
            self.entries
                .insert(reference.to_string(), ImageState::Loading);
        }
        self.entries.get(reference)
    }

    fn store_loaded(&mut self, ctx: &egui::Context, reference: String, image: PreviewImage) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
        let texture = ctx.load_texture(
            format!("catalog-image:{reference}"),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.entries.insert(reference, ImageState::Ready(texture));
    }

    fn store_failed(&mut self, reference: String, reason: &str) {
        self.entries.insert(
            reference,
            ImageState::Failed(classify_image_failure(reason).to_string()),
        );
    }

    fn take_status(&mut self) -> Option<String> {
        if self.status.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.status))
        }
    }
}

pub struct StudioApp {
    ui_rx: Receiver<UiEvent>,
    navigator: Navigator,
    images: ImageCache,
    server_url: String,
    status: String,
    banner: Option<String>,
}

impl StudioApp {
    pub fn new(
        startup: StartupConfig,
        navigator: Navigator,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            ui_rx,
            navigator,
            images: ImageCache::new(cmd_tx),
            server_url: startup.server_url,
            status: "Starting backend worker...".to_string(),
            banner: None,
        }
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status = message,
                UiEvent::ImageLoaded { reference, image } => {
                    self.images.store_loaded(ctx, reference, image);
                }
                UiEvent::ImageFailed { reference, reason } => {
                    self.status = format!("Image '{reference}' unavailable: {reason}");
                    self.images.store_failed(reference, &reason);
                }
            }
        }
        if let Some(status) = self.images.take_status() {
            self.status = status;
        }
    }

    fn process_view_events(&mut self) {
        self.navigator.process_events();
        if let ActiveView::OutfitCreator(creator) = self.navigator.active_mut() {
            if let Some(message) = creator.take_notification() {
                self.banner = Some(message);
            }
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("studio_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Virtual Try-On");
                ui.separator();
                let mut requested = self.navigator.current();
                for view in View::ALL {
                    ui.selectable_value(&mut requested, view, view.label());
                }
                if requested != self.navigator.current() {
                    let landed = self.navigator.navigate(requested);
                    tracing::debug!(path = landed.path(), "navigated");
                }
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("studio_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.server_url).small().weak());
                ui.separator();
                ui.label(egui::RichText::new(&self.status).small());
            });
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.banner.clone() {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgb(46, 104, 62))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 170, 112)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.process_view_events();

        self.show_nav_bar(ctx);
        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            egui::ScrollArea::vertical().show(ui, |ui| match self.navigator.active_mut() {
                ActiveView::TryOn(controller) => views::show_try_on(ui, controller, &mut self.images),
                ActiveView::BrandGallery(browser) => views::show_gallery(ui, browser, &mut self.images),
                ActiveView::OutfitCreator(creator) => views::show_creator(ui, creator),
            });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
