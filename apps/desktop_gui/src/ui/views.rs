//! Panels for the three views. Each takes the view's controller and only calls its operations.

use client_core::{CatalogBrowser, CatalogState, OutfitCreator, PreferenceField, TryOnController};
use eframe::egui;
use shared::{
    domain::{Category, TryOnPhase},
    protocol::CatalogItem,
};

use crate::ui::app::{ImageCache, ImageState};
use crate::ui::theme::{
    brand_accent, brand_tag, lighten_color, phase_badge, CARD_IMAGE_EDGE, CARD_WIDTH,
    PREVIEW_IMAGE_EDGE,
};

fn image_slot(ui: &mut egui::Ui, images: &mut ImageCache, reference: &str, edge: f32) {
    let size = egui::vec2(edge, edge);
    match images.get_or_request(reference) {
        Some(ImageState::Ready(texture)) => {
            ui.add(egui::Image::new(texture).max_size(size));
        }
        Some(ImageState::Failed(reason)) => {
            ui.allocate_ui(size, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new(reason.as_str()).weak());
                });
            });
        }
        Some(ImageState::Loading) | None => {
            ui.allocate_ui(size, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
        }
    }
}

fn catalog_placeholder(ui: &mut egui::Ui, state: &CatalogState) -> bool {
    match state {
        CatalogState::Loaded(_) => false,
        CatalogState::NotRequested | CatalogState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading catalog...");
            });
            true
        }
    }
}

/// Card frame tinted with the brand accent; `selected` draws a heavier border.
fn item_card(
    ui: &mut egui::Ui,
    images: &mut ImageCache,
    item: &CatalogItem,
    selected: bool,
    add_actions: impl FnOnce(&mut egui::Ui),
) {
    let accent = brand_accent(&item.brand);
    let stroke = if selected {
        egui::Stroke::new(3.0, accent)
    } else {
        egui::Stroke::new(1.0, lighten_color(accent, 0.5))
    };
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                image_slot(ui, images, &item.image_url, CARD_IMAGE_EDGE);
                ui.label(egui::RichText::new(&item.name).strong());
                ui.horizontal(|ui| {
                    brand_tag(ui, &item.brand);
                    ui.label(&item.price);
                });
                if !item.description.is_empty() {
                    ui.label(egui::RichText::new(&item.description).small().weak());
                }
                add_actions(ui);
            });
        });
}

pub(crate) fn show_try_on(
    ui: &mut egui::Ui,
    controller: &mut TryOnController,
    images: &mut ImageCache,
) {
    ui.horizontal(|ui| {
        ui.heading("Virtual Try-On");
        phase_badge(ui, controller.phase());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let saved_label = format!("Saved Outfits ({})", controller.saved_outfits().len());
            if ui
                .add_enabled(controller.catalog().is_loaded(), egui::Button::new(saved_label))
                .clicked()
            {
                controller.open_saved_outfits();
            }
        });
    });
    ui.separator();

    if catalog_placeholder(ui, controller.catalog()) {
        return;
    }

    let items: Vec<CatalogItem> = controller.all_items().into_iter().cloned().collect();
    let selected_id = controller.selected().map(|item| item.id);
    let mut picked: Option<CatalogItem> = None;

    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Choose an item").strong());
        columns[0].horizontal_wrapped(|ui| {
            for item in &items {
                let selected = selected_id == Some(item.id);
                item_card(ui, images, item, selected, |ui| {
                    let label = if selected { "Selected" } else { "Select" };
                    if ui.add_enabled(!selected, egui::Button::new(label)).clicked() {
                        picked = Some(item.clone());
                    }
                });
            }
        });

        let ui = &mut columns[1];
        match controller.selected().cloned() {
            None => {
                ui.label("Select an item to try it on.");
            }
            Some(item) => {
                ui.label(egui::RichText::new(&item.name).heading());
                brand_tag(ui, &item.brand);
                image_slot(ui, images, &item.image_url, PREVIEW_IMAGE_EDGE);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(controller.can_start_try_on(), egui::Button::new("Try On"))
                        .clicked()
                    {
                        controller.start_try_on();
                    }
                    if controller.phase() == TryOnPhase::Running {
                        ui.spinner();
                        ui.label(controller.phase().label());
                    }
                });
            }
        }

        if let Some(result) = controller.result_image().map(str::to_string) {
            ui.separator();
            ui.label(egui::RichText::new("Your look").strong());
            image_slot(ui, images, &result, PREVIEW_IMAGE_EDGE);
            if ui.button("Try Another").clicked() {
                controller.dismiss_result();
            }
        }
    });

    if let Some(item) = picked {
        controller.select_item(item);
    }

    show_saved_outfits_window(ui, controller, images);
}

fn show_saved_outfits_window(
    ui: &mut egui::Ui,
    controller: &mut TryOnController,
    images: &mut ImageCache,
) {
    let mut open = controller.is_saved_outfits_open();
    if !open {
        return;
    }
    egui::Window::new("Saved Outfits")
        .collapsible(false)
        .resizable(true)
        .open(&mut open)
        .show(ui.ctx(), |ui| {
            if controller.saved_outfits().is_empty() {
                ui.label("No saved outfits yet.");
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                for outfit in controller.saved_outfits() {
                    ui.horizontal(|ui| {
                        image_slot(ui, images, &outfit.image_url, 96.0);
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&outfit.name).strong());
                            ui.label(egui::RichText::new(&outfit.description).weak());
                        });
                    });
                    ui.separator();
                }
            });
        });
    if !open {
        controller.close_saved_outfits();
    }
}

pub(crate) fn show_gallery(ui: &mut egui::Ui, browser: &mut CatalogBrowser, images: &mut ImageCache) {
    ui.heading("Brand Showcase");
    ui.separator();

    if catalog_placeholder(ui, browser.catalog()) {
        return;
    }

    let mut category = browser.category();
    ui.horizontal(|ui| {
        for option in Category::ALL {
            let label = format!("{} ({})", option.label(), browser.item_count(option));
            ui.selectable_value(&mut category, option, label);
        }
    });
    if category != browser.category() {
        browser.set_category(category);
    }
    ui.add_space(8.0);

    let items = browser.filtered_items();
    if items.is_empty() {
        ui.label(format!("No {} in the catalog.", category.label().to_lowercase()));
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for item in items {
            item_card(ui, images, item, false, |_| {});
        }
    });
}

pub(crate) fn show_creator(ui: &mut egui::Ui, creator: &mut OutfitCreator) {
    ui.heading("AI Outfit Creator");
    ui.label("Pick the conditions and we'll put a look together.");
    ui.separator();

    for field in PreferenceField::ALL {
        ui.label(egui::RichText::new(field.label()).strong());
        let current = creator.preferences().get(field).map(str::to_string);
        ui.horizontal_wrapped(|ui| {
            for option in field.options() {
                let selected = current.as_deref() == Some(*option);
                if ui
                    .add_enabled(!creator.is_creating(), egui::Button::new(*option).selected(selected))
                    .clicked()
                {
                    creator.set_preference(field, *option);
                }
            }
        });
        ui.add_space(6.0);
    }

    ui.separator();
    egui::Grid::new("creator_summary").num_columns(2).show(ui, |ui| {
        for (field, value) in creator.summary() {
            ui.label(field.label());
            ui.label(value);
            ui.end_row();
        }
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let label = if creator.is_creating() { "Creating..." } else { "Create Outfit" };
        if ui
            .add_enabled(creator.can_create(), egui::Button::new(label))
            .clicked()
        {
            if let Err(rejected) = creator.create() {
                tracing::warn!(%rejected, "outfit creation rejected");
            }
        }
        if creator.is_creating() {
            ui.spinner();
        }
    });
}
