use eframe::egui::{self, Color32};
use shared::domain::TryOnPhase;

pub const GUCCI_RED: Color32 = Color32::from_rgb(198, 40, 40);
pub const VERSACE_PURPLE: Color32 = Color32::from_rgb(123, 31, 162);
pub const PRADA_BLUE: Color32 = Color32::from_rgb(21, 101, 192);
pub const NEUTRAL_ACCENT: Color32 = Color32::from_rgb(96, 96, 104);

pub const CARD_WIDTH: f32 = 180.0;
pub const CARD_IMAGE_EDGE: f32 = 160.0;
pub const PREVIEW_IMAGE_EDGE: f32 = 320.0;

/// Accent colour for a brand; brand matching ignores case and surrounding whitespace.
pub fn brand_accent(brand: &str) -> Color32 {
    match brand.trim().to_ascii_lowercase().as_str() {
        "gucci" => GUCCI_RED,
        "versace" => VERSACE_PURPLE,
        "prada" => PRADA_BLUE,
        _ => NEUTRAL_ACCENT,
    }
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn phase_color(phase: TryOnPhase) -> Color32 {
    match phase {
        TryOnPhase::Idle => Color32::from_rgb(120, 124, 132),
        TryOnPhase::Running => Color32::from_rgb(214, 150, 40),
        TryOnPhase::Completed => Color32::from_rgb(56, 142, 60),
    }
}

pub fn phase_badge(ui: &mut egui::Ui, phase: TryOnPhase) -> egui::Response {
    let fill = phase_color(phase);
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(phase.label()).color(Color32::WHITE).strong());
        })
        .response
}

pub fn brand_tag(ui: &mut egui::Ui, brand: &str) -> egui::Response {
    let accent = brand_accent(brand);
    egui::Frame::NONE
        .fill(lighten_color(accent, 0.8))
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(brand).color(accent).small().strong());
        })
        .response
}
