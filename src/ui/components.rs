//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::SwapStatus;
use crate::utils::avatar_initial;
use eframe::egui;

/// Circular avatar placeholder showing the user's initial
pub fn avatar_circle(ui: &mut egui::Ui, username: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), size / 2.0, theme::ACCENT_MUTED);
        painter.circle_stroke(
            rect.center(),
            size / 2.0,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::ACCENT),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            avatar_initial(username),
            egui::FontId::proportional(size * 0.45),
            theme::TEXT_PRIMARY,
        );
    }

    response
}

/// Rounded skill chip
pub fn skill_chip(ui: &mut egui::Ui, name: &str) {
    let font = egui::FontId::proportional(theme::FONT_SMALL);
    let text_width = ui.fonts(|f| {
        f.layout_no_wrap(name.to_string(), font.clone(), theme::ACCENT_LIGHT)
            .rect
            .width()
    });
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(text_width + 16.0, 20.0),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(
            rect,
            theme::RADIUS_LARGE,
            egui::Color32::from_rgba_unmultiplied(0x63, 0x66, 0xf1, 26),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            name,
            font,
            theme::ACCENT_LIGHT,
        );
    }
}

/// Wraps a list of skill names into chip rows, with a placeholder when empty
pub fn skill_chip_list<'a>(
    ui: &mut egui::Ui,
    names: impl Iterator<Item = &'a str>,
    empty_text: &str,
) {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        ui.label(
            egui::RichText::new(empty_text)
                .size(theme::FONT_SECTION)
                .color(theme::TEXT_DIM),
        );
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
        for name in names {
            skill_chip(ui, name);
        }
    });
}

/// Colored pill for a swap's lifecycle state
pub fn status_badge(ui: &mut egui::Ui, status: SwapStatus) {
    let (bg, text_color) = theme::status_colors(status);
    let label = status.label();
    let font = egui::FontId::proportional(theme::FONT_SMALL);
    let text_width = ui.fonts(|f| {
        f.layout_no_wrap(label.to_string(), font.clone(), text_color)
            .rect
            .width()
    });
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(text_width + 16.0, 20.0),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_LARGE, bg);
        painter.rect_stroke(
            rect,
            theme::RADIUS_LARGE,
            egui::Stroke::new(theme::STROKE_DEFAULT, text_color.gamma_multiply(0.4)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            font,
            text_color,
        );
    }
}

/// Small uppercase section label (FORM FIELDS, SKILLS I OFFER, ...)
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// Single-line text input inside the themed input frame
pub fn text_field(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    theme::input_frame()
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .password(password)
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}

/// Multi-line text input inside the themed input frame
pub fn text_area(ui: &mut egui::Ui, value: &mut String, hint: &str, rows: usize) -> egui::Response {
    theme::input_frame()
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(value)
                    .hint_text(hint)
                    .desired_rows(rows)
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}
