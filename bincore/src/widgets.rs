//! Shared widgets — key caps, display frames, error dialog.

use crate::theme::Palette;
use egui::{Color32, Response, Rounding, Stroke, Ui, Vec2, Widget};

/// A rounded calculator key. Fill color comes from the palette group the
/// key belongs to (digit, function, equals, clear); the pill shape follows
/// from the key size.
pub struct CalcKey<'a> {
    label: &'a str,
    fill: Color32,
    text_color: Color32,
    size: Vec2,
    font_size: f32,
}

impl<'a> CalcKey<'a> {
    pub fn new(label: &'a str, fill: Color32, text_color: Color32, size: Vec2) -> Self {
        Self {
            label,
            fill,
            text_color,
            size,
            font_size: 24.0,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Widget for CalcKey<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let rounding = Rounding::same(rect.height() * 0.5);

            painter.rect_filled(rect, rounding, self.fill);
            if response.is_pointer_button_down_on() {
                painter.rect_filled(rect, rounding, Color32::from_black_alpha(60));
            } else if response.hovered() {
                painter.rect_filled(rect, rounding, Color32::from_white_alpha(14));
            }
            painter.rect_stroke(
                rect,
                rounding,
                Stroke::new(1.0, self.fill.gamma_multiply(0.6)),
            );

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                self.text_color,
            );
        }

        response
    }
}

/// Frame for the main result display.
pub fn display_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.display_bg)
        .stroke(Stroke::new(1.0, palette.outline))
        .rounding(Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(16.0, 8.0))
}

/// Frame for the secondary expression line above the main display.
pub fn expression_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::none()
        .fill(palette.expr_bg)
        .stroke(Stroke::new(1.0, palette.outline))
        .rounding(Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(12.0, 4.0))
}

/// Blocking error notification. Draw every frame while the error is set;
/// returns `true` once the user dismisses it.
pub fn error_window(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    dismissed = true;
                }
            });
        });
    dismissed
}
