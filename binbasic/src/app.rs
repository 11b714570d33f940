//! Two-field calculator application

use bincore::engine::{self, CalcError, Operator};
use bincore::locale::Lang;
use bincore::theme::Theme;
use bincore::widgets::{display_frame, error_window, CalcKey};
use bincore::RepaintController;
use egui::Context;

pub struct BinBasicApp {
    entry1: String,
    entry2: String,
    /// Formatted result of the last computation, empty until one completes.
    result: String,
    error: Option<CalcError>,
    repaint: RepaintController,
}

impl BinBasicApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::Dark.apply(&cc.egui_ctx);
        Self {
            entry1: String::new(),
            entry2: String::new(),
            result: String::new(),
            error: None,
            repaint: RepaintController::new(),
        }
    }

    /// Strip anything but '0'/'1' that slipped into the entry fields, so
    /// the fields only ever hold binary literals.
    fn sanitize(&mut self) {
        self.entry1.retain(|c| c == '0' || c == '1');
        self.entry2.retain(|c| c == '0' || c == '1');
    }

    fn compute(&mut self, op: Operator) {
        if self.error.is_some() {
            return;
        }
        if self.entry1.is_empty() || self.entry2.is_empty() {
            self.error = Some(CalcError::InvalidOperand);
            return;
        }
        match engine::evaluate(&self.entry1, op, &self.entry2) {
            Ok(result) => self.result = result,
            Err(err) => {
                self.result.clear();
                self.error = Some(err);
            }
        }
    }

    fn clear(&mut self) {
        self.entry1.clear();
        self.entry2.clear();
        self.result.clear();
    }

    fn render_entries(&mut self, ui: &mut egui::Ui) {
        let palette = Theme::Dark.palette();
        for (entry, hint) in [
            (&mut self.entry1, "first number (binary)"),
            (&mut self.entry2, "second number (binary)"),
        ] {
            display_frame(palette).show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), 32.0],
                    egui::TextEdit::singleline(entry)
                        .hint_text(hint)
                        .font(egui::FontId::monospace(24.0))
                        .frame(false),
                );
            });
            ui.add_space(6.0);
        }
    }

    fn render_ops(&mut self, ui: &mut egui::Ui) {
        let palette = Theme::Dark.palette();
        let spacing = ui.spacing().item_spacing.x;
        let key_size = egui::vec2((ui.available_width() - spacing * 3.0) / 4.0, 56.0);

        let rows: [[Option<Operator>; 4]; 2] = [
            [
                Some(Operator::Add),
                Some(Operator::Subtract),
                Some(Operator::Multiply),
                Some(Operator::Divide),
            ],
            [
                Some(Operator::And),
                Some(Operator::Or),
                Some(Operator::Xor),
                None, // clear key
            ],
        ];

        for row in rows {
            ui.horizontal(|ui| {
                for slot in row {
                    match slot {
                        Some(op) => {
                            let label = match op {
                                Operator::Add => "add",
                                Operator::Subtract => "subtract",
                                Operator::Multiply => "multiply",
                                Operator::Divide => "divide",
                                Operator::And => "AND",
                                Operator::Or => "OR",
                                Operator::Xor => "XOR",
                            };
                            let key = CalcKey::new(label, palette.func_key, palette.text, key_size)
                                .font_size(16.0);
                            if ui.add(key).clicked() {
                                self.compute(op);
                            }
                        }
                        None => {
                            let key = CalcKey::new("Clear", palette.clear_key, palette.text, key_size)
                                .font_size(16.0);
                            if ui.add(key).clicked() {
                                self.clear();
                            }
                        }
                    }
                }
            });
        }
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("= {}", self.result))
                    .font(egui::FontId::proportional(32.0))
                    .strong(),
            );
        });
    }
}

impl eframe::App for BinBasicApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        let palette = Theme::Dark.palette();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.window_bg)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_entries(ui);
                ui.add_space(6.0);
                self.render_ops(ui);
                ui.add_space(12.0);
                self.render_result(ui);
            });

        self.sanitize();

        if let Some(err) = self.error {
            if error_window(ctx, Lang::En.error_message(err)) {
                self.error = None;
                self.repaint.mark_needs_repaint();
            }
        }

        self.repaint.end_frame(ctx);
    }
}
