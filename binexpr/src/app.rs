//! Expression calculator application

use bincore::engine::{Bit, CalcError, Engine, Event, Operator, Output};
use bincore::locale;
use bincore::settings::CalcSettings;
use bincore::theme;
use bincore::widgets::{display_frame, error_window, expression_frame, CalcKey};
use bincore::RepaintController;
use egui::{Context, Key};

#[derive(Clone, Copy)]
enum KeyGroup {
    Digit,
    Func,
    Equals,
    Clear,
}

pub struct BinExprApp {
    engine: Engine,
    settings: CalcSettings,
    /// Pending part of the expression ("10 +"), or "10 + 1 =" after equals.
    expression: String,
    /// The operand being edited, or the last result.
    entry: String,
    error: Option<CalcError>,
    repaint: RepaintController,
}

impl BinExprApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = CalcSettings::load();
        settings.theme.apply(&cc.egui_ctx);
        Self {
            engine: Engine::new(),
            settings,
            expression: String::new(),
            entry: "0".to_owned(),
            error: None,
            repaint: RepaintController::new(),
        }
    }

    fn press(&mut self, event: Event) {
        if self.error.is_some() {
            return;
        }

        // ⌫ unwinds the pending operator while the second operand is still
        // empty; once digits exist it edits them as usual.
        let state = self.engine.state();
        let event = if event == Event::Backspace
            && state.editing_second
            && state.operand2.is_empty()
        {
            Event::UndoOperator
        } else {
            event
        };

        // Snapshot for the "a + b =" line; a dangling operator is dropped
        // from it the same way equals drops it from the evaluation.
        let state = self.engine.state();
        let finished_expr = if state.operator.is_some() && state.operand2.is_empty() {
            state.operand1.clone()
        } else {
            state.display_text()
        };

        match self.engine.apply(event) {
            Output::Result(text) => {
                self.expression = format!("{finished_expr} =");
                self.entry = text;
            }
            Output::Display(_) => {
                self.expression = self.engine.state().pending_text().unwrap_or_default();
                self.entry = self.engine.state().entry_text();
            }
            Output::Error(err) => {
                self.expression.clear();
                self.entry = "0".to_owned();
                self.error = Some(err);
            }
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        theme::consume_special_keys(ctx);

        let mut events = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(Key::Num0) {
                events.push(Event::Digit(Bit::Zero));
            }
            if i.key_pressed(Key::Num1) {
                events.push(Event::Digit(Bit::One));
            }
            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                events.push(Event::Operator(Operator::Add));
            }
            if i.key_pressed(Key::Minus) {
                events.push(Event::Operator(Operator::Subtract));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                events.push(Event::Operator(Operator::Multiply));
            }
            if i.key_pressed(Key::Slash) {
                events.push(Event::Operator(Operator::Divide));
            }
            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                events.push(Event::Equals);
            }
            if i.key_pressed(Key::Backspace) {
                events.push(Event::Backspace);
            }
            if i.key_pressed(Key::Delete) || i.key_pressed(Key::Escape) {
                events.push(Event::Clear);
            }
        });
        for event in events {
            self.press(event);
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = self.settings.theme.palette();
        let toggle_size = egui::vec2(48.0, 48.0);

        ui.horizontal(|ui| {
            let theme_key =
                CalcKey::new(self.settings.theme.toggle_label(), palette.func_key, palette.text, toggle_size)
                    .font_size(18.0);
            if ui.add(theme_key).clicked() {
                self.settings.theme = self.settings.theme.toggle();
                self.settings.save();
                self.settings.theme.apply(ui.ctx());
                self.repaint.mark_needs_repaint();
            }

            let lang_key =
                CalcKey::new(self.settings.lang.code(), palette.func_key, palette.text, toggle_size)
                    .font_size(18.0);
            if ui.add(lang_key).clicked() {
                self.settings.lang = self.settings.lang.toggle();
                self.settings.save();
                self.repaint.mark_needs_repaint();
            }
        });
    }

    fn render_displays(&self, ui: &mut egui::Ui) {
        let palette = self.settings.theme.palette();

        expression_frame(palette).show(ui, |ui| {
            ui.set_min_height(28.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.expression)
                        .font(egui::FontId::proportional(18.0))
                        .color(palette.text_dim),
                );
            });
        });
        ui.add_space(6.0);
        display_frame(palette).show(ui, |ui| {
            ui.set_min_height(100.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.entry)
                        .font(egui::FontId::proportional(48.0))
                        .strong(),
                );
            });
        });
    }

    fn render_keys(&mut self, ui: &mut egui::Ui) {
        let palette = self.settings.theme.palette();
        let lang = self.settings.lang;
        let spacing = ui.spacing().item_spacing.x;
        let key_size = egui::vec2((ui.available_width() - spacing * 3.0) / 4.0, 76.0);

        let rows: [[(Event, &str, KeyGroup); 4]; 3] = [
            [
                (Event::Operator(Operator::And), lang.operator_label(Operator::And), KeyGroup::Func),
                (Event::Operator(Operator::Or), lang.operator_label(Operator::Or), KeyGroup::Func),
                (Event::Operator(Operator::Xor), lang.operator_label(Operator::Xor), KeyGroup::Func),
                (Event::Backspace, locale::BACKSPACE_LABEL, KeyGroup::Func),
            ],
            [
                (Event::Operator(Operator::Add), lang.operator_label(Operator::Add), KeyGroup::Func),
                (Event::Operator(Operator::Subtract), lang.operator_label(Operator::Subtract), KeyGroup::Func),
                (Event::Operator(Operator::Multiply), lang.operator_label(Operator::Multiply), KeyGroup::Func),
                (Event::Operator(Operator::Divide), lang.operator_label(Operator::Divide), KeyGroup::Func),
            ],
            [
                (Event::Digit(Bit::Zero), "0", KeyGroup::Digit),
                (Event::Digit(Bit::One), "1", KeyGroup::Digit),
                (Event::Equals, lang.equals_label(), KeyGroup::Equals),
                (Event::Clear, locale::CLEAR_LABEL, KeyGroup::Clear),
            ],
        ];

        for row in rows {
            ui.horizontal(|ui| {
                for (event, label, group) in row {
                    let fill = match group {
                        KeyGroup::Digit => palette.digit_key,
                        KeyGroup::Func => palette.func_key,
                        KeyGroup::Equals => palette.equals_key,
                        KeyGroup::Clear => palette.clear_key,
                    };
                    if ui.add(CalcKey::new(label, fill, palette.text, key_size)).clicked() {
                        self.press(event);
                    }
                }
            });
        }
    }
}

impl eframe::App for BinExprApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        let palette = self.settings.theme.palette();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.window_bg)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(10.0);
                self.render_displays(ui);
                ui.add_space(16.0);
                self.render_keys(ui);
            });

        if let Some(err) = self.error {
            if error_window(ctx, self.settings.lang.error_message(err)) {
                self.error = None;
                self.repaint.mark_needs_repaint();
            }
        }

        self.repaint.end_frame(ctx);
    }
}
