//! Pocket calculator application

use bincore::engine::{Bit, CalcError, Engine, Event, Operator, Output};
use bincore::locale;
use bincore::settings::CalcSettings;
use bincore::theme;
use bincore::widgets::{display_frame, error_window, CalcKey};
use bincore::RepaintController;
use egui::{Context, Key};

/// Which palette fill a key uses.
#[derive(Clone, Copy)]
enum KeyGroup {
    Digit,
    Func,
    Equals,
    Clear,
}

pub struct BinPocketApp {
    engine: Engine,
    settings: CalcSettings,
    /// Last display or result string emitted by the engine.
    display: String,
    error: Option<CalcError>,
    repaint: RepaintController,
}

impl BinPocketApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = CalcSettings::load();
        settings.theme.apply(&cc.egui_ctx);
        Self {
            engine: Engine::new(),
            settings,
            display: "0".to_owned(),
            error: None,
            repaint: RepaintController::new(),
        }
    }

    fn press(&mut self, event: Event) {
        // The error dialog is blocking: nothing gets through until closed.
        if self.error.is_some() {
            return;
        }
        match self.engine.apply(event) {
            Output::Display(text) | Output::Result(text) => self.display = text,
            Output::Error(err) => {
                self.display = "0".to_owned();
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

    fn render_display(&self, ui: &mut egui::Ui) {
        let palette = self.settings.theme.palette();
        display_frame(palette).show(ui, |ui| {
            ui.set_min_height(90.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.display)
                        .font(egui::FontId::proportional(40.0))
                        .strong(),
                );
            });
        });
    }

    fn render_keys(&mut self, ui: &mut egui::Ui) {
        let palette = self.settings.theme.palette();
        let lang = self.settings.lang;
        let spacing = ui.spacing().item_spacing.x;
        let key_size = egui::vec2((ui.available_width() - spacing * 3.0) / 4.0, 72.0);

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

impl eframe::App for BinPocketApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        let palette = self.settings.theme.palette();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(palette.window_bg)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(8.0);
                self.render_display(ui);
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
