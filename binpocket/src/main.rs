//! binPocket - single-display binary pocket calculator
//!
//! Digits 0/1, four arithmetic and three bitwise operators, theme and
//! language toggles.

mod app;

use app::BinPocketApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 600.0])
            .with_resizable(false)
            .with_title("Binary Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "binpocket",
        options,
        Box::new(|cc| {
            bincore::theme::install_fonts(&cc.egui_ctx);
            Box::new(BinPocketApp::new(cc))
        }),
    )
}
