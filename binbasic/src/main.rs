//! binBasic - two-field binary calculator
//!
//! Enter both operands as binary literals, pick an operation, read the
//! result below the grid.

mod app;

use app::BinBasicApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 420.0])
            .with_resizable(false)
            .with_title("Binary Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "binbasic",
        options,
        Box::new(|cc| {
            bincore::theme::install_fonts(&cc.egui_ctx);
            Box::new(BinBasicApp::new(cc))
        }),
    )
}
