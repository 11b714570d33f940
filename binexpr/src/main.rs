//! binExpr - expression-accumulating binary calculator
//!
//! Shows the pending expression above the main display, reduces chained
//! operations left to right, and lets the backspace key unwind a pending
//! operator before any second-operand digit is entered.

mod app;

use app::BinExprApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_resizable(false)
            .with_title("Binary Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "binexpr",
        options,
        Box::new(|cc| {
            bincore::theme::install_fonts(&cc.egui_ctx);
            Box::new(BinExprApp::new(cc))
        }),
    )
}
