//! bincore — shared library for the binary calculator applications

pub mod engine;
pub mod locale;
pub mod repaint;
pub mod settings;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use engine::{Engine, Event, Output};
pub use repaint::RepaintController;
pub use theme::Theme;
