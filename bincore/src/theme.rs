//! Calculator theme — dark and light palettes.
//!
//! Dark is the default. Colors follow the pocket calculator's scheme: a
//! deep window background with per-key-group accent fills, switchable at
//! runtime from the header toggle.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Fill colors for one theme. Key groups get distinct fills the way the
/// key grid is grouped: digits, operators/functions, equals, clear.
pub struct Palette {
    pub window_bg: Color32,
    pub text: Color32,
    /// Dimmed text for the secondary expression line.
    pub text_dim: Color32,
    pub display_bg: Color32,
    pub expr_bg: Color32,
    pub outline: Color32,
    pub digit_key: Color32,
    pub func_key: Color32,
    pub equals_key: Color32,
    pub clear_key: Color32,
}

pub const DARK: Palette = Palette {
    window_bg: Color32::from_rgb(0x0D, 0x11, 0x17),
    text: Color32::from_rgb(0xF0, 0xF6, 0xFC),
    text_dim: Color32::from_rgb(0x8B, 0x94, 0x9E),
    display_bg: Color32::from_rgb(0x16, 0x1B, 0x22),
    expr_bg: Color32::from_rgb(0x0D, 0x11, 0x17),
    outline: Color32::from_rgb(0x30, 0x36, 0x3D),
    digit_key: Color32::from_rgb(0x2D, 0x2D, 0x2D),
    func_key: Color32::from_rgb(0x37, 0x49, 0x55),
    equals_key: Color32::from_rgb(0x00, 0x4C, 0x69),
    clear_key: Color32::from_rgb(0x48, 0x42, 0x64),
};

pub const LIGHT: Palette = Palette {
    window_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    text: Color32::from_rgb(0x1F, 0x23, 0x28),
    text_dim: Color32::from_rgb(0x65, 0x6D, 0x76),
    display_bg: Color32::from_rgb(0xF6, 0xF8, 0xFA),
    expr_bg: Color32::from_rgb(0xFF, 0xFF, 0xFF),
    outline: Color32::from_rgb(0xD8, 0xDE, 0xE4),
    digit_key: Color32::from_rgb(0xE0, 0xE0, 0xE0),
    func_key: Color32::from_rgb(0xD2, 0xE5, 0xF4),
    equals_key: Color32::from_rgb(0xC2, 0xE8, 0xFF),
    clear_key: Color32::from_rgb(0xE5, 0xDE, 0xFF),
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Caption for the theme toggle button: the theme you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "🌙",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Install this theme's style on the egui context. Fonts are handled
    /// separately by [`install_fonts`] since they never change at runtime.
    pub fn apply(self, ctx: &egui::Context) {
        let palette = self.palette();

        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(16.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(34.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(16.0, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };

        visuals.window_fill = palette.window_bg;
        visuals.panel_fill = palette.window_bg;
        visuals.extreme_bg_color = palette.display_bg;
        visuals.window_stroke = Stroke::new(1.0, palette.outline);
        visuals.window_rounding = Rounding::same(12.0);
        visuals.override_text_color = Some(palette.text);

        let accent = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = palette.func_key;
            ws.weak_bg_fill = palette.func_key;
            ws.bg_stroke = Stroke::new(1.0, palette.outline);
            ws.fg_stroke = Stroke::new(1.0, palette.text);
            ws.rounding = Rounding::same(8.0);
        };
        accent(&mut visuals.widgets.noninteractive);
        accent(&mut visuals.widgets.inactive);
        accent(&mut visuals.widgets.hovered);
        accent(&mut visuals.widgets.active);
        accent(&mut visuals.widgets.open);
        visuals.widgets.noninteractive.bg_fill = palette.window_bg;

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }
}

/// Locate a Noto Sans CJK face on disk so Japanese labels render.
///
/// Searched relative to the executable first, then standard system font
/// locations. Loading from disk keeps the 10+ MB face out of the binary;
/// when no face is found the JP toggle still works, glyphs permitting.
fn load_cjk_font() -> Option<Vec<u8>> {
    let candidates = [
        "NotoSansCJK-Regular.otf",
        "NotoSansCJKjp-Regular.otf",
        "NotoSansJP-Regular.ttf",
    ];

    let mut search_paths = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            for name in candidates {
                search_paths.push(dir.join("fonts").join(name));
                search_paths.push(dir.join(name));
            }
        }
    }
    for name in candidates {
        search_paths.push(std::path::PathBuf::from("/usr/share/fonts/opentype/noto").join(name));
        search_paths.push(std::path::PathBuf::from("/usr/share/fonts/truetype/noto").join(name));
        search_paths.push(std::path::PathBuf::from("/usr/share/fonts").join(name));
    }

    for path in search_paths {
        if let Ok(data) = std::fs::read(&path) {
            return Some(data);
        }
    }
    None
}

/// Register fonts on the context. Call once at app creation, before the
/// first frame.
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    if let Some(cjk_data) = load_cjk_font() {
        fonts
            .font_data
            .insert("NotoSansCJK".to_owned(), egui::FontData::from_owned(cjk_data));
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .push("NotoSansCJK".to_owned());
        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .push("NotoSansCJK".to_owned());
    }
    ctx.set_fonts(fonts);
}

/// Strip key events that fight the key grid: Tab focus cycling and
/// ctrl/cmd zoom. Apps without text fields call this each frame.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key {
                key: egui::Key::Tab,
                ..
            } => false,
            egui::Event::Key { key, modifiers, .. }
                if modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals) =>
            {
                false
            }
            _ => true,
        });
    });
}
