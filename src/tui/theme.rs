use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemeMode, UiConfig};

/// Parsed color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub done: Color,
    pub red: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            surface: Color::Rgb(0x1A, 0x10, 0x2E),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            done: Color::Rgb(0x44, 0xFF, 0x88),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }

    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xF8, 0xF7, 0xFC),
            surface: Color::Rgb(0xEC, 0xEA, 0xF5),
            text: Color::Rgb(0x2E, 0x2A, 0x4F),
            text_bright: Color::Rgb(0x0C, 0x00, 0x1B),
            dim: Color::Rgb(0x8A, 0x86, 0xA8),
            highlight: Color::Rgb(0xC2, 0x18, 0x5B),
            done: Color::Rgb(0x1B, 0x8A, 0x4A),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            selection_bg: Color::Rgb(0xE4, 0xD4, 0xF4),
        }
    }

    /// Palette for `mode` with `[ui.colors.<mode>]` overrides applied
    pub fn for_mode(mode: ThemeMode, ui: &UiConfig) -> Self {
        let (mut theme, overrides) = match mode {
            ThemeMode::Dark => (Theme::dark(), &ui.colors.dark),
            ThemeMode::Light => (Theme::light(), &ui.colors.light),
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn apply_overrides(&mut self, colors: &HashMap<String, String>) {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "surface" => self.surface = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "dim" => self.dim = color,
                "highlight" => self.highlight = color,
                "done" => self.done = color,
                "red" => self.red = color,
                "selection_bg" => self.selection_bg = color,
                _ => {}
            }
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
