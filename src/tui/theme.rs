use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Completed tasks and their marker
    pub done: Color,
    /// Destructive buttons
    pub red: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1F, 0x1F, 0x1F),
            text: Color::Rgb(0xEB, 0xEB, 0xEB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            dim: Color::Rgb(0xB2, 0xB2, 0xB2),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            selection_bg: Color::Rgb(0x33, 0x2A, 0x4D),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
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

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "red" => theme.red = color,
                "selection_bg" => theme.selection_bg = color,
                _ => tracing::warn!(slot = %key, "ignoring unknown color slot"),
            }
        }

        theme
    }
}
