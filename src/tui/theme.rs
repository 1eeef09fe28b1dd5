use ratatui::style::Color;

use crate::chart::Ink;
use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub border: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub cell_empty: Color,
    pub selection_bg: Color,
    pub chart_daily: Color,
    pub chart_grid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x15, 0x20),
            panel: Color::Rgb(0x15, 0x1D, 0x27),
            border: Color::Rgb(0x2A, 0x34, 0x44),
            text: Color::Rgb(0xE3, 0xE8, 0xF0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x8F, 0x9E, 0xB4),
            highlight: Color::Rgb(0x6C, 0x8F, 0xBE),
            green: Color::Rgb(0x4E, 0xA8, 0x5F),
            yellow: Color::Rgb(0xED, 0xC7, 0x5E),
            red: Color::Rgb(0xE0, 0x6C, 0x6C),
            cell_empty: Color::Rgb(0x3C, 0x4A, 0x61),
            selection_bg: Color::Rgb(0x22, 0x30, 0x44),
            chart_daily: Color::Rgb(0x63, 0x7A, 0x9E),
            chart_grid: Color::Rgb(0x29, 0x36, 0x47),
        }
    }
}

/// Parse a hex color string like "#4EA85F" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "panel" => theme.panel = color,
                    "border" => theme.border = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "red" => theme.red = color,
                    "cell_empty" => theme.cell_empty = color,
                    "selection_bg" => theme.selection_bg = color,
                    "chart_daily" => theme.chart_daily = color,
                    "chart_grid" => theme.chart_grid = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Palette slot for a chart primitive
    pub fn ink(&self, ink: Ink) -> Color {
        match ink {
            Ink::Background | Ink::PlotFill => self.panel,
            Ink::Gridline | Ink::Tick => self.chart_grid,
            Ink::AxisLabel => self.dim,
            Ink::Daily => self.chart_daily,
            Ink::Average => self.green,
            Ink::Today => self.yellow,
            Ink::LegendBox | Ink::TooltipBox => self.background,
            Ink::LegendText | Ink::TooltipText => self.text,
            Ink::HoverLine => self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#4EA85F"),
            Some(Color::Rgb(0x4E, 0xA8, 0x5F))
        );
        assert_eq!(parse_hex_color("4EA85F"), None); // missing #
        assert_eq!(parse_hex_color("#4EA8"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn config_overrides_known_slots() {
        let mut ui = UiConfig::default();
        ui.colors.insert("green".into(), "#00FF00".into());
        ui.colors.insert("nonsense".into(), "#123456".into());
        ui.colors.insert("red".into(), "not-a-color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.green, Color::Rgb(0, 0xFF, 0));
        assert_eq!(theme.red, Theme::default().red);
        assert_eq!(theme.ink(Ink::Average), theme.green);
    }
}
