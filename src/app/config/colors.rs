use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorsConfig {
    #[serde(default = "ColorsConfig::default_border")]
    pub border: String,
    #[serde(default = "ColorsConfig::default_title")]
    pub title: String,
    #[serde(default = "ColorsConfig::default_previous")]
    pub previous: String,
    #[serde(default = "ColorsConfig::default_current")]
    pub current: String,
    #[serde(default = "ColorsConfig::default_next")]
    pub next: String,
}

impl ColorsConfig {
    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some((r, g, b))
    }

    fn color_or(hex: &str, fallback: Color) -> Color {
        Self::parse_hex(hex)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(fallback)
    }

    pub fn border_color(&self) -> Color {
        Self::color_or(&self.border, Color::White)
    }

    pub fn title_color(&self) -> Color {
        Self::color_or(&self.title, Color::White)
    }

    pub fn previous_color(&self) -> Color {
        Self::color_or(&self.previous, Color::Gray)
    }

    pub fn current_color(&self) -> Color {
        Self::color_or(&self.current, Color::Yellow)
    }

    pub fn next_color(&self) -> Color {
        Self::color_or(&self.next, Color::Gray)
    }

    fn default_border() -> String {
        "#FAE280".to_string()
    }

    fn default_title() -> String {
        "#FAE280".to_string()
    }

    fn default_previous() -> String {
        "#A0A0A0".to_string()
    }

    fn default_current() -> String {
        "#FFFFFF".to_string()
    }

    fn default_next() -> String {
        "#A0A0A0".to_string()
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            border: Self::default_border(),
            title: Self::default_title(),
            previous: Self::default_previous(),
            current: Self::default_current(),
            next: Self::default_next(),
        }
    }
}
