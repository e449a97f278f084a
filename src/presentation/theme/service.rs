//! Theme construction and color parsing.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::infrastructure::config::{ThemeConfig, ThemeMode};

const AMBER_600: Color = Color::Rgb(217, 119, 6);
const AMBER_950: Color = Color::Rgb(69, 26, 3);

/// Styles shared by the login page widgets.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for focus and the cursor.
    pub accent: Color,
    /// Amber container background and body text.
    pub surface_style: Style,
    /// Page heading.
    pub heading_style: Style,
    /// Border of the focused control.
    pub focused_style: Style,
    /// Placeholders and key hints.
    pub dimmed_style: Style,
    /// Border and notice of a blocked required field.
    pub invalid_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow", ThemeMode::Dark)
    }
}

impl Theme {
    /// Creates a theme from a color name or hex code.
    ///
    /// Unknown colors fall back to yellow.
    #[must_use]
    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    /// Creates a theme from the `[theme]` config section.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(&config.accent_color, config.mode)
    }

    /// Creates a theme from an already parsed accent color.
    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let (surface, text) = match mode {
            ThemeMode::Dark => (AMBER_950, Color::White),
            ThemeMode::Light => (AMBER_600, Color::Black),
        };

        let surface_style = Style::default().bg(surface).fg(text);

        Self {
            accent,
            surface_style,
            heading_style: surface_style.add_modifier(Modifier::BOLD),
            focused_style: surface_style.fg(accent),
            dimmed_style: Style::default().fg(Color::DarkGray),
            invalid_style: surface_style.fg(Color::Red),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "amber" | "orange" => Color::Indexed(214),
        _ => Color::Yellow,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ());

    match s.len() {
        6 => Ok((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Ok((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Amber"), Color::Indexed(214));
        assert_eq!(parse_color("Invalid"), Color::Yellow);
    }

    #[test]
    fn test_surface_follows_mode() {
        let dark = Theme::new("Cyan", ThemeMode::Dark);
        let light = Theme::new("Cyan", ThemeMode::Light);

        assert_eq!(dark.surface_style.bg, Some(AMBER_950));
        assert_eq!(light.surface_style.bg, Some(AMBER_600));
        assert_eq!(dark.focused_style.fg, Some(Color::Cyan));
    }
}
