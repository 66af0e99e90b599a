//! Colour tokens used by the calculator screens

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ColorOverrides;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub lime: Color,
    pub error: Color,
    pub slate_100: Color,
    pub slate_300: Color,
    pub slate_500: Color,
    pub slate_700: Color,
    pub slate_900: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            lime: Color::Rgb(0xd7, 0xda, 0x2f),
            error: Color::Rgb(0xd7, 0x33, 0x28),
            slate_100: Color::Rgb(0xf2, 0xf7, 0xfc),
            slate_300: Color::Rgb(0xd5, 0xe4, 0xf2),
            slate_500: Color::Rgb(0x7a, 0x93, 0xaa),
            slate_700: Color::Rgb(0x4d, 0x6b, 0x88),
            slate_900: Color::Rgb(0x19, 0x35, 0x49),
        }
    }
}

fn apply(slot: &mut Color, name: &str, value: Option<&String>) {
    let Some(value) = value else {
        return;
    };
    match Color::from_str(value) {
        Ok(color) => *slot = color,
        Err(_) => tracing::warn!(token = name, value = %value, "ignoring invalid colour"),
    }
}

impl Palette {
    /// Default palette with any valid overrides applied
    pub fn with_overrides(overrides: &ColorOverrides) -> Self {
        let mut palette = Self::default();
        apply(&mut palette.lime, "lime", overrides.lime.as_ref());
        apply(&mut palette.error, "error", overrides.error.as_ref());
        apply(&mut palette.slate_100, "slate_100", overrides.slate_100.as_ref());
        apply(&mut palette.slate_300, "slate_300", overrides.slate_300.as_ref());
        apply(&mut palette.slate_500, "slate_500", overrides.slate_500.as_ref());
        apply(&mut palette.slate_700, "slate_700", overrides.slate_700.as_ref());
        apply(&mut palette.slate_900, "slate_900", overrides.slate_900.as_ref());
        palette
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.slate_100)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self, has_error: bool) -> Style {
        if has_error {
            Style::default().fg(self.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.slate_700).add_modifier(Modifier::BOLD)
        }
    }

    /// Border of an input box
    pub fn border(&self, focused: bool, has_error: bool) -> Style {
        if has_error {
            Style::default().fg(self.error)
        } else if focused {
            Style::default().fg(self.lime)
        } else {
            Style::default().fg(self.slate_300)
        }
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.slate_500)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.lime).add_modifier(Modifier::BOLD)
    }
}
