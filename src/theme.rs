//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes.

use crate::market::format::Tone;
use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header & cards --
    pub title: Style,
    pub label: Style,
    pub value: Style,

    // -- Change tones --
    pub positive: Style,
    pub negative: Style,
    pub flat: Style,
    pub unknown: Style,

    // -- Table --
    pub table_header: Style,
    pub rank: Style,
    pub asset_name: Style,
    pub row_selected: Style,

    // -- News --
    pub news_title: Style,
    pub news_date: Style,
    pub placeholder: Style,

    // -- Chart --
    pub chart_line: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub status_error: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            positive: Style::default().fg(Color::LightGreen),
            negative: Style::default().fg(Color::LightRed),
            flat: Style::default().fg(Color::Gray),
            unknown: Style::default().fg(Color::DarkGray),

            table_header: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            rank: Style::default().fg(Color::DarkGray),
            asset_name: Style::default().fg(Color::DarkGray),
            row_selected: Style::default().bg(Color::DarkGray).fg(Color::White),

            news_title: Style::default().fg(Color::White),
            news_date: Style::default().fg(Color::DarkGray),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            chart_line: Style::default().fg(Color::LightBlue),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default().bg(Color::DarkGray).fg(Color::LightRed),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    fn light() -> Self {
        Self {
            title: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default().fg(Color::Black),

            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            flat: Style::default().fg(Color::DarkGray),
            unknown: Style::default().fg(Color::Gray),

            table_header: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            rank: Style::default().fg(Color::DarkGray),
            asset_name: Style::default().fg(Color::DarkGray),
            row_selected: Style::default().bg(Color::Blue).fg(Color::White),

            news_title: Style::default().fg(Color::Black),
            news_date: Style::default().fg(Color::DarkGray),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            chart_line: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            status_error: Style::default().bg(Color::White).fg(Color::Red),
            panel_border: Style::default().fg(Color::Gray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }

    /// Style for a price change.
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Flat => self.flat,
            Tone::Unknown => self.unknown,
        }
    }
}
