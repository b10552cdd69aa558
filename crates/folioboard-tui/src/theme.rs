//! Color language for the worst-projects table
//!
//! - Green: A ratings, passed gates
//! - Yellow: C ratings
//! - Red: E ratings, failed gates
//! - Gray: missing values, notes

use folioboard_core::Qualifier;
use ratatui::style::Color;

/// Rating grade color, A (best) through E (worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingColor {
    A,
    B,
    C,
    D,
    E,
}

impl RatingColor {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(RatingColor::A),
            'B' => Some(RatingColor::B),
            'C' => Some(RatingColor::C),
            'D' => Some(RatingColor::D),
            'E' => Some(RatingColor::E),
            _ => None,
        }
    }

    pub fn to_color(self) -> Color {
        match self {
            RatingColor::A => Color::Green,
            RatingColor::B => Color::LightGreen,
            RatingColor::C => Color::Yellow,
            RatingColor::D => Color::LightRed,
            RatingColor::E => Color::Red,
        }
    }
}

/// Quality gate status color: OK green, ERROR red, anything else gray
pub fn level_color(raw: &str) -> Color {
    match raw {
        "OK" => Color::Green,
        "ERROR" => Color::Red,
        _ => Color::DarkGray,
    }
}

/// Qualifier glyph for the identity cell
pub fn qualifier_glyph(qualifier: Qualifier) -> &'static str {
    match qualifier {
        Qualifier::Project => "◆",
        Qualifier::Application => "▣",
        Qualifier::SubPortfolio => "▤",
        Qualifier::Portfolio => "■",
    }
}

/// Explicit style knobs for the table, passed into the render call so the
/// view stays a pure function of its inputs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Fill color of the lines-of-code bar
    pub bar: Color,
    pub header: Color,
    pub text: Color,
    pub note: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar: Color::Blue,
            header: Color::Cyan,
            text: Color::White,
            note: Color::DarkGray,
            selection_bg: Color::DarkGray,
        }
    }
}
