//! Cell palettes for the task table.

use crossterm::style::{Color, ResetColor, SetBackgroundColor};

use crate::fields::{Priority, Urgency};

/// How the one-character priority and due cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// A single space on a coloured background.
    #[default]
    Ansi,
    /// The value's letter code, for terminals without colour.
    Plain,
}

pub fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Critical => Color::Red,
        Priority::High => Color::Yellow,
        Priority::Normal => Color::Green,
        Priority::Low => Color::Blue,
    }
}

pub fn urgency_color(u: Urgency) -> Color {
    match u {
        Urgency::InTime => Color::Green,
        Urgency::Today => Color::Yellow,
        Urgency::Overdue => Color::Red,
    }
}

impl Palette {
    pub fn priority_cell(self, p: Priority) -> String {
        match self {
            Palette::Ansi => color_block(priority_color(p)),
            Palette::Plain => p.code().to_string(),
        }
    }

    pub fn urgency_cell(self, u: Urgency) -> String {
        match self {
            Palette::Ansi => color_block(urgency_color(u)),
            Palette::Plain => u.code().to_string(),
        }
    }
}

/// One blank cell painted with `color`, followed by a reset.
pub fn color_block(color: Color) -> String {
    format!("{} {}", SetBackgroundColor(color), ResetColor)
}
