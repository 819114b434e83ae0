use ratatui::style::{Color, Modifier, Style};

use crate::catalog::Difficulty;

/// Consistent theme for the finder
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub active_chip: Style,
    pub muted: Style,
    pub highlight: Style,
    pub new_badge: Style,
    pub help_bar: Style,
    pub help_key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            active_chip: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            new_badge: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default().bg(Color::DarkGray),
            help_key: Style::default().fg(Color::Cyan),
        }
    }
}

impl Theme {
    /// Badge colour per difficulty
    pub fn difficulty_style(&self, difficulty: Difficulty) -> Style {
        match difficulty {
            Difficulty::Beginner => Style::default().fg(Color::Green),
            Difficulty::Intermediate => Style::default().fg(Color::Yellow),
            Difficulty::Advanced => Style::default().fg(Color::Red),
        }
    }
}
