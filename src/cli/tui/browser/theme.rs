use ratatui::style::{Color, Modifier, Style};

use crate::catalog::Category;

/// Consistent theme for the browser.
pub struct Theme {
    pub selected: Style,
    pub active_tab: Style,
    pub inactive_tab: Style,
    pub heading: Style,
    pub muted: Style,
    pub toast: Style,
    pub focused_title: Style,
    pub block_title: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            active_tab: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            inactive_tab: Style::default().fg(Color::DarkGray),
            heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            toast: Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            focused_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            block_title: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Badge color per category, a pure three-way lookup.
    pub fn category_color(category: Category) -> Color {
        match category {
            Category::Creational => Color::Cyan,
            Category::Structural => Color::Magenta,
            Category::Behavioral => Color::Green,
        }
    }

    pub fn category_style(&self, category: Category) -> Style {
        Style::default().fg(Self::category_color(category))
    }
}
