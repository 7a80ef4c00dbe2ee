//! Pattern list pane: one selectable row per catalog entry.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::catalog::Locale;
use crate::cli::tui::browser::state::BrowserState;
use crate::cli::tui::browser::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let title = match state.language {
        Locale::Es => "Patrones",
        Locale::En => "Patterns",
    };

    let items: Vec<ListItem> = state
        .catalog()
        .iter()
        .map(|pattern| {
            let content = pattern.localized(state.language);
            ListItem::new(vec![
                Line::from(Span::styled(content.title, theme.block_title)),
                Line::from(vec![
                    Span::styled(
                        pattern.category.as_str(),
                        theme.category_style(pattern.category),
                    ),
                    Span::raw("  "),
                    Span::styled(content.summary, theme.muted),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(theme.selected);

    let mut list_state = ListState::default().with_selected(Some(state.list_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
