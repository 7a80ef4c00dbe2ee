//! Code-example tab content: titled, highlighted blocks in catalog order.

use ratatui::text::{Line, Span};

use crate::catalog::Locale;
use crate::cli::tui::browser::highlight::Highlighter;
use crate::cli::tui::browser::state::BrowserState;
use crate::cli::tui::browser::theme::Theme;

/// Build the lines for the active example tab. An empty group yields a
/// single placeholder line, never an error.
pub fn lines(state: &BrowserState, theme: &Theme, highlighter: &Highlighter) -> Vec<Line<'static>> {
    let blocks = state.active_examples();
    if blocks.is_empty() {
        let placeholder = match state.language {
            Locale::Es => "Sin ejemplos para esta pestaña.",
            Locale::En => "No examples for this tab.",
        };
        return vec![Line::styled(placeholder, theme.muted)];
    }

    let mut lines = Vec::new();
    for (index, example) in blocks.iter().enumerate() {
        let focused = index == state.example_index;
        let marker = if focused { "▶ " } else { "  " };
        let title_style = if focused {
            theme.focused_title
        } else {
            theme.block_title
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(example.title, title_style),
            Span::raw("  "),
            Span::styled(format!("({})", example.language.as_str()), theme.muted),
        ]));
        lines.push(Line::from(""));
        lines.extend(highlighter.highlight(example.code, example.language));
        lines.push(Line::from(""));
    }
    lines
}
