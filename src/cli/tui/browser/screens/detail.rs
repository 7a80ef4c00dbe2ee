//! Detail pane: pattern title, tab bar, and the active tab's content.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::catalog::Locale;
use crate::cli::tui::browser::highlight::Highlighter;
use crate::cli::tui::browser::state::{BrowserState, Tab};
use crate::cli::tui::browser::theme::Theme;

use super::examples;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    theme: &Theme,
    highlighter: &Highlighter,
) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Empty catalog: nothing is selected, nothing is displayed.
    let Some(entry) = state.current_entry() else {
        return;
    };
    let content = entry.localized(state.language);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + summary
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Tab content
        ])
        .split(inner);

    let header = vec![
        Line::from(vec![
            Span::styled(content.title, theme.heading),
            Span::raw("  "),
            Span::styled(
                entry.category.as_str(),
                theme.category_style(entry.category),
            ),
        ]),
        Line::from(Span::styled(content.summary, theme.muted)),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(tab.label(state.language)))
        .collect();
    let selected = Tab::all()
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(theme.inactive_tab)
            .highlight_style(theme.active_tab),
        chunks[1],
    );

    match state.active_tab {
        Tab::About => render_about(frame, chunks[2], state, theme),
        Tab::Dotnet | Tab::React => {
            let lines = examples::lines(state, theme, highlighter);
            frame.render_widget(
                Paragraph::new(lines).scroll((state.detail_scroll, 0)),
                chunks[2],
            );
        }
    }
}

fn render_about(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let Some(content) = state.current_content() else {
        return;
    };

    let (problem, solution, when_to_use, pros, cons) = match state.language {
        Locale::Es => ("Problema", "Solución", "Cuándo usar", "Pros", "Contras"),
        Locale::En => ("Problem", "Solution", "When to use", "Pros", "Cons"),
    };

    let mut lines = Vec::new();
    lines.push(Line::styled(problem, theme.heading));
    lines.push(Line::from(content.problem));
    lines.push(Line::from(""));
    lines.push(Line::styled(solution, theme.heading));
    lines.push(Line::from(content.solution));
    lines.push(Line::from(""));

    // List order is catalog order; it is significant.
    lines.push(Line::styled(when_to_use, theme.heading));
    for item in content.when_to_use {
        lines.push(Line::from(format!("• {item}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(pros, theme.heading));
    for item in content.pros {
        lines.push(Line::from(format!("+ {item}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(cons, theme.heading));
    for item in content.cons {
        lines.push(Line::from(format!("- {item}")));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.detail_scroll, 0)),
        area,
    );
}
