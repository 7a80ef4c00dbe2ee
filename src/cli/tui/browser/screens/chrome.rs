//! Header bar, help bar, and the copy-confirmation toast.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::Locale;
use crate::cli::tui::browser::state::BrowserState;
use crate::cli::tui::browser::theme::Theme;

pub fn render_header(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let lang_span = |locale: Locale| {
        let style = if state.language == locale {
            theme.active_tab
        } else {
            theme.inactive_tab
        };
        Span::styled(locale.as_str().to_uppercase(), style)
    };

    let line = Line::from(vec![
        Span::styled(
            " Design Patterns ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        lang_span(Locale::Es),
        Span::raw(" | "),
        lang_span(Locale::En),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_help(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let hints = match state.language {
        Locale::Es => " ↑↓ patrones   ←→/1-3 pestañas   e idioma   [ ] ejemplo   c copiar   q salir",
        Locale::En => " ↑↓ patterns   ←→/1-3 tabs   e language   [ ] example   c copy   q quit",
    };
    frame.render_widget(Paragraph::new(Line::styled(hints, theme.muted)), area);
}

/// Bottom-right toast shown while the copy confirmation is armed.
pub fn render_toast(frame: &mut Frame, state: &BrowserState, theme: &Theme) {
    if !state.copy_toast_visible() {
        return;
    }

    let message = match state.language {
        Locale::Es => "Copiado al portapapeles",
        Locale::En => "Copied to clipboard",
    };

    let width = (message.chars().count() as u16) + 4;
    let height = 3;
    let frame_area = frame.area();
    if frame_area.width < width + 2 || frame_area.height < height + 2 {
        return;
    }
    let area = Rect {
        x: frame_area.right() - width - 1,
        y: frame_area.bottom() - height - 1,
        width,
        height,
    };

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::from(message))
            .style(theme.toast)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
