//! Syntax highlighting for code examples, rendered into ratatui lines.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::catalog::CodeLanguage;

/// Wraps a syntect syntax set and theme, loaded once at startup.
pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove("base16-eighties.dark")
            .unwrap_or_default();
        Self { syntaxes, theme }
    }

    fn syntax_for(&self, language: CodeLanguage) -> &SyntaxReference {
        let token = match language {
            CodeLanguage::CSharp => "c#",
            CodeLanguage::Ts | CodeLanguage::Tsx => "ts",
            CodeLanguage::Js => "js",
        };
        self.syntaxes
            .find_syntax_by_token(token)
            .or_else(|| match language {
                // The default syntax set has no TypeScript grammar; JS is the
                // closest match.
                CodeLanguage::Ts | CodeLanguage::Tsx => self.syntaxes.find_syntax_by_token("js"),
                _ => None,
            })
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Highlight one code block. Pure per `(code, language)`; a highlight
    /// failure falls back to unstyled text, never an error.
    pub fn highlight(&self, code: &str, language: CodeLanguage) -> Vec<Line<'static>> {
        let syntax = self.syntax_for(language);
        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();
        for raw in LinesWithEndings::from(code) {
            let Ok(regions) = highlighter.highlight_line(raw, &self.syntaxes) else {
                lines.push(Line::from(raw.trim_end_matches('\n').to_string()));
                continue;
            };
            let spans: Vec<Span<'static>> = regions
                .into_iter()
                .map(|(style, text)| {
                    let fg = style.foreground;
                    Span::styled(
                        text.trim_end_matches('\n').to_string(),
                        Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                    )
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
