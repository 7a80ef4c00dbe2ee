use serde_json::json;

use super::{parse_format, parse_locale, CommandHandler, OutputFormat};
use crate::catalog::data::PATTERNS;
use crate::catalog::{Locale, PatternEntry};
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub lang: String,
    pub format: String,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let locale = parse_locale(&self.lang)?;
        match parse_format(&self.format)? {
            OutputFormat::Text => print!("{}", render_text(PATTERNS, locale)),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&to_json(PATTERNS, locale))?)
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(lang: String, format: String) -> Self {
        Self { lang, format }
    }
}

pub fn render_text(catalog: &[PatternEntry], locale: Locale) -> String {
    let mut out = String::new();
    for pattern in catalog {
        let content = pattern.localized(locale);
        out.push_str(&format!(
            "{:<18} {:<12} {}\n",
            pattern.id,
            pattern.category.as_str(),
            content.title
        ));
    }
    out
}

pub fn to_json(catalog: &[PatternEntry], locale: Locale) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = catalog
        .iter()
        .map(|pattern| {
            let content = pattern.localized(locale);
            json!({
                "id": pattern.id,
                "category": pattern.category,
                "title": content.title,
                "summary": content.summary,
            })
        })
        .collect();
    serde_json::Value::Array(entries)
}
