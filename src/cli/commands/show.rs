use serde_json::json;

use super::{parse_format, parse_locale, CommandHandler, OutputFormat};
use crate::catalog::data::PATTERNS;
use crate::catalog::{resolve, ExampleGroup, Locale, PatternEntry};
use crate::{PatternbookError, Result};

/// Handler for the `show` command
pub struct ShowCommand {
    pub id: String,
    pub lang: String,
    pub tab: String,
    pub format: String,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let locale = parse_locale(&self.lang)?;
        let format = parse_format(&self.format)?;
        let group = parse_tab(&self.tab)?;

        // Unknown ids silently fall back to the first pattern; an empty
        // catalog prints nothing.
        let Some(entry) = resolve(PATTERNS, &self.id) else {
            return Ok(());
        };

        match (group, format) {
            (None, OutputFormat::Text) => print!("{}", render_about_text(entry, locale)),
            (None, OutputFormat::Json) => {
                println!("{}", serde_json::to_string_pretty(&about_json(entry, locale))?)
            }
            (Some(group), OutputFormat::Text) => {
                print!("{}", render_examples_text(entry, group))
            }
            (Some(group), OutputFormat::Json) => println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::to_value(entry.examples_for(group))?)?
            ),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(id: String, lang: String, tab: String, format: String) -> Self {
        Self {
            id,
            lang,
            tab,
            format,
        }
    }
}

/// `None` means the about tab.
fn parse_tab(value: &str) -> Result<Option<ExampleGroup>> {
    match value {
        "about" => Ok(None),
        "dotnet" => Ok(Some(ExampleGroup::Dotnet)),
        "react" => Ok(Some(ExampleGroup::React)),
        other => Err(PatternbookError::Cli(format!(
            "unknown tab '{other}' (expected about, dotnet, or react)"
        ))),
    }
}

pub fn render_about_text(entry: &PatternEntry, locale: Locale) -> String {
    let content = entry.localized(locale);
    let (problem, solution, when_to_use, pros, cons) = match locale {
        Locale::Es => ("Problema", "Solución", "Cuándo usar", "Pros", "Contras"),
        Locale::En => ("Problem", "Solution", "When to use", "Pros", "Cons"),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} [{}]\n{}\n\n",
        content.title,
        entry.category.as_str(),
        content.summary
    ));
    out.push_str(&format!("{problem}\n{}\n\n", content.problem));
    out.push_str(&format!("{solution}\n{}\n\n", content.solution));
    out.push_str(&format!("{when_to_use}\n"));
    for item in content.when_to_use {
        out.push_str(&format!("• {item}\n"));
    }
    out.push_str(&format!("\n{pros}\n"));
    for item in content.pros {
        out.push_str(&format!("+ {item}\n"));
    }
    out.push_str(&format!("\n{cons}\n"));
    for item in content.cons {
        out.push_str(&format!("- {item}\n"));
    }
    out
}

pub fn about_json(entry: &PatternEntry, locale: Locale) -> serde_json::Value {
    let content = entry.localized(locale);
    json!({
        "id": entry.id,
        "category": entry.category,
        "title": content.title,
        "summary": content.summary,
        "problem": content.problem,
        "solution": content.solution,
        "when_to_use": content.when_to_use,
        "pros": content.pros,
        "cons": content.cons,
    })
}

pub fn render_examples_text(entry: &PatternEntry, group: ExampleGroup) -> String {
    let mut out = String::new();
    for example in entry.examples_for(group) {
        out.push_str(&format!(
            "== {} ({})\n{}\n\n",
            example.title,
            example.language.as_str(),
            example.code
        ));
    }
    out
}
