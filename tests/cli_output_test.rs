use patternbook::catalog::data::PATTERNS;
use patternbook::catalog::{resolve, ExampleGroup, Locale};
use patternbook::cli::commands::show::{about_json, render_about_text, render_examples_text};
use patternbook::cli::commands::{list, parse_format, parse_locale, OutputFormat};
use pretty_assertions::assert_eq;

#[test]
fn about_text_uses_localized_headings() {
    let entry = resolve(PATTERNS, "singleton").unwrap();

    let es = render_about_text(entry, Locale::Es);
    assert!(es.contains("Singleton [Creational]"));
    assert!(es.contains("Problema"));
    assert!(es.contains("Cuándo usar"));

    let en = render_about_text(entry, Locale::En);
    assert!(en.contains("Problem"));
    assert!(en.contains("When to use"));
    assert!(en.contains("Ensures a class has only one instance"));
}

#[test]
fn about_json_carries_the_localized_projection() {
    let entry = resolve(PATTERNS, "strategy").unwrap();
    let value = about_json(entry, Locale::En);

    assert_eq!(value["id"], "strategy");
    assert_eq!(value["category"], "Behavioral");
    assert_eq!(value["title"], "Strategy");
    assert!(value["pros"].as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn examples_text_lists_every_block_title() {
    let entry = resolve(PATTERNS, "singleton").unwrap();
    let out = render_examples_text(entry, ExampleGroup::React);
    for example in entry.examples_for(ExampleGroup::React) {
        assert!(out.contains(example.title));
    }
}

#[test]
fn empty_group_renders_an_empty_list_not_an_error() {
    use patternbook::catalog::{
        Category, ExampleSet, LocalizedContent, PatternContent, PatternEntry,
    };

    const EMPTY_TEXT: PatternContent = PatternContent {
        title: "Bare",
        summary: "",
        problem: "",
        solution: "",
        when_to_use: &[],
        pros: &[],
        cons: &[],
    };
    static BARE: PatternEntry = PatternEntry {
        id: "bare",
        category: Category::Structural,
        content: LocalizedContent {
            es: EMPTY_TEXT,
            en: EMPTY_TEXT,
        },
        examples: ExampleSet {
            dotnet: &[],
            react: &[],
        },
    };

    assert_eq!(render_examples_text(&BARE, ExampleGroup::Dotnet), "");
}

#[test]
fn list_text_has_one_line_per_pattern() {
    let out = list::render_text(PATTERNS, Locale::En);
    assert_eq!(out.lines().count(), PATTERNS.len());
    assert!(out.contains("singleton"));
    assert!(out.contains("Behavioral"));
}

#[test]
fn list_json_is_an_array_of_catalog_size() {
    let value = list::to_json(PATTERNS, Locale::Es);
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), PATTERNS.len());
    assert_eq!(entries[0]["id"], "singleton");
}

#[test]
fn closed_set_cli_inputs_are_rejected() {
    assert_eq!(parse_locale("es").unwrap(), Locale::Es);
    assert_eq!(parse_locale("en").unwrap(), Locale::En);
    assert!(parse_locale("fr").is_err());

    assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
    assert!(parse_format("yaml").is_err());
}
