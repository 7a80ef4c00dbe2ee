use patternbook::catalog::{
    resolve, Category, ExampleSet, LocalizedContent, PatternContent, PatternEntry,
};
use pretty_assertions::assert_eq;

const fn text(title: &'static str) -> PatternContent {
    PatternContent {
        title,
        summary: "",
        problem: "",
        solution: "",
        when_to_use: &[],
        pros: &[],
        cons: &[],
    }
}

const fn entry(id: &'static str, category: Category) -> PatternEntry {
    PatternEntry {
        id,
        category,
        content: LocalizedContent {
            es: text(id),
            en: text(id),
        },
        examples: ExampleSet {
            dotnet: &[],
            react: &[],
        },
    }
}

static CATALOG: &[PatternEntry] = &[
    entry("singleton", Category::Creational),
    entry("factory-method", Category::Creational),
    entry("adapter", Category::Structural),
];

#[test]
fn exact_id_match_returns_that_entry() {
    let resolved = resolve(CATALOG, "factory-method").unwrap();
    assert_eq!(resolved.id, "factory-method");
    // Exactly that entry, not a copy from elsewhere in the catalog.
    assert!(std::ptr::eq(resolved, &CATALOG[1]));
}

#[test]
fn match_is_case_sensitive() {
    let resolved = resolve(CATALOG, "Adapter").unwrap();
    assert_eq!(resolved.id, "singleton");
}

#[test]
fn unknown_id_falls_back_to_first_entry() {
    let resolved = resolve(CATALOG, "does-not-exist").unwrap();
    assert_eq!(resolved.id, "singleton");
    assert!(std::ptr::eq(resolved, &CATALOG[0]));
}

#[test]
fn empty_id_falls_back_to_first_entry() {
    assert_eq!(resolve(CATALOG, "").unwrap().id, "singleton");
}

#[test]
fn empty_catalog_resolves_to_none() {
    assert_eq!(resolve(&[], "anything"), None);
    assert_eq!(resolve(&[], ""), None);
}

#[test]
fn resolution_is_deterministic() {
    let first = resolve(CATALOG, "adapter").unwrap();
    let second = resolve(CATALOG, "adapter").unwrap();
    assert!(std::ptr::eq(first, second));
}
