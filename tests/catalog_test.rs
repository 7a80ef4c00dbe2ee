//! Integrity checks over the real compiled-in catalog.

use std::collections::HashSet;

use patternbook::catalog::data::PATTERNS;
use patternbook::catalog::{resolve, ExampleGroup, Locale};
use pretty_assertions::assert_eq;

#[test]
fn catalog_is_not_empty() {
    assert!(!PATTERNS.is_empty());
}

#[test]
fn ids_are_non_empty_and_unique() {
    let mut seen = HashSet::new();
    for pattern in PATTERNS {
        assert!(!pattern.id.is_empty());
        assert!(seen.insert(pattern.id), "duplicate id: {}", pattern.id);
    }
}

#[test]
fn every_entry_has_a_title_in_both_locales() {
    for pattern in PATTERNS {
        for locale in [Locale::Es, Locale::En] {
            assert!(
                !pattern.localized(locale).title.is_empty(),
                "{} has an empty {} title",
                pattern.id,
                locale.as_str()
            );
        }
    }
}

#[test]
fn example_titles_are_unique_within_their_group() {
    for pattern in PATTERNS {
        for group in [ExampleGroup::Dotnet, ExampleGroup::React] {
            let mut seen = HashSet::new();
            for example in pattern.examples_for(group) {
                assert!(
                    seen.insert(example.title),
                    "{}: duplicate example title '{}'",
                    pattern.id,
                    example.title
                );
            }
        }
    }
}

#[test]
fn example_code_is_never_empty() {
    for pattern in PATTERNS {
        for group in [ExampleGroup::Dotnet, ExampleGroup::React] {
            for example in pattern.examples_for(group) {
                assert!(!example.code.is_empty(), "{}: empty code block", pattern.id);
            }
        }
    }
}

#[test]
fn known_ids_resolve_to_themselves() {
    assert_eq!(resolve(PATTERNS, "factory-method").unwrap().id, "factory-method");
    assert_eq!(resolve(PATTERNS, "command").unwrap().id, "command");
}

#[test]
fn unknown_id_resolves_to_the_first_pattern() {
    assert_eq!(resolve(PATTERNS, "does-not-exist").unwrap().id, "singleton");
}
