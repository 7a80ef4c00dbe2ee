use std::time::{Duration, Instant};

use patternbook::catalog::{
    Category, CodeExample, CodeLanguage, ExampleGroup, ExampleSet, Locale, LocalizedContent,
    PatternContent, PatternEntry,
};
use patternbook::cli::tui::browser::state::{BrowserState, Tab, COPY_TOAST_MS};
use pretty_assertions::assert_eq;

const fn text(title: &'static str, summary: &'static str) -> PatternContent {
    PatternContent {
        title,
        summary,
        problem: "",
        solution: "",
        when_to_use: &[],
        pros: &[],
        cons: &[],
    }
}

static CATALOG: &[PatternEntry] = &[
    PatternEntry {
        id: "singleton",
        category: Category::Creational,
        content: LocalizedContent {
            es: text("Singleton", "Uno"),
            en: text("Singleton", "One"),
        },
        examples: ExampleSet {
            dotnet: &[
                CodeExample {
                    title: "Lazy singleton",
                    language: CodeLanguage::CSharp,
                    code: "class A {}",
                },
                CodeExample {
                    title: "Eager singleton",
                    language: CodeLanguage::CSharp,
                    code: "class B {}",
                },
            ],
            react: &[],
        },
    },
    PatternEntry {
        id: "factory-method",
        category: Category::Creational,
        content: LocalizedContent {
            es: text("Método Fábrica", "Dos"),
            en: text("Factory Method", "Two"),
        },
        examples: ExampleSet {
            dotnet: &[],
            react: &[CodeExample {
                title: "Factory (TS)",
                language: CodeLanguage::Ts,
                code: "const x = 1;",
            }],
        },
    },
];

#[test]
fn initial_state_selects_first_entry() {
    let state = BrowserState::new(CATALOG);
    assert_eq!(state.language, Locale::Es);
    assert_eq!(state.selected_id, "singleton");
    assert_eq!(state.active_tab, Tab::About);
}

#[test]
fn set_language_leaves_selection_and_tab_alone() {
    let mut state = BrowserState::new(CATALOG);
    state.select_pattern("factory-method");
    state.set_active_tab(Tab::React);

    state.set_language(Locale::En);

    assert_eq!(state.language, Locale::En);
    assert_eq!(state.selected_id, "factory-method");
    assert_eq!(state.active_tab, Tab::React);
}

#[test]
fn select_pattern_leaves_language_alone_and_keeps_tab() {
    let mut state = BrowserState::new(CATALOG);
    state.set_language(Locale::En);
    state.set_active_tab(Tab::Dotnet);

    state.select_pattern("factory-method");

    assert_eq!(state.language, Locale::En);
    // The active tab persists across pattern switches.
    assert_eq!(state.active_tab, Tab::Dotnet);
}

#[test]
fn stale_id_resolves_to_first_entry() {
    let mut state = BrowserState::new(CATALOG);
    state.select_pattern("does-not-exist");
    assert_eq!(state.current_entry().unwrap().id, "singleton");
}

#[test]
fn current_content_follows_locale() {
    let mut state = BrowserState::new(CATALOG);
    state.select_pattern("factory-method");
    assert_eq!(state.current_content().unwrap().title, "Método Fábrica");

    state.set_language(Locale::En);
    assert_eq!(state.current_content().unwrap().title, "Factory Method");
}

#[test]
fn empty_example_group_is_an_empty_slice() {
    let mut state = BrowserState::new(CATALOG);
    state.select_pattern("factory-method");
    assert!(state.current_examples(ExampleGroup::Dotnet).is_empty());
    assert_eq!(state.current_examples(ExampleGroup::React).len(), 1);
}

#[test]
fn empty_catalog_means_nothing_is_selected() {
    let state = BrowserState::new(&[]);
    assert_eq!(state.selected_id, "");
    assert!(state.current_entry().is_none());
    assert!(state.current_content().is_none());
    assert!(state.current_examples(ExampleGroup::Dotnet).is_empty());
    assert!(state.focused_example().is_none());
}

#[test]
fn cursor_movement_selects_and_clamps() {
    let mut state = BrowserState::new(CATALOG);
    state.move_cursor_down();
    assert_eq!(state.selected_id, "factory-method");
    state.move_cursor_down();
    assert_eq!(state.selected_id, "factory-method");
    state.move_cursor_up();
    assert_eq!(state.selected_id, "singleton");
    state.move_cursor_up();
    assert_eq!(state.selected_id, "singleton");
}

#[test]
fn example_focus_moves_within_the_active_group() {
    let mut state = BrowserState::new(CATALOG);
    state.set_active_tab(Tab::Dotnet);
    assert_eq!(state.focused_example().unwrap().title, "Lazy singleton");

    state.focus_next_example();
    assert_eq!(state.focused_example().unwrap().title, "Eager singleton");

    // Clamped at the last block.
    state.focus_next_example();
    assert_eq!(state.focused_example().unwrap().title, "Eager singleton");

    state.focus_prev_example();
    assert_eq!(state.focused_example().unwrap().title, "Lazy singleton");
}

#[test]
fn switching_tab_resets_example_focus() {
    let mut state = BrowserState::new(CATALOG);
    state.set_active_tab(Tab::Dotnet);
    state.focus_next_example();
    state.set_active_tab(Tab::React);
    assert_eq!(state.example_index, 0);
}

#[test]
fn copy_toast_expires_after_the_deadline() {
    let mut state = BrowserState::new(CATALOG);
    let t0 = Instant::now();

    state.mark_copied(t0);
    assert!(state.copy_toast_visible());

    state.tick(t0 + Duration::from_millis(COPY_TOAST_MS - 1));
    assert!(state.copy_toast_visible());

    state.tick(t0 + Duration::from_millis(COPY_TOAST_MS));
    assert!(!state.copy_toast_visible());
}

#[test]
fn overlapping_copies_rearm_the_toast() {
    let mut state = BrowserState::new(CATALOG);
    let t0 = Instant::now();

    state.mark_copied(t0);
    state.mark_copied(t0 + Duration::from_millis(600));

    // Past the first deadline but before the second: still visible.
    state.tick(t0 + Duration::from_millis(COPY_TOAST_MS + 100));
    assert!(state.copy_toast_visible());

    state.tick(t0 + Duration::from_millis(600 + COPY_TOAST_MS));
    assert!(!state.copy_toast_visible());
}

#[test]
fn tab_cycle_covers_all_three_tabs() {
    assert_eq!(Tab::About.next(), Tab::Dotnet);
    assert_eq!(Tab::Dotnet.next(), Tab::React);
    assert_eq!(Tab::React.next(), Tab::About);
    assert_eq!(Tab::About.prev(), Tab::React);
    assert_eq!(Tab::About.example_group(), None);
    assert_eq!(Tab::Dotnet.example_group(), Some(ExampleGroup::Dotnet));
    assert_eq!(Tab::React.example_group(), Some(ExampleGroup::React));
}
