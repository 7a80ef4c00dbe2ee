use std::time::{Duration, Instant};

use crate::catalog::{self, CodeExample, ExampleGroup, Locale, PatternContent, PatternEntry};

/// How long the copy confirmation toast stays visible.
pub const COPY_TOAST_MS: u64 = 1200;

/// Active content tab in the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Dotnet,
    React,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::About
    }
}

impl Tab {
    /// Tab-bar order.
    pub const fn all() -> [Tab; 3] {
        [Tab::About, Tab::Dotnet, Tab::React]
    }

    /// The example group this tab shows, if it is an example tab.
    pub fn example_group(self) -> Option<ExampleGroup> {
        match self {
            Tab::About => None,
            Tab::Dotnet => Some(ExampleGroup::Dotnet),
            Tab::React => Some(ExampleGroup::React),
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Tab::About, Locale::Es) => "Explicación",
            (Tab::About, Locale::En) => "About",
            (Tab::Dotnet, _) => ".NET",
            (Tab::React, _) => "React",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::About => Tab::Dotnet,
            Tab::Dotnet => Tab::React,
            Tab::React => Tab::About,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::About => Tab::React,
            Tab::Dotnet => Tab::About,
            Tab::React => Tab::Dotnet,
        }
    }
}

/// Session-local browser state.
///
/// The three selection fields (language, selected id, active tab) are the
/// primitive state; everything displayed is derived from them on access.
/// The selected entry is re-resolved every time rather than cached, so the
/// id can never drift out of sync with a stored entry.
#[derive(Debug)]
pub struct BrowserState {
    catalog: &'static [PatternEntry],
    pub language: Locale,
    pub selected_id: String,
    pub active_tab: Tab,

    // Presentation cursors.
    pub list_index: usize,
    pub example_index: usize,
    pub detail_scroll: u16,

    copied_until: Option<Instant>,
}

impl BrowserState {
    pub fn new(catalog: &'static [PatternEntry]) -> Self {
        Self {
            catalog,
            language: Locale::default(),
            selected_id: catalog.first().map(|p| p.id.to_string()).unwrap_or_default(),
            active_tab: Tab::default(),
            list_index: 0,
            example_index: 0,
            detail_scroll: 0,
            copied_until: None,
        }
    }

    pub fn catalog(&self) -> &'static [PatternEntry] {
        self.catalog
    }

    /// Replace the display language. Selection and tab are untouched.
    pub fn set_language(&mut self, locale: Locale) {
        self.language = locale;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Replace the selected pattern id. No existence check; validity is
    /// deferred to the resolver. The active tab deliberately persists across
    /// pattern switches. Presentation cursors reset.
    pub fn select_pattern(&mut self, id: &str) {
        self.selected_id = id.to_string();
        self.example_index = 0;
        self.detail_scroll = 0;
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.example_index = 0;
        self.detail_scroll = 0;
    }

    /// The entry currently shown, resolved with fallback-to-first. `None`
    /// only when the catalog is empty.
    pub fn current_entry(&self) -> Option<&'static PatternEntry> {
        catalog::resolve(self.catalog, &self.selected_id)
    }

    /// Descriptive text of the current entry in the active locale.
    pub fn current_content(&self) -> Option<&'static PatternContent> {
        self.current_entry().map(|p| p.localized(self.language))
    }

    /// Code samples of the current entry for a group; empty when nothing is
    /// selected.
    pub fn current_examples(&self, group: ExampleGroup) -> &'static [CodeExample] {
        self.current_entry()
            .map(|p| p.examples_for(group))
            .unwrap_or(&[])
    }

    /// Examples shown by the active tab (empty on the about tab).
    pub fn active_examples(&self) -> &'static [CodeExample] {
        match self.active_tab.example_group() {
            Some(group) => self.current_examples(group),
            None => &[],
        }
    }

    /// The code block the copy key acts on.
    pub fn focused_example(&self) -> Option<&'static CodeExample> {
        self.active_examples().get(self.example_index)
    }

    pub fn move_cursor_down(&mut self) {
        if self.list_index + 1 < self.catalog.len() {
            self.list_index += 1;
            self.select_pattern(self.catalog[self.list_index].id);
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.list_index > 0 {
            self.list_index -= 1;
            self.select_pattern(self.catalog[self.list_index].id);
        }
    }

    pub fn focus_next_example(&mut self) {
        let count = self.active_examples().len();
        if count > 0 && self.example_index + 1 < count {
            self.example_index += 1;
        }
    }

    pub fn focus_prev_example(&mut self) {
        if self.example_index > 0 {
            self.example_index -= 1;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    /// Arm the copy confirmation toast. A new copy re-arms the deadline;
    /// last write wins.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + Duration::from_millis(COPY_TOAST_MS));
    }

    /// Clear the toast once its deadline has passed. Called on every tick.
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|deadline| now >= deadline) {
            self.copied_until = None;
        }
    }

    pub fn copy_toast_visible(&self) -> bool {
        self.copied_until.is_some()
    }
}
