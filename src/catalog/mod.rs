//! The static design-pattern catalog: record types, closed-set tags, and the
//! selection resolver.
//!
//! Everything here is compiled-in, immutable data. Entries are never created,
//! mutated, or reordered at runtime, so all records borrow `'static` text.

pub mod data;
pub mod resolve;

pub use resolve::resolve;

use serde::Serialize;

/// Display language for descriptive text. Exactly two locales are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        // Spanish is the catalog's primary locale.
        Locale::Es
    }
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }
}

/// Classification tag for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

/// Source language of a code example, used to pick highlighting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    CSharp,
    Ts,
    Tsx,
    Js,
}

impl CodeLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Ts => "ts",
            CodeLanguage::Tsx => "tsx",
            CodeLanguage::Js => "js",
        }
    }
}

/// One of the two platforms code samples are provided for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleGroup {
    Dotnet,
    React,
}

/// One labeled code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeExample {
    /// Shown above the snippet; unique within its group for a pattern.
    pub title: &'static str,
    pub language: CodeLanguage,
    /// Raw source text, rendered verbatim.
    pub code: &'static str,
}

/// Per-locale descriptive text for one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternContent {
    pub title: &'static str,
    pub summary: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub when_to_use: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// Both locales' text for one pattern. Every entry carries both; there is no
/// partial localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedContent {
    pub es: PatternContent,
    pub en: PatternContent,
}

/// The two example groups for one pattern. Either slice may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleSet {
    pub dotnet: &'static [CodeExample],
    pub react: &'static [CodeExample],
}

/// One design pattern's full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternEntry {
    /// Unique, stable, never empty.
    pub id: &'static str,
    pub category: Category,
    pub content: LocalizedContent,
    pub examples: ExampleSet,
}

impl PatternEntry {
    /// Descriptive text for the given locale.
    pub fn localized(&self, locale: Locale) -> &PatternContent {
        match locale {
            Locale::Es => &self.content.es,
            Locale::En => &self.content.en,
        }
    }

    /// Code samples for the given group, in rendering order.
    pub fn examples_for(&self, group: ExampleGroup) -> &'static [CodeExample] {
        match group {
            ExampleGroup::Dotnet => self.examples.dotnet,
            ExampleGroup::React => self.examples.react,
        }
    }
}
