//! Title translation used by the English fallback search.
//!
//! The resolver only needs one capability: turn a possibly non-English title
//! into an English one, or hand it back untouched. [`Translator`] is that
//! seam; [`PhraseBook`] is a table-driven implementation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::TranslationConfig;

/// Built-in translations, keyed by lower-cased original title.
const BUILTIN: &[(&str, &str)] = &[("la vita è bella", "Life Is Beautiful")];

/// Maps a title to its English form.
///
/// Implementations never fail: an unknown title is returned unchanged.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `title` to English, or return it as-is.
    async fn translate(&self, title: &str) -> String;
}

/// Translator that always returns its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

#[async_trait]
impl Translator for Identity {
    async fn translate(&self, title: &str) -> String {
        title.to_string()
    }
}

/// Case-insensitive lookup table of known title translations.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    entries: HashMap<String, String>,
}

impl PhraseBook {
    /// A phrase book holding only the built-in entries.
    pub fn builtin() -> Self {
        Self::default().with_entries(BUILTIN.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    /// Built-in entries extended with the configured ones. Configured entries
    /// win over built-in ones for the same title.
    pub fn from_config(config: &TranslationConfig) -> Self {
        Self::builtin().with_entries(config.titles.clone())
    }

    /// Add entries, replacing any existing translation for the same title.
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        for (original, english) in entries {
            self.entries.insert(original.to_lowercase(), english);
        }
        self
    }

    /// Number of known translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the phrase book has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Translator for PhraseBook {
    async fn translate(&self, title: &str) -> String {
        self.entries
            .get(&title.to_lowercase())
            .cloned()
            .unwrap_or_else(|| title.to_string())
    }
}
