//! Raw per-locale rule tables the classifier is built from.
//!
//! A [`LocaleRules`] value is what a locale/configuration provider hands
//! over on locale change: the five raw symbol strings, the sentence
//! separator, the spacing flag, the locale tag and the suggested
//! punctuation list (already split from its key-spec form by the provider).
//! It can be loaded from and saved to TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-locale input tables and flags.
///
/// The symbol strings carry one code point per character; the classifier
/// sorts them into sets on construction. `Default` is the English table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleRules {
    /// Language tag, e.g. "en", "en-US", "de". Only the primary language
    /// subtag is used, to derive the typography flags.
    pub locale: String,
    pub symbols_preceded_by_space: String,
    pub symbols_followed_by_space: String,
    pub symbols_clustering_together: String,
    pub symbols_word_connectors: String,
    pub symbols_word_separators: String,
    pub sentence_separator: char,
    /// Whether the language puts spaces between words at all.
    pub current_language_has_spaces: bool,
    /// Punctuation offered on the suggestion strip when no word is being
    /// composed.
    pub suggested_punctuations: Vec<String>,
}

impl Default for LocaleRules {
    fn default() -> Self {
        LocaleRules {
            locale: "en".to_string(),
            symbols_preceded_by_space: "([{&".to_string(),
            symbols_followed_by_space: ".,;:!?)]}&".to_string(),
            symbols_clustering_together: String::new(),
            symbols_word_connectors: "'-".to_string(),
            symbols_word_separators: " \t\n\"()[]{}*&<>+=|.,;:!?/_".to_string(),
            sentence_separator: '.',
            current_language_has_spaces: true,
            suggested_punctuations: [
                "!", "?", ",", ":", ";", "\"", "(", ")", "'", "-", "/", "@", "_",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl LocaleRules {
    /// The primary language subtag of `locale` ("en-US" -> "en").
    pub fn language(&self) -> &str {
        self.locale
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
    }

    /// Load rules from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading locale rules from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing locale rules from {}", path.display()))
    }

    /// Save rules to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("writing locale rules to {}", path.display()))
    }

    /// Load rules from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("deserializing locale rules")
    }

    /// Serialize rules to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing locale rules")
    }
}
