//! Per-locale spacing and punctuation classification.
//!
//! [`SpacingAndPunctuations`] is a pure classification table: five sorted
//! code-point sets, one sentence separator, and a few typography flags. It
//! is built once per active locale/configuration, is immutable afterward,
//! and is replaced wholesale (never mutated field-by-field) when the locale
//! changes - embedders typically publish it behind an `Arc` swapped at one
//! well-defined point so a composition sequence never sees two locales'
//! rules. No composition state machine lives here; the combiner owns that.

use std::sync::Arc;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::locale::LocaleRules;
use crate::suggestion::SuggestedWord;
use crate::utils;

/// Read-only punctuation/spacing rules for one locale.
///
/// Every membership query is a binary search over the relevant sorted set;
/// the sets hold tens of entries, so this is a readability choice rather
/// than a performance one.
#[derive(Debug, Clone)]
pub struct SpacingAndPunctuations {
    sorted_symbols_preceded_by_space: Arc<[char]>,
    sorted_symbols_followed_by_space: Arc<[char]>,
    sorted_symbols_clustering_together: Arc<[char]>,
    sorted_word_connectors: Arc<[char]>,
    sorted_word_separators: Arc<[char]>,
    suggested_punctuation: Arc<[String]>,
    sentence_separator: char,
    /// The sentence separator immediately followed by a space, precomputed
    /// for the swap-space-after-period logic downstream.
    pub sentence_separator_and_space: String,
    pub current_language_has_spaces: bool,
    /// American typography rules cover all English variants well enough;
    /// German rules have their own small gotchas.
    pub uses_american_typography: bool,
    pub uses_german_rules: bool,
}

/// NFC-normalize a raw symbol string and produce the sorted, deduplicated
/// code-point set the membership queries binary-search over. Whitespace is
/// kept: separator tables legitimately contain it.
fn sorted_code_points(raw: &str) -> Arc<[char]> {
    let mut points: Vec<char> = raw.nfc().collect();
    points.sort_unstable();
    points.dedup();
    points.into()
}

impl SpacingAndPunctuations {
    /// Build the classification tables for one locale.
    pub fn new(rules: &LocaleRules) -> Self {
        let language = rules.language();
        debug!(locale = %rules.locale, "building spacing and punctuation tables");
        let suggested: Vec<String> = rules
            .suggested_punctuations
            .iter()
            .map(|s| utils::normalize(s))
            .collect();
        SpacingAndPunctuations {
            sorted_symbols_preceded_by_space: sorted_code_points(&rules.symbols_preceded_by_space),
            sorted_symbols_followed_by_space: sorted_code_points(&rules.symbols_followed_by_space),
            sorted_symbols_clustering_together: sorted_code_points(
                &rules.symbols_clustering_together,
            ),
            sorted_word_connectors: sorted_code_points(&rules.symbols_word_connectors),
            sorted_word_separators: sorted_code_points(&rules.symbols_word_separators),
            suggested_punctuation: suggested.into(),
            sentence_separator: rules.sentence_separator,
            sentence_separator_and_space: [rules.sentence_separator, ' '].iter().collect(),
            current_language_has_spaces: rules.current_language_has_spaces,
            uses_american_typography: language == "en",
            uses_german_rules: language == "de",
        }
    }

    /// A copy of this instance with only the word-separator set replaced.
    /// The other tables are shared with `self`, not copied.
    pub fn with_word_separators(&self, raw_word_separators: &str) -> Self {
        SpacingAndPunctuations {
            sorted_word_separators: sorted_code_points(raw_word_separators),
            ..self.clone()
        }
    }

    pub fn is_word_separator(&self, code: char) -> bool {
        self.sorted_word_separators.binary_search(&code).is_ok()
    }

    pub fn is_word_connector(&self, code: char) -> bool {
        self.sorted_word_connectors.binary_search(&code).is_ok()
    }

    /// Whether the code point belongs inside a word: a letter, or a
    /// registered word connector (an apostrophe inside a contraction is
    /// still part of the word).
    pub fn is_word_code_point(&self, code: char) -> bool {
        code.is_alphabetic() || self.is_word_connector(code)
    }

    pub fn is_usually_preceded_by_space(&self, code: char) -> bool {
        self.sorted_symbols_preceded_by_space
            .binary_search(&code)
            .is_ok()
    }

    pub fn is_usually_followed_by_space(&self, code: char) -> bool {
        self.sorted_symbols_followed_by_space
            .binary_search(&code)
            .is_ok()
    }

    pub fn is_clustering_symbol(&self, code: char) -> bool {
        self.sorted_symbols_clustering_together
            .binary_search(&code)
            .is_ok()
    }

    pub fn is_sentence_separator(&self, code: char) -> bool {
        code == self.sentence_separator
    }

    pub fn sentence_separator(&self) -> char {
        self.sentence_separator
    }

    /// The word-separator set, sorted ascending. Exposed for callers that
    /// scan text rather than classify one code point at a time.
    pub fn word_separators(&self) -> &[char] {
        &self.sorted_word_separators
    }

    /// The raw suggested-punctuation strings for this locale.
    pub fn suggested_punctuation(&self) -> &[String] {
        &self.suggested_punctuation
    }

    /// The suggested punctuation as ready-made suggestion-strip entries.
    pub fn punctuation_suggestions(&self) -> Vec<SuggestedWord> {
        self.suggested_punctuation
            .iter()
            .map(SuggestedWord::punctuation)
            .collect()
    }

    /// Deterministic human-readable rendering of every table and flag, for
    /// diagnostics. Not used in any control path.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "sorted_symbols_preceded_by_space = {:?}\n",
            &self.sorted_symbols_preceded_by_space[..]
        ));
        out.push_str(&format!(
            "sorted_symbols_followed_by_space = {:?}\n",
            &self.sorted_symbols_followed_by_space[..]
        ));
        out.push_str(&format!(
            "sorted_symbols_clustering_together = {:?}\n",
            &self.sorted_symbols_clustering_together[..]
        ));
        out.push_str(&format!(
            "sorted_word_connectors = {:?}\n",
            &self.sorted_word_connectors[..]
        ));
        out.push_str(&format!(
            "sorted_word_separators = {:?}\n",
            &self.sorted_word_separators[..]
        ));
        out.push_str(&format!(
            "suggested_punctuation = {:?}\n",
            &self.suggested_punctuation[..]
        ));
        out.push_str(&format!("sentence_separator = {:?}\n", self.sentence_separator));
        out.push_str(&format!(
            "sentence_separator_and_space = {:?}\n",
            self.sentence_separator_and_space
        ));
        out.push_str(&format!(
            "current_language_has_spaces = {}\n",
            self.current_language_has_spaces
        ));
        out.push_str(&format!(
            "uses_american_typography = {}\n",
            self.uses_american_typography
        ));
        out.push_str(&format!("uses_german_rules = {}\n", self.uses_german_rules));
        out
    }
}
