//! Suggested-word metadata carried by suggestion-pick events.

use serde::{Deserialize, Serialize};

/// Where a suggested word came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSource {
    /// The word exactly as the user typed it.
    Typed,
    /// A dictionary match.
    Dictionary,
    /// A punctuation sign offered on the suggestion strip.
    Punctuation,
}

/// Metadata for one suggested word.
///
/// Scores are on a relative scale; higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedWord {
    pub word: String,
    pub score: f32,
    pub source: SuggestionSource,
}

impl SuggestedWord {
    pub fn new<T: Into<String>>(word: T, score: f32, source: SuggestionSource) -> Self {
        SuggestedWord {
            word: word.into(),
            score,
            source,
        }
    }

    /// A punctuation-strip entry. Punctuation suggestions are fixed per
    /// locale and unranked, so they carry a neutral score.
    pub fn punctuation<T: Into<String>>(word: T) -> Self {
        Self::new(word, 0.0, SuggestionSource::Punctuation)
    }
}
