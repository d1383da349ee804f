//! libtextinput-core
//!
//! Event-chain representation of raw text input and per-locale
//! spacing/punctuation classification, shared by input-method frontends.
//!
//! This crate models two things and deliberately nothing else:
//! input sources (software keys, hardware keys, gesture decoder, suggestion
//! strip) build immutable [`Event`] values, possibly chained to earlier
//! unconsumed events of the same composition sequence, and an external
//! combiner walks those chains to decide what text to commit. While doing so
//! it consults a [`SpacingAndPunctuations`] table, built once per locale from
//! a [`LocaleRules`] value, to make word- and sentence-boundary decisions.
//!
//! Public API:
//! - `Event` - Immutable input event with factory constructors and queries
//! - `SuggestedWord` - Metadata carried by suggestion-pick events
//! - `SpacingAndPunctuations` - Per-locale punctuation/spacing classifier
//! - `LocaleRules` - Raw per-locale tables the classifier is built from

pub mod event;
pub use event::{Event, EventFlag, EventFlags, EventKind, EventPosition, KeyCode};

pub mod suggestion;
pub use suggestion::{SuggestedWord, SuggestionSource};

pub mod punctuation;
pub use punctuation::SpacingAndPunctuations;

pub mod locale;
pub use locale::LocaleRules;

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    ///
    /// Used for suggestion strings. Symbol tables are *not* run through
    /// this: word-separator tables legitimately contain whitespace code
    /// points that trimming would destroy (they get NFC without the trim).
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
