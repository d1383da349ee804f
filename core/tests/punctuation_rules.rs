// Classifier behaviors as the combiner consults them: membership queries
// over the sorted tables, word/sentence boundary decisions, typography
// flags, and construction from locale rules (including TOML-loaded ones).

use libtextinput_core::{LocaleRules, SpacingAndPunctuations, SuggestionSource};

fn english() -> SpacingAndPunctuations {
    SpacingAndPunctuations::new(&LocaleRules::default())
}

#[test]
fn word_separator_round_trip() {
    let rules = LocaleRules {
        symbols_word_separators: ",.;".to_string(),
        ..LocaleRules::default()
    };
    let sp = SpacingAndPunctuations::new(&rules);
    assert!(sp.is_word_separator(','));
    assert!(sp.is_word_separator('.'));
    assert!(sp.is_word_separator(';'));
    assert!(!sp.is_word_separator('a'));
}

#[test]
fn symbol_tables_are_nfc_normalized() {
    // A decomposed "e" + combining acute in the raw table must match the
    // composed code point the combiner sees in committed text.
    let rules = LocaleRules {
        symbols_word_separators: "e\u{301}".to_string(),
        ..LocaleRules::default()
    };
    let sp = SpacingAndPunctuations::new(&rules);
    assert!(sp.is_word_separator('\u{e9}'));
    assert!(!sp.is_word_separator('e'));
    assert!(!sp.is_word_separator('\u{301}'));
    assert_eq!(sp.word_separators(), &['\u{e9}']);
}

#[test]
fn word_code_points_are_letters_and_connectors() {
    let sp = english();
    assert!(sp.is_word_code_point('a'));
    assert!(sp.is_word_code_point('Z'));
    assert!(sp.is_word_code_point('é'));
    assert!(sp.is_word_code_point('\''), "apostrophe in a contraction");
    assert!(sp.is_word_code_point('-'), "hyphen joins compounds");
    assert!(!sp.is_word_code_point(' '));
    assert!(!sp.is_word_code_point('.'));
}

#[test]
fn spacing_symbol_classification() {
    let sp = english();
    assert!(sp.is_usually_preceded_by_space('('));
    assert!(!sp.is_usually_preceded_by_space(')'));
    assert!(sp.is_usually_followed_by_space(')'));
    assert!(sp.is_usually_followed_by_space(','));
    assert!(!sp.is_usually_followed_by_space('('));
    // Ampersand sits in both sets.
    assert!(sp.is_usually_preceded_by_space('&'));
    assert!(sp.is_usually_followed_by_space('&'));
}

#[test]
fn clustering_symbols_come_from_their_own_table() {
    let sp = english();
    assert!(!sp.is_clustering_symbol('!'), "English clusters nothing");

    let rules = LocaleRules {
        symbols_clustering_together: "!?".to_string(),
        ..LocaleRules::default()
    };
    let clustering = SpacingAndPunctuations::new(&rules);
    assert!(clustering.is_clustering_symbol('!'));
    assert!(clustering.is_clustering_symbol('?'));
    assert!(!clustering.is_clustering_symbol('.'));
}

#[test]
fn sentence_separator_and_precomputed_pair() {
    let sp = english();
    assert!(sp.is_sentence_separator('.'));
    assert!(!sp.is_sentence_separator('!'));
    assert_eq!(sp.sentence_separator(), '.');
    assert_eq!(sp.sentence_separator_and_space, ". ");
}

#[test]
fn typography_flags_for_en_de_and_others() {
    let en = english();
    assert!(en.uses_american_typography);
    assert!(!en.uses_german_rules);

    let de = SpacingAndPunctuations::new(&LocaleRules {
        locale: "de".to_string(),
        ..LocaleRules::default()
    });
    assert!(!de.uses_american_typography);
    assert!(de.uses_german_rules);

    let fi = SpacingAndPunctuations::new(&LocaleRules {
        locale: "fi".to_string(),
        ..LocaleRules::default()
    });
    assert!(!fi.uses_american_typography);
    assert!(!fi.uses_german_rules);
}

#[test]
fn punctuation_suggestions_feed_the_strip() {
    let sp = english();
    let suggestions = sp.punctuation_suggestions();
    assert_eq!(suggestions.len(), sp.suggested_punctuation().len());
    assert!(suggestions.iter().all(|s| s.source == SuggestionSource::Punctuation));
    assert_eq!(suggestions[0].word, "!");
}

#[test]
fn classifier_from_toml_rules() {
    let toml = r#"
        locale = "de"
        symbols_word_separators = " .,"
        sentence_separator = "."
        suggested_punctuations = ["!", "?"]
    "#;
    let rules = LocaleRules::from_toml_str(toml).expect("parse rules");
    let sp = SpacingAndPunctuations::new(&rules);
    assert!(sp.uses_german_rules);
    assert!(sp.is_word_separator(' '));
    assert!(sp.is_word_separator(','));
    assert!(!sp.is_word_separator(';'));
    assert_eq!(sp.suggested_punctuation(), &["!", "?"]);
}

#[test]
fn every_query_is_total_over_char() {
    // Spot-check odd corners of the code space; nothing may panic.
    let sp = english();
    for code in ['\u{0}', '\u{7f}', '\u{ffff}', '\u{10fffd}', '日', '\u{200b}'] {
        let _ = sp.is_word_separator(code);
        let _ = sp.is_word_connector(code);
        let _ = sp.is_word_code_point(code);
        let _ = sp.is_usually_preceded_by_space(code);
        let _ = sp.is_usually_followed_by_space(code);
        let _ = sp.is_clustering_symbol(code);
        let _ = sp.is_sentence_separator(code);
    }
}
