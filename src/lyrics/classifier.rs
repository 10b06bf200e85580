//! Chord token recognition.

use crate::constants::{defaults, notation};

/// Suffixes that, written right after a root letter, mark a word as a chord.
///
/// Parsed from a comma-delimited list. Entries are trimmed and empty entries
/// dropped; the list order decides which suffix is reported as the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordIndicators(Vec<String>);

impl ChordIndicators {
    /// Parse a comma-delimited suffix list such as `"#,b,/,sus,m"`.
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// First configured suffix that `rest` starts with.
    pub fn matching(&self, rest: &str) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|suffix| rest.starts_with(*suffix))
    }
}

impl Default for ChordIndicators {
    fn default() -> Self {
        Self::parse(defaults::CHORD_SUFFIXES)
    }
}

/// Space, tab, or non-breaking space.
pub const fn is_blankspace(c: char) -> bool {
    matches!(c, ' ' | '\t' | notation::NBSP)
}

/// Whether `word` reads as a chord.
///
/// An empty word counts as a chord. Otherwise the word must start with one of
/// `A`-`G` followed by nothing, a digit, blankspace, or a configured suffix.
pub fn is_chord_token(word: &str, indicators: &ChordIndicators) -> bool {
    let mut chars = word.chars();
    let Some(root) = chars.next() else {
        return true;
    };
    if !notation::ROOT_LETTERS.contains(root) {
        return false;
    }

    let rest = chars.as_str();
    match rest.chars().next() {
        None => true,
        Some(c) if c.is_ascii_digit() || is_blankspace(c) => true,
        Some(_) => indicators.matching(rest).is_some(),
    }
}
