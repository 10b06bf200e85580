//! Chord line detection.

use super::classifier::{is_blankspace, is_chord_token, ChordIndicators};
use crate::constants::limits::UNBOUNDED_THRESHOLD;

/// Decides whether a line is a chord line by checking its leading words.
#[derive(Debug, Clone, Copy)]
pub struct LineScanner<'a> {
    cap: usize,
    indicators: &'a ChordIndicators,
}

impl<'a> LineScanner<'a> {
    /// Scanner checking at most `threshold` words per line; 0 means unbounded.
    pub fn new(threshold: u32, indicators: &'a ChordIndicators) -> Self {
        Self { cap: effective_threshold(threshold), indicators }
    }

    /// True when every word up to the cap is a chord.
    ///
    /// The cap bounds the check; a line that runs out of words first is
    /// still chordal. A line with no words at all is not.
    pub fn is_chordal(&self, line: &str) -> bool {
        let mut words = line.split(is_blankspace).filter(|w| !w.is_empty());
        let mut checked = 0;
        loop {
            let Some(word) = words.next() else {
                return checked > 0;
            };
            if !is_chord_token(word, self.indicators) {
                return false;
            }
            checked += 1;
            if checked >= self.cap {
                return true;
            }
        }
    }
}

/// Word cap for a configured threshold, mapping 0 to the unbounded sentinel.
pub fn effective_threshold(threshold: u32) -> usize {
    match threshold {
        0 => UNBOUNDED_THRESHOLD,
        n => usize::try_from(n).unwrap_or(UNBOUNDED_THRESHOLD),
    }
}
