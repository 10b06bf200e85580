//! Chord transposition.
//!
//! Only the root of a chord is rewritten: the letter plus an optional `#` or
//! `b`. Anything written after it (`m`, `sus4`, `7`) is copied through
//! untouched, and a root with no pitch class comes out as `--`.

use serde::{Deserialize, Serialize};

use super::classifier::is_blankspace;
use crate::constants::notation::UNKNOWN_CHORD;
use crate::notes::{index_of, spell};
use crate::types::Spelling;

/// Transposition distance. One step is a whole tone; `half_step` adds one
/// semitone on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    /// Whole steps, may be negative.
    pub steps: i32,
    /// Add a single semitone.
    pub half_step: bool,
}

impl Interval {
    /// Create a new interval.
    #[must_use]
    pub const fn new(steps: i32, half_step: bool) -> Self {
        Self { steps, half_step }
    }

    /// Total shift in semitones: `2 * steps`, plus one for the half step.
    #[must_use]
    pub const fn semitones(self) -> i32 {
        2 * self.steps + if self.half_step { 1 } else { 0 }
    }
}

/// Transpose a chord root, keeping its sharp or flat spelling.
pub fn transpose_chord(token: &str, interval: Interval) -> &'static str {
    let spelling = Spelling::of(token);
    index_of(token, spelling)
        .map_or(UNKNOWN_CHORD, |pitch| spell(pitch.shifted(interval.semitones()), spelling))
}

/// Transpose every chord root in a chord line.
///
/// A root starts at the first character after blankspace, `/` or `(` (or at
/// the start of the line) and spans that character plus a following `#` or
/// `b`. Everything else is copied verbatim.
pub fn transpose_line(line: &str, interval: Interval) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut follows_blankspace = true;
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if is_blankspace(c) || c == '/' || c == '(' {
            follows_blankspace = true;
            out.push(c);
        } else if follows_blankspace {
            let end = match chars.peek() {
                Some(&(i, accidental @ ('#' | 'b'))) => {
                    chars.next();
                    i + accidental.len_utf8()
                }
                _ => start + c.len_utf8(),
            };
            out.push_str(transpose_chord(&line[start..end], interval));
            follows_blankspace = false;
        } else {
            out.push(c);
        }
    }

    out
}
