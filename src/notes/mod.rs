//! Pitch-class tables for chord roots.
//!
//! Two fixed tables cover all twelve pitch classes, one per [`Spelling`].
//! Position 0 is A in both; `SHARP_NAMES[i]` and `FLAT_NAMES[i]` always
//! name the same pitch class.

use crate::constants::notation::SEMITONES;
use crate::types::Spelling;

/// Sharp spellings indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];

/// Flat spellings indexed by pitch class.
pub const FLAT_NAMES: [&str; 12] = ["Ab", "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G"];

/// A position in one of the note tables, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Table position, `0..12`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Shift by any number of semitones, wrapping into `0..12`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn shifted(self, semitones: i32) -> Self {
        // rem_euclid keeps the result in 0..12, so the casts are lossless
        Self((self.0 as i32 + semitones).rem_euclid(SEMITONES) as u8)
    }
}

impl Spelling {
    /// The table consulted for this spelling.
    #[must_use]
    pub const fn names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Sharp => &SHARP_NAMES,
            Self::Flat => &FLAT_NAMES,
        }
    }
}

/// Position of `name` in the table for `spelling`.
#[allow(clippy::cast_possible_truncation)]
pub fn index_of(name: &str, spelling: Spelling) -> Option<PitchClass> {
    spelling
        .names()
        .iter()
        .position(|candidate| *candidate == name)
        .map(|i| PitchClass(i as u8))
}

/// Name at `pitch` in the table for `spelling`.
pub const fn spell(pitch: PitchClass, spelling: Spelling) -> &'static str {
    spelling.names()[pitch.index()]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_tables_cover_same_pitch_classes() {
        // Every natural appears in both tables, one slot apart
        for natural in ["A", "B", "C", "D", "E", "F", "G"] {
            let sharp = index_of(natural, Spelling::Sharp).unwrap();
            let flat = index_of(natural, Spelling::Flat).unwrap();
            assert_eq!(sharp.shifted(1), flat, "natural {natural}");
        }
    }

    #[test]
    fn test_index_of_respects_spelling() {
        assert_eq!(index_of("Bb", Spelling::Flat).map(PitchClass::index), Some(2));
        assert_eq!(index_of("Bb", Spelling::Sharp), None);
        assert_eq!(index_of("A#", Spelling::Sharp).map(PitchClass::index), Some(1));
        assert_eq!(index_of("H", Spelling::Sharp), None);
    }

    #[test]
    fn test_spell_round_trips_index() {
        for spelling in [Spelling::Sharp, Spelling::Flat] {
            for name in spelling.names() {
                let pitch = index_of(name, spelling).unwrap();
                assert_eq!(spell(pitch, spelling), *name);
            }
        }
    }

    #[test]
    fn test_shift_wraps_both_directions() {
        let a = index_of("A", Spelling::Sharp).unwrap();
        assert_eq!(a.shifted(12), a);
        assert_eq!(a.shifted(-1).index(), 11);
        assert_eq!(a.shifted(-25).index(), 11);
        assert_eq!(a.shifted(27).index(), 3);
    }
}
