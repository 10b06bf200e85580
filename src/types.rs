//! Core type definitions shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which enharmonic spelling a chord root is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Spelling {
    /// Naturals and sharps (`A`, `A#`, `B`, ...).
    #[default]
    Sharp,
    /// Flats (`Ab`, `A`, `Bb`, ...).
    Flat,
}

impl Spelling {
    /// Spelling a chord token is written in: flat iff its second character is `b`.
    #[must_use]
    pub fn of(token: &str) -> Self {
        if token.chars().nth(1) == Some('b') {
            Self::Flat
        } else {
            Self::Sharp
        }
    }
}

/// What happens to a line classified as chordal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Rewrite chord roots by the configured interval.
    #[default]
    Transpose,
    /// Drop chord lines, leaving plain lyrics.
    RemoveChords,
}

impl Mode {
    /// Verb used in the run summary.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Transpose => "transposed",
            Self::RemoveChords => "deposed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transpose => write!(f, "transpose"),
            Self::RemoveChords => write!(f, "remove"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transpose" => Ok(Self::Transpose),
            "remove" | "remove-chords" | "strip" => Ok(Self::RemoveChords),
            other => Err(Error::config(
                format!("unknown mode '{other}'"),
                "Use 'transpose' or 'remove'",
            )),
        }
    }
}

/// Byte range of the host buffer to restrict a run to, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Start offset in bytes.
    pub start: usize,
    /// End offset in bytes (exclusive).
    pub end: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Resolve against `text`, rejecting inverted, out-of-range or
    /// mid-character bounds.
    pub fn resolve(&self, text: &str) -> Result<Range<usize>> {
        let valid = self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end);
        if valid {
            Ok(self.start..self.end)
        } else {
            Err(Error::selection(self.start, self.end, text.len()))
        }
    }
}

impl FromStr for Selection {
    type Err = Error;

    /// Parse `START..END`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| part.trim().parse::<usize>().ok();
        s.split_once("..")
            .and_then(|(start, end)| Some(Self::new(parse(start)?, parse(end)?)))
            .ok_or_else(|| {
                Error::config(
                    format!("cannot parse selection '{s}'"),
                    "Write the selection as START..END byte offsets, e.g. 0..120",
                )
            })
    }
}
