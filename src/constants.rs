//! Application constants.
//!
//! Centralizes the defaults and fixed values used by the song sheet pipeline.

/// Defaults applied when no setting overrides them.
pub mod defaults {
    /// Chord suffixes that mark a capital letter as a chord root.
    pub const CHORD_SUFFIXES: &str = "#,b,/,sus,aug,dim,m";

    /// Maximum number of words checked per line.
    pub const THRESHOLD: u32 = 2;

    /// Whole steps to transpose.
    pub const STEPS: i32 = 1;
}

/// Accepted ranges for user-tunable settings.
pub mod limits {
    /// Lowest accepted threshold (0 means unbounded).
    pub const MIN_THRESHOLD: u32 = 0;

    /// Highest accepted threshold.
    pub const MAX_THRESHOLD: u32 = 100;

    /// Lowest accepted whole-step count.
    pub const MIN_STEPS: i32 = -6;

    /// Highest accepted whole-step count.
    pub const MAX_STEPS: i32 = 6;

    /// Word cap used when the threshold is 0.
    pub const UNBOUNDED_THRESHOLD: usize = 1000;
}

/// Notation constants.
pub mod notation {
    /// Letters that can start a chord.
    pub const ROOT_LETTERS: &str = "ABCDEFG";

    /// Non-breaking space, treated like a plain space.
    pub const NBSP: char = '\u{a0}';

    /// Written in place of a chord root that has no pitch class.
    pub const UNKNOWN_CHORD: &str = "--";

    /// Number of pitch classes in an octave.
    pub const SEMITONES: i32 = 12;
}

/// Environment variable names read by [`crate::config::Config::load`].
pub mod env {
    /// Comma-delimited chord suffixes.
    pub const CHORD_SUFFIXES: &str = "SONGSHEET_CHORD_SUFFIXES";

    /// Words checked per line.
    pub const THRESHOLD: &str = "SONGSHEET_THRESHOLD";

    /// `transpose` or `remove`.
    pub const MODE: &str = "SONGSHEET_MODE";

    /// Whole steps to transpose.
    pub const STEPS: &str = "SONGSHEET_STEPS";

    /// Add a half step.
    pub const HALF_STEP: &str = "SONGSHEET_HALF_STEP";
}
