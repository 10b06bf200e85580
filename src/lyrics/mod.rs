//! Song sheet processing.
//!
//! A song sheet interleaves chord lines with lyric lines. Lines are classified
//! by checking their leading words against chord notation; chord lines are
//! then either transposed in place or dropped to leave plain lyrics.
//!
//! - [`classifier`]: is a single word a chord?
//! - [`scanner`]: is a line a chord line?
//! - [`transpose`]: shift chord roots by an interval
//! - [`processor`]: run over a whole sheet

pub mod classifier;
pub mod processor;
pub mod scanner;
pub mod transpose;

pub use classifier::{is_chord_token, ChordIndicators};
pub use processor::{process, ProcessingOptions, RunResult};
pub use scanner::LineScanner;
pub use transpose::{transpose_chord, transpose_line, Interval};
