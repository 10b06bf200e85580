//! `songsheet` - chord transposition and removal for plain-text song sheets.
//!
//! A song sheet interleaves chord lines with lyric lines. This crate detects
//! the chord lines and either transposes their chords or strips them out,
//! leaving plain lyrics.

pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod notes;
pub mod songbook;
pub mod types;
