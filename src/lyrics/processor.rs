//! Whole-sheet processing: classify each line, then transpose or drop chord lines.

use serde::Serialize;

use super::classifier::ChordIndicators;
use super::scanner::LineScanner;
use super::transpose::{transpose_line, Interval};
use crate::constants::defaults;
use crate::error::Result;
use crate::types::{Mode, Selection};

/// Settings for one run, fixed before the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    indicators: ChordIndicators,
    threshold: u32,
    mode: Mode,
    interval: Interval,
    selection: Option<Selection>,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            indicators: ChordIndicators::default(),
            threshold: defaults::THRESHOLD,
            mode: Mode::default(),
            interval: Interval::new(defaults::STEPS, false),
            selection: None,
        }
    }
}

impl ProcessingOptions {
    /// Use the given chord suffixes.
    #[must_use]
    pub fn with_indicators(mut self, indicators: ChordIndicators) -> Self {
        self.indicators = indicators;
        self
    }

    /// Check at most `threshold` words per line (0 = unbounded).
    #[must_use]
    pub const fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Transpose or remove chord lines.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Transposition distance.
    #[must_use]
    pub const fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Restrict the run to a byte range of the input, or lift the restriction.
    #[must_use]
    pub const fn with_selection(mut self, selection: Option<Selection>) -> Self {
        self.selection = selection;
        self
    }

    /// Configured chord suffixes.
    pub const fn indicators(&self) -> &ChordIndicators {
        &self.indicators
    }

    /// Threshold as configured, 0 meaning unbounded.
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Run mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Transposition distance.
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Selection the run is restricted to, if any.
    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }
}

/// Output of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// The transformed text.
    pub text: String,
    /// Lines written to the output, whether kept or rewritten.
    pub lines_changed: usize,
    /// Mode the run used.
    pub mode: Mode,
    /// Human-readable summary, e.g. `12 lines transposed`.
    pub summary: String,
}

impl RunResult {
    fn new(text: String, lines_changed: usize, mode: Mode) -> Self {
        let summary = format!("{lines_changed} lines {}", mode.verb());
        Self { text, lines_changed, mode, summary }
    }
}

/// Process a song sheet.
///
/// Text outside the selection is copied verbatim. A line that starts inside
/// the selection is handled whole, up to its own line break.
pub fn process(text: &str, options: &ProcessingOptions) -> Result<RunResult> {
    let range = match options.selection {
        Some(selection) => selection.resolve(text)?,
        None => 0..text.len(),
    };

    let scanner = LineScanner::new(options.threshold, &options.indicators);
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..range.start]);

    let mut pos = range.start;
    let mut lines_changed = 0;
    let mut line_no = 0;
    while pos < range.end {
        let (line, terminator) = split_line(&text[pos..]);
        pos += line.len() + terminator.len();
        line_no += 1;

        let chordal = scanner.is_chordal(line);
        tracing::debug!(line_no, chordal, "classified line");

        if !chordal {
            out.push_str(line);
            out.push_str(terminator);
            lines_changed += 1;
        } else if options.mode == Mode::Transpose {
            out.push_str(&transpose_line(line, options.interval));
            out.push_str(terminator);
            lines_changed += 1;
        }
    }

    out.push_str(&text[pos..]);

    let result = RunResult::new(out, lines_changed, options.mode);
    tracing::info!(mode = %result.mode, "{}", result.summary);
    Ok(result)
}

/// Split off the first line of `rest`, returning the line body and its
/// terminator (`"\n"`, `"\r\n"`, or `""` at end of text).
fn split_line(rest: &str) -> (&str, &str) {
    match rest.find('\n') {
        Some(i) => {
            let body = &rest[..i];
            match body.strip_suffix('\r') {
                Some(trimmed) => (trimmed, &rest[i - 1..=i]),
                None => (body, &rest[i..=i]),
            }
        }
        None => (rest, ""),
    }
}
