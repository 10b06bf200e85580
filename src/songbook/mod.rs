//! Batch processing for a directory of song sheets.
//!
//! Scans a directory tree for `.txt` sheets and runs the song sheet pipeline
//! over each one, writing results into a mirror of the tree.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::lyrics::{process, ProcessingOptions, RunResult};

/// File extension of song sheets.
const SHEET_EXTENSION: &str = "txt";

/// A sheet found while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// Absolute path on disk
    pub full_path: PathBuf,
    /// Path relative to the songbook root
    pub relative_path: PathBuf,
}

/// What happened to one sheet in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SheetOutcome {
    /// The sheet was processed and written.
    Done {
        /// Lines written to the output.
        lines_changed: usize,
        /// Run summary.
        summary: String,
    },
    /// The sheet could not be read, processed, or written.
    Failed {
        /// Error description.
        error: String,
    },
}

/// Per-sheet result of [`Songbook::process`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetReport {
    /// Sheet path relative to the songbook root
    pub path: PathBuf,
    /// Outcome for this sheet
    #[serde(flatten)]
    pub outcome: SheetOutcome,
}

impl SheetReport {
    /// True if the sheet failed.
    pub const fn is_failure(&self) -> bool {
        matches!(self.outcome, SheetOutcome::Failed { .. })
    }
}

/// Index of the song sheets under a directory.
#[derive(Debug, Clone)]
pub struct Songbook {
    entries: Vec<SheetEntry>,
}

impl Songbook {
    /// Scan `root` recursively for song sheets.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::io(
                std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
                root.to_path_buf(),
            ));
        }

        let start = Instant::now();
        let mut entries: Vec<SheetEntry> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {e}", root.display());
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == SHEET_EXTENSION))
            .map(|entry| SheetEntry {
                relative_path: entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or_else(|_| entry.path())
                    .to_path_buf(),
                full_path: entry.path().to_path_buf(),
            })
            .collect();
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let count = entries.len();
        let elapsed = start.elapsed();
        tracing::info!("Found {count} sheets under {} in {elapsed:?}", root.display());

        Ok(Self { entries })
    }

    /// Sheets found, sorted by relative path.
    pub fn entries(&self) -> &[SheetEntry] {
        &self.entries
    }

    /// Process every sheet into `out_dir`, mirroring the songbook layout.
    ///
    /// Sheets run in parallel; each run is independent and sees the whole file,
    /// so any selection in `options` is dropped. A failing sheet is reported
    /// and does not stop the others.
    pub fn process(&self, options: &ProcessingOptions, out_dir: &Path) -> Vec<SheetReport> {
        let options = options.clone().with_selection(None);

        self.entries
            .par_iter()
            .map(|entry| {
                let target = out_dir.join(&entry.relative_path);
                let outcome = match process_sheet(&entry.full_path, &target, &options) {
                    Ok(result) => SheetOutcome::Done {
                        lines_changed: result.lines_changed,
                        summary: result.summary,
                    },
                    Err(e) => {
                        tracing::warn!("Failed to process {}: {e}", entry.full_path.display());
                        SheetOutcome::Failed { error: e.to_string() }
                    }
                };
                SheetReport { path: entry.relative_path.clone(), outcome }
            })
            .collect()
    }
}

/// Process one sheet file into `target`, creating parent directories.
pub fn process_sheet(source: &Path, target: &Path, options: &ProcessingOptions) -> Result<RunResult> {
    let text = fs_err::read_to_string(source)?;
    let result = process(&text, options)?;

    if let Some(parent) = target.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(target, &result.text)?;

    tracing::debug!("{} -> {}: {}", source.display(), target.display(), result.summary);
    Ok(result)
}
