//! Application configuration.
//!
//! Handles loading settings from environment variables and .env files.

use std::env;
use std::path::PathBuf;

use crate::constants::{defaults, env as keys, limits};
use crate::error::{Error, Result};
use crate::lyrics::{ChordIndicators, Interval, ProcessingOptions};
use crate::types::{Mode, Selection};

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Comma-delimited chord suffixes
    pub chord_suffixes: String,
    /// Words checked per line before accepting it as a chord line (0 = all)
    pub threshold: u32,
    /// Transpose or remove chord lines
    pub mode: Mode,
    /// Whole steps to transpose
    pub steps: i32,
    /// Add a half step on top of `steps`
    pub half_step: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chord_suffixes: defaults::CHORD_SUFFIXES.to_string(),
            threshold: defaults::THRESHOLD,
            mode: Mode::default(),
            steps: defaults::STEPS,
            half_step: false,
        }
    }
}

impl Config {
    /// Load configuration from .env files and environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv::dotenv().ok();

        // Then the per-user settings file; neither overrides variables already set
        if let Some(path) = user_settings_path().filter(|p| p.is_file()) {
            if let Err(e) = dotenv::from_path(&path) {
                tracing::warn!("Failed to read settings file {}: {e}", path.display());
            }
        }

        let mut config = Self::default();
        config.apply_vars(|key| env::var(key).ok());
        Ok(config)
    }

    /// Overlay settings found through `lookup`, ignoring unparseable values.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(suffixes) = lookup(keys::CHORD_SUFFIXES) {
            self.chord_suffixes = suffixes;
        }

        if let Some(threshold) = lookup(keys::THRESHOLD) {
            match threshold.trim().parse::<u32>() {
                Ok(threshold) => self.threshold = threshold,
                Err(_) => tracing::warn!("Ignoring {}={threshold:?}", keys::THRESHOLD),
            }
        }

        if let Some(mode) = lookup(keys::MODE) {
            match mode.parse::<Mode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => tracing::warn!("Ignoring {}: {e}", keys::MODE),
            }
        }

        if let Some(steps) = lookup(keys::STEPS) {
            match steps.trim().parse::<i32>() {
                Ok(steps) => self.steps = steps,
                Err(_) => tracing::warn!("Ignoring {}={steps:?}", keys::STEPS),
            }
        }

        if let Some(half_step) = lookup(keys::HALF_STEP) {
            match parse_bool(&half_step) {
                Some(half_step) => self.half_step = half_step,
                None => tracing::warn!("Ignoring {}={half_step:?}", keys::HALF_STEP),
            }
        }
    }

    /// Check settings against their accepted ranges
    pub fn validate(&self) -> Result<()> {
        if !(limits::MIN_THRESHOLD..=limits::MAX_THRESHOLD).contains(&self.threshold) {
            return Err(Error::config(
                format!("threshold {} out of range", self.threshold),
                "Use a threshold between 0 and 100 (0 checks every word)",
            ));
        }

        if !(limits::MIN_STEPS..=limits::MAX_STEPS).contains(&self.steps) {
            return Err(Error::config(
                format!("steps {} out of range", self.steps),
                "Use between -6 and 6 whole steps",
            ));
        }

        Ok(())
    }

    /// Snapshot these settings as the options for one run
    pub fn options(&self, selection: Option<Selection>) -> Result<ProcessingOptions> {
        self.validate()?;
        Ok(ProcessingOptions::default()
            .with_indicators(ChordIndicators::parse(&self.chord_suffixes))
            .with_threshold(self.threshold)
            .with_mode(self.mode)
            .with_interval(Interval::new(self.steps, self.half_step))
            .with_selection(selection))
    }
}

/// `songsheet/songsheet.env` in the platform config directory
fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songsheet").join("songsheet.env"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn overlay(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        let mut config = Config::default();
        config.apply_vars(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.chord_suffixes, "#,b,/,sus,aug,dim,m");
        assert_eq!(config.threshold, 2);
        assert_eq!(config.mode, Mode::Transpose);
        assert_eq!(config.steps, 1);
        assert!(!config.half_step);
    }

    #[test]
    fn test_overlay_vars() {
        let config = overlay(&[
            ("SONGSHEET_CHORD_SUFFIXES", "m,7"),
            ("SONGSHEET_THRESHOLD", "0"),
            ("SONGSHEET_MODE", "remove"),
            ("SONGSHEET_STEPS", "-2"),
            ("SONGSHEET_HALF_STEP", "yes"),
        ]);
        assert_eq!(config.chord_suffixes, "m,7");
        assert_eq!(config.threshold, 0);
        assert_eq!(config.mode, Mode::RemoveChords);
        assert_eq!(config.steps, -2);
        assert!(config.half_step);
    }

    #[test]
    fn test_malformed_vars_ignored() {
        let config = overlay(&[
            ("SONGSHEET_THRESHOLD", "lots"),
            ("SONGSHEET_MODE", "sideways"),
            ("SONGSHEET_HALF_STEP", "maybe"),
        ]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Config::default().validate().is_ok());
        let config = Config { threshold: 101, ..Config::default() };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
        let config = Config { steps: -7, ..Config::default() };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_options_snapshot() {
        let config = Config { steps: 2, half_step: true, threshold: 0, ..Config::default() };
        let options = config.options(Some(Selection::new(0, 3))).unwrap();
        assert_eq!(options.interval().semitones(), 5);
        assert_eq!(options.threshold(), 0);
        assert_eq!(options.selection(), Some(Selection::new(0, 3)));
        assert_eq!(options.indicators(), &ChordIndicators::default());
    }
}
