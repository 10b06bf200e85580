//! `songsheet` - transpose or strip the chords in a song sheet.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use songsheet::config::Config;
use songsheet::lyrics::process;
use songsheet::songbook::{SheetOutcome, Songbook};
use songsheet::types::{Mode, Selection};

/// Transpose the chords in a song sheet, or remove them to leave plain lyrics.
///
/// Settings default to SONGSHEET_* environment variables (also read from .env);
/// flags override them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Song sheet to read (stdin when omitted)
    input: Option<String>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Remove chord lines instead of transposing them
    #[arg(long)]
    remove: bool,

    /// Whole steps to transpose (-6..=6)
    #[arg(short, long, allow_negative_numbers = true)]
    steps: Option<i32>,

    /// Add a half step; `--half-step=false` turns it off
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    half_step: Option<bool>,

    /// Words checked per line before accepting it as a chord line (0 = all)
    #[arg(short, long)]
    threshold: Option<u32>,

    /// Comma-delimited chord suffixes
    #[arg(long, value_name = "LIST")]
    suffixes: Option<String>,

    /// Only process START..END (byte offsets) of the input
    #[arg(long, value_name = "START..END")]
    selection: Option<Selection>,

    /// Process every .txt sheet under this directory
    #[arg(long, requires = "out_dir", conflicts_with_all = ["input", "output", "selection"])]
    dir: Option<String>,

    /// Where batch results are written
    #[arg(long, requires = "dir")]
    out_dir: Option<String>,

    /// Print a JSON report on stdout; the text still goes to --output if given
    #[arg(long)]
    json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings
    fn apply(&self, config: &mut Config) {
        if self.remove {
            config.mode = Mode::RemoveChords;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(half_step) = self.half_step {
            config.half_step = half_step;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(suffixes) = &self.suffixes {
            config.chord_suffixes.clone_from(suffixes);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load().context("Failed to load settings")?;
    args.apply(&mut config);

    match (&args.dir, &args.out_dir) {
        (Some(dir), Some(out_dir)) => run_batch(&args, &config, dir, out_dir),
        _ => run_single(&args, &config),
    }
}

/// Logs go to stderr; stdout carries only the result.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

fn run_single(args: &Args, config: &Config) -> Result<()> {
    let options = config.options(args.selection)?;

    let text = match &args.input {
        Some(path) => fs_err::read_to_string(expand(path))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let result = process(&text, &options)?;

    if let Some(path) = &args.output {
        fs_err::write(expand(path), &result.text)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if args.output.is_none() {
            io::stdout().lock().write_all(result.text.as_bytes())?;
        }
        eprintln!("{}", result.summary);
    }

    Ok(())
}

fn run_batch(args: &Args, config: &Config, dir: &str, out_dir: &str) -> Result<()> {
    let options = config.options(None)?;
    let songbook = Songbook::scan(&expand(dir))?;
    let reports = songbook.process(&options, &expand(out_dir));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.outcome {
                SheetOutcome::Done { summary, .. } => eprintln!("{}: {summary}", report.path.display()),
                SheetOutcome::Failed { error } => eprintln!("{}: failed: {error}", report.path.display()),
            }
        }
    }

    let failed = reports.iter().filter(|r| r.is_failure()).count();
    if failed > 0 {
        bail!("{failed} of {} sheets failed", reports.len());
    }
    Ok(())
}
