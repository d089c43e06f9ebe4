//! Command line surface
//!
//! Usage:
//!   safename [OPTIONS] [FILES]...
//!
//! Settings from the config file (`--config`, or `safename/config.json` in
//! the platform config directory) are applied first, flags override them and
//! `--replace` rules are appended after the file's rules.

use std::path::PathBuf;

use clap::Parser;
use safename_core::{Config, ProfileKind, RenameReport, Strategy, SubstitutionRule};

/// Rename files so their names are valid on FAT/exFAT file systems, or
/// within the POSIX portable character set
#[derive(Parser, Debug)]
#[command(name = "safename", version, arg_required_else_help = true)]
pub struct Args {
    /// Files to rename
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Rename DIRECTORY and everything inside it (repeatable)
    #[arg(short = 'r', long = "recurse", value_name = "DIRECTORY")]
    pub recurse: Vec<PathBuf>,

    /// Only print what would be renamed
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// What to do with invalid characters: remove or represent
    #[arg(short = 's', long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Restrict names to the POSIX portable character set
    #[arg(short = 'p', long)]
    pub portable: bool,

    /// Replace TARGET with REPLACEMENT1, then REPLACEMENT2, ... (repeatable)
    #[arg(short = 'c', long = "replace", value_name = "TARGET:REPLACEMENT1,...")]
    pub replace: Vec<SubstitutionRule>,

    /// Truncate names to at most BYTES bytes
    #[arg(short = 't', long, value_name = "BYTES", value_parser = parse_truncate)]
    pub truncate: Option<usize>,

    /// Load settings from FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_truncate(s: &str) -> Result<usize, safename_core::Error> {
    s.parse::<usize>()
        .ok()
        .filter(|&len| len >= 1)
        .ok_or_else(|| safename_core::Error::InvalidTruncateLength(s.to_string()))
}

impl Args {
    /// Layer the flags on top of `base` settings
    pub fn apply_to(self, mut base: Config) -> Config {
        base.files = self.files;
        base.recurse_dirs = self.recurse;
        base.dry_run = self.dry_run;
        if self.portable {
            base.profile = ProfileKind::Portable;
        }
        if let Some(strategy) = self.strategy {
            base.strategy = strategy;
        }
        base.substitutions.extend(self.replace);
        if self.truncate.is_some() {
            base.truncate = self.truncate;
        }
        base
    }

    /// Load the settings file and apply the flags
    pub fn into_config(self) -> anyhow::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(self.apply_to(base))
    }
}

/// Run a batch and print its report
pub fn run(args: Args) -> anyhow::Result<()> {
    let json = args.json;
    let config = args.into_config()?;
    tracing::debug!(
        "Running with profile {}, strategy {}, {} rules",
        config.profile,
        config.strategy,
        config.substitutions.len()
    );

    let report = safename_core::run(&config)?;

    if json {
        print_json(&report);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &RenameReport) {
    for diagnostic in &report.diagnostics {
        eprintln!("Warning: {}", diagnostic);
    }

    if report.dry_run {
        for decision in report.renames() {
            println!(
                "{} -> <<{}>>",
                decision.original_path.display(),
                decision.new_path.display()
            );
        }
        println!("{} files would be renamed", report.renamed);
    } else {
        println!("{} files renamed!", report.renamed);
    }
}

fn print_json(report: &RenameReport) {
    let diagnostics: Vec<String> = report.diagnostics.iter().map(|d| d.to_string()).collect();
    println!(
        "{}",
        serde_json::json!({
            "dry_run": report.dry_run,
            "renamed": report.renamed,
            "decisions": report.decisions,
            "diagnostics": diagnostics,
        })
    );
}
