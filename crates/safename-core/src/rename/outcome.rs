//! Per-target rename decisions and the batch report

use serde::Serialize;
use std::path::PathBuf;

use crate::error::Diagnostic;

/// What happened to a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenameOutcome {
    /// Renamed, or would be renamed in a dry run
    Renamed,
    /// The sanitized name equals the current one
    SkippedNoChange,
    /// The new name is already taken in the directory
    SkippedCollision,
    /// The target does not exist
    SkippedMissing,
    /// The OS refused the rename
    Failed,
}

impl std::fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Renamed => write!(f, "renamed"),
            Self::SkippedNoChange => write!(f, "skipped-no-change"),
            Self::SkippedCollision => write!(f, "skipped-collision"),
            Self::SkippedMissing => write!(f, "skipped-missing"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The decision taken for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameDecision {
    pub original_path: PathBuf,
    /// The path the target has (or would have) after the batch
    pub new_path: PathBuf,
    pub outcome: RenameOutcome,
}

impl RenameDecision {
    pub fn new(original_path: PathBuf, new_path: PathBuf, outcome: RenameOutcome) -> Self {
        Self {
            original_path,
            new_path,
            outcome,
        }
    }
}

/// Result of a rename batch
#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    /// One decision per target, in processing order
    pub decisions: Vec<RenameDecision>,
    /// Targets renamed, or that would be renamed in a dry run
    pub renamed: usize,
    /// Problems met along the way, none of them fatal
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the file system was left untouched
    pub dry_run: bool,
}

impl RenameReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Record a decision, counting it if it is a rename
    pub fn add_decision(&mut self, decision: RenameDecision) {
        if decision.outcome == RenameOutcome::Renamed {
            self.renamed += 1;
        }
        self.decisions.push(decision);
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Number of decisions with the given outcome
    pub fn count(&self, outcome: RenameOutcome) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.outcome == outcome)
            .count()
    }

    /// Decisions that rename something
    pub fn renames(&self) -> impl Iterator<Item = &RenameDecision> {
        self.decisions
            .iter()
            .filter(|d| d.outcome == RenameOutcome::Renamed)
    }

    /// Check if the batch finished without any diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
