//! Applying sanitized names to the collected targets

use std::fs;
use std::path::{Path, PathBuf};

use crate::collect::{collect, SiblingIndex};
use crate::config::Config;
use crate::error::{Diagnostic, Result};
use crate::rename::outcome::{RenameDecision, RenameOutcome, RenameReport};
use crate::sanitize::sanitize;

/// Where `target` would end up after sanitizing its final component.
pub fn planned_path(target: &Path, config: &Config) -> PathBuf {
    match target.file_name() {
        Some(name) => target.with_file_name(sanitize(name, config)),
        None => target.to_path_buf(),
    }
}

/// Rename every target, in order, checking each new name against `siblings`.
///
/// `targets` must be ordered as produced by [`collect`] so that directories
/// come after their contents. Every accepted new name is registered in
/// `siblings` before moving on, so later targets see it as taken. With
/// [`Config::dry_run`] set nothing is touched on disk but decisions and the
/// index evolve exactly as in a real run.
pub fn execute(targets: &[PathBuf], siblings: &mut SiblingIndex, config: &Config) -> RenameReport {
    let mut report = RenameReport::new(config.dry_run);

    for target in targets {
        if target.symlink_metadata().is_err() {
            tracing::debug!("Skipping missing {}", target.display());
            report.add_decision(RenameDecision::new(
                target.clone(),
                target.clone(),
                RenameOutcome::SkippedMissing,
            ));
            continue;
        }

        let new_path = planned_path(target, config);
        if new_path == *target {
            report.add_decision(RenameDecision::new(
                target.clone(),
                new_path,
                RenameOutcome::SkippedNoChange,
            ));
            continue;
        }

        if let Some(taken) = siblings.occupant_other_than(&new_path, target) {
            let taken = taken.to_path_buf();
            report.add_diagnostic(Diagnostic::Collision {
                path: target.clone(),
                new_path: new_path.clone(),
                taken,
            });
            report.add_decision(RenameDecision::new(
                target.clone(),
                new_path,
                RenameOutcome::SkippedCollision,
            ));
            continue;
        }

        siblings.register(&new_path);

        let outcome = if config.dry_run {
            tracing::info!("Would rename {} -> {}", target.display(), new_path.display());
            RenameOutcome::Renamed
        } else {
            match fs::rename(target, &new_path) {
                Ok(()) => {
                    tracing::info!("Renamed {} -> {}", target.display(), new_path.display());
                    RenameOutcome::Renamed
                }
                Err(e) => {
                    report.add_diagnostic(Diagnostic::RenameFailed {
                        path: target.clone(),
                        new_path: new_path.clone(),
                        message: e.to_string(),
                    });
                    RenameOutcome::Failed
                }
            }
        };
        report.add_decision(RenameDecision::new(target.clone(), new_path, outcome));
    }

    report
}

/// Collect and execute in one go.
///
/// Collection diagnostics come first in the report, followed by those from
/// renaming.
pub fn run(config: &Config) -> Result<RenameReport> {
    let collection = collect(config)?;
    let mut siblings = collection.siblings;
    let mut report = execute(collection.targets.as_slice(), &mut siblings, config);

    let mut diagnostics = collection.diagnostics;
    diagnostics.append(&mut report.diagnostics);
    report.diagnostics = diagnostics;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Strategy, SubstitutionRule};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_planned_path_only_changes_final_component() {
        let config = Config::new();
        assert_eq!(
            planned_path(Path::new("/what?/why?"), &config),
            PathBuf::from("/what?/why_U3F_")
        );
        assert_eq!(planned_path(Path::new("/"), &config), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn test_renames_nested_before_parent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("bad:dir");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("bad*file"));

        let config = Config::new()
            .with_recurse_dir(&dir)
            .with_strategy(Strategy::Remove);
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 2);
        assert!(report.is_clean());
        let new_dir = temp_dir.path().join("baddir");
        assert!(new_dir.join("badfile").exists());
        assert!(!dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_dry_run_leaves_files_alone() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("huh?");
        touch(&file);

        let config = Config::new().with_file(&file).dry_run(true);
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 1);
        assert!(report.dry_run);
        assert_eq!(
            report.decisions,
            vec![RenameDecision::new(
                file.clone(),
                temp_dir.path().join("huh_U3F_"),
                RenameOutcome::Renamed,
            )]
        );
        assert!(file.exists());
        assert!(!temp_dir.path().join("huh_U3F_").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_case_only_collision_between_batch_members() {
        let temp_dir = TempDir::new().unwrap();
        let upper = temp_dir.path().join("A?");
        let lower = temp_dir.path().join("a?");
        touch(&upper);
        if lower.exists() {
            return;
        }
        touch(&lower);

        let config = Config::new().with_file(&upper).with_file(&lower);
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 1);
        assert_eq!(report.count(RenameOutcome::SkippedCollision), 1);
        assert!(matches!(
            &report.diagnostics[..],
            [Diagnostic::Collision { path, taken, .. }]
                if path == &lower && taken == &temp_dir.path().join("A_U3F_")
        ));
        assert!(temp_dir.path().join("A_U3F_").exists());
        assert!(lower.exists());
    }

    #[test]
    fn test_rule_renaming_onto_existing_name_collides() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("d");
        fs::create_dir(&dir).unwrap();
        let upper = dir.join("Foo.txt");
        let lower = dir.join("foo.txt");
        touch(&upper);
        // Case-insensitive hosts cannot hold both names
        if lower.exists() {
            return;
        }
        touch(&lower);

        let config = Config::new()
            .with_recurse_dir(&dir)
            .with_substitution(SubstitutionRule::parse("F:f").unwrap());
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 0);
        let collision = report
            .decisions
            .iter()
            .find(|d| d.outcome == RenameOutcome::SkippedCollision)
            .unwrap();
        assert_eq!(collision.original_path, upper);
        assert_eq!(collision.new_path, lower);
        assert!(upper.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_recursion_root_does_not_overwrite_neighbour() {
        let temp_dir = TempDir::new().unwrap();
        let file_root = temp_dir.path().join("a?.txt");
        let file_neighbour = temp_dir.path().join("a_U3F_.txt");
        let dir_root = temp_dir.path().join("x?");
        let dir_neighbour = temp_dir.path().join("X_U3F_");
        fs::write(&file_root, b"NEW").unwrap();
        fs::write(&file_neighbour, b"KEEP").unwrap();
        fs::create_dir(&dir_root).unwrap();
        fs::create_dir(&dir_neighbour).unwrap();

        let config = Config::new()
            .with_recurse_dir(&file_root)
            .with_recurse_dir(&dir_root);
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 0);
        assert_eq!(report.count(RenameOutcome::SkippedCollision), 2);
        assert_eq!(fs::read_to_string(&file_neighbour).unwrap(), "KEEP");
        assert!(file_root.exists());
        assert!(dir_root.is_dir());
        assert!(dir_neighbour.is_dir());
    }

    #[test]
    fn test_case_change_of_own_name_is_not_a_collision() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.txt");
        touch(&file);

        let config = Config::new()
            .with_file(&file)
            .with_substitution(SubstitutionRule::parse("F:f").unwrap());
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_unchanged_and_missing_targets() {
        let temp_dir = TempDir::new().unwrap();
        let fine = temp_dir.path().join("fine.txt");
        let missing = temp_dir.path().join("gone.txt");
        touch(&fine);

        let mut siblings = SiblingIndex::new();
        let report = execute(
            &[fine.clone(), missing.clone()],
            &mut siblings,
            &Config::new(),
        );

        assert_eq!(report.renamed, 0);
        assert_eq!(report.decisions[0].outcome, RenameOutcome::SkippedNoChange);
        assert_eq!(report.decisions[1].outcome, RenameOutcome::SkippedMissing);
        assert!(siblings.is_empty());
    }

    #[test]
    fn test_truncation_collisions_detected() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("report-2023.txt");
        let second = temp_dir.path().join("report-2024.txt");
        touch(&first);
        touch(&second);

        let config = Config::new()
            .with_file(&first)
            .with_file(&second)
            .with_truncate(6)
            .dry_run(true);
        let report = run(&config).unwrap();

        assert_eq!(report.renamed, 1);
        assert_eq!(report.count(RenameOutcome::SkippedCollision), 1);
    }
}
