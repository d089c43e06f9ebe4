//! Gathering the paths to rename

mod order;
mod siblings;

pub use order::{compare_paths, TargetList};
pub use siblings::SiblingIndex;

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Diagnostic, Error, Result};

/// Everything the executor needs for a batch
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Absolute targets, descendants before ancestors
    pub targets: TargetList,
    /// Names already taken next to the targets
    pub siblings: SiblingIndex,
    /// Missing files and unreadable directories
    pub diagnostics: Vec<Diagnostic>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Build the ordered target list and sibling index for `config`.
///
/// Missing files and unreadable directories are recorded in
/// [`Collection::diagnostics`] and collection carries on. The only error is
/// failing to resolve the working directory for a relative path.
pub fn collect(config: &Config) -> Result<Collection> {
    let mut collection = Collection::new();
    let mut seeded_dirs = HashSet::new();

    for dir in &config.recurse_dirs {
        let dir = absolutize(dir)?;
        if dir.symlink_metadata().is_ok() {
            seed_parent(&dir, &mut seeded_dirs, &mut collection);
        }
        walk_tree(&dir, &mut collection);
    }

    for file in &config.files {
        let path = absolutize(file)?;
        if path.symlink_metadata().is_err() {
            collection.push_diagnostic(Diagnostic::MissingFile(file.clone()));
        } else {
            seed_parent(&path, &mut seeded_dirs, &mut collection);
            collection.siblings.register(&path);
        }
        if collection.targets.insert(path.clone()) {
            tracing::debug!("Collected {}", path.display());
        }
    }

    tracing::debug!(
        "Collected {} targets, {} taken names, {} problems",
        collection.targets.len(),
        collection.siblings.len(),
        collection.diagnostics.len()
    );
    Ok(collection)
}

/// Add `root` and everything below it. Symlinks are not followed.
fn walk_tree(root: &Path, collection: &mut Collection) {
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                collection.siblings.register(path);
                if collection.targets.insert(path.to_path_buf()) {
                    tracing::debug!("Collected {}", path.display());
                }
            }
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                collection.push_diagnostic(Diagnostic::UnsearchableDirectory {
                    path,
                    message: e.to_string(),
                });
            }
        }
    }
}

/// Seed the directory holding `path`, once per directory, so the neighbours
/// of a target count as taken.
fn seed_parent(path: &Path, seeded_dirs: &mut HashSet<PathBuf>, collection: &mut Collection) {
    if let Some(parent) = path.parent() {
        if seeded_dirs.insert(parent.to_path_buf()) {
            seed_directory(parent, collection);
        }
    }
}

/// Register every entry of `dir` as taken, without making them targets.
fn seed_directory(dir: &Path, collection: &mut Collection) {
    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                collection.siblings.register(&entry.path());
            }
        }
        Err(e) => collection.push_diagnostic(Diagnostic::UnsearchableDirectory {
            path: dir.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Make `path` absolute against the working directory and remove `.` and
/// `..` components lexically. Symlinks are left unresolved so that a link is
/// renamed rather than its target.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(Error::NoWorkingDirectory)?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
