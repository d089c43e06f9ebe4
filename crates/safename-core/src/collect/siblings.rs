//! Case-insensitive index of names that are taken in each directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Which names are taken, keyed by case-folded path.
///
/// Target file systems like FAT and exFAT ignore case, so two names that
/// differ only by case cannot coexist there. Each folded path remembers the
/// exact paths occupying it, which lets a file be renamed to a different
/// casing of its own name without colliding with itself.
#[derive(Debug, Clone, Default)]
pub struct SiblingIndex {
    taken: HashMap<PathBuf, Vec<PathBuf>>,
}

impl SiblingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// `path` with its final component lower-cased.
    pub fn fold(path: &Path) -> PathBuf {
        match path.file_name() {
            Some(name) => path.with_file_name(name.to_string_lossy().to_lowercase()),
            None => path.to_path_buf(),
        }
    }

    /// Mark `path` as taking its (case-folded) name. Registering the same
    /// path twice has no further effect.
    pub fn register(&mut self, path: &Path) {
        let occupants = self.taken.entry(Self::fold(path)).or_default();
        if !occupants.iter().any(|p| p == path) {
            occupants.push(path.to_path_buf());
        }
    }

    /// Whether anything occupies the folded name of `path`.
    pub fn is_taken(&self, path: &Path) -> bool {
        self.taken.contains_key(&Self::fold(path))
    }

    /// The first path other than `exclude` that occupies the folded name of
    /// `path`.
    pub fn occupant_other_than(&self, path: &Path, exclude: &Path) -> Option<&Path> {
        self.taken
            .get(&Self::fold(path))?
            .iter()
            .find(|p| p.as_path() != exclude)
            .map(PathBuf::as_path)
    }

    /// Number of distinct folded names
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
