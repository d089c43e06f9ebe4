//! Ordering of rename targets

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Total order over absolute paths in which every path sorts before its
/// ancestors.
///
/// Deeper paths (more components) come first. Paths of equal depth are
/// ordered by their final component, compared case-sensitively, and then by
/// the whole path so distinct paths never compare equal.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    let depth_a = a.components().count();
    let depth_b = b.components().count();
    depth_b
        .cmp(&depth_a)
        .then_with(|| a.file_name().cmp(&b.file_name()))
        .then_with(|| a.cmp(b))
}

/// Duplicate-free list of targets kept sorted by [`compare_paths`].
///
/// Renaming in this order means a directory is only renamed after all its
/// descendants, so their pre-computed paths are still valid when reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    paths: Vec<PathBuf>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `path` at its sorted position. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        match self
            .paths
            .binary_search_by(|entry| compare_paths(entry, &path))
        {
            Ok(_) => false,
            Err(pos) => {
                self.paths.insert(pos, path);
                true
            }
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths
            .binary_search_by(|entry| compare_paths(entry, path))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
