//! Character profiles: which code points a target file system accepts in names

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Code points valid in FAT32 and exFAT file names.
///
/// Excludes the C0 controls and `" * / : < > ? \ |`.
const FAT_RANGES: &[(u32, u32)] = &[
    (0x20, 0x21),
    (0x23, 0x29),
    (0x2B, 0x2E),
    (0x30, 0x39),
    (0x3B, 0x3B),
    (0x3D, 0x3D),
    (0x40, 0x5B),
    (0x5D, 0x7B),
    (0x7D, MAX_CODE_POINT),
];

/// The POSIX portable file name character set: `A-Z a-z 0-9 . _ -`
const POSIX_PORTABLE_RANGES: &[(u32, u32)] = &[
    (0x2D, 0x2D),
    (0x2E, 0x2E),
    (0x5F, 0x5F),
    (0x30, 0x39),
    (0x41, 0x5A),
    (0x61, 0x7A),
];

/// Built-in profile selector, used by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// FAT32 / exFAT safe names
    #[default]
    Fat,
    /// POSIX portable file name character set
    Portable,
}

impl ProfileKind {
    /// Resolve the selector to its character profile.
    pub fn profile(self) -> CharacterProfile {
        match self {
            Self::Fat => CharacterProfile::fat(),
            Self::Portable => CharacterProfile::posix_portable(),
        }
    }
}

impl FromStr for ProfileKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fat" | "fat32" | "exfat" => Ok(Self::Fat),
            "portable" | "posix" => Ok(Self::Portable),
            _ => Err(Error::UnknownProfile(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fat => write!(f, "fat"),
            Self::Portable => write!(f, "portable"),
        }
    }
}

/// A set of inclusive code point ranges that are permitted in file names.
///
/// Ranges need not be sorted; membership is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterProfile {
    name: &'static str,
    ranges: &'static [(u32, u32)],
}

impl CharacterProfile {
    /// Profile for FAT32 and exFAT file systems.
    pub fn fat() -> Self {
        Self {
            name: "fat",
            ranges: FAT_RANGES,
        }
    }

    /// Profile for the POSIX portable file name character set.
    pub fn posix_portable() -> Self {
        Self {
            name: "portable",
            ranges: POSIX_PORTABLE_RANGES,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        self.ranges
    }

    /// Whether `c` falls inside any range of this profile.
    pub fn is_valid(&self, c: char) -> bool {
        let code = c as u32;
        self.ranges.iter().any(|&(lo, hi)| lo <= code && code <= hi)
    }

    /// Whether every character of `s` is valid.
    pub fn is_valid_str(&self, s: &str) -> bool {
        s.chars().all(|c| self.is_valid(c))
    }
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self::fat()
    }
}
