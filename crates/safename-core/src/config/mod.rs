//! Configuration for a rename batch

mod substitution;

pub use substitution::SubstitutionRule;
pub(crate) use substitution::apply_all;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::profile::{CharacterProfile, ProfileKind};

/// What to do with a character the profile does not allow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Delete the character
    Remove,
    /// Replace the character with a `_U<HEX>_` escape token
    #[default]
    Represent,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remove" => Ok(Self::Remove),
            "represent" => Ok(Self::Represent),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remove => write!(f, "remove"),
            Self::Represent => write!(f, "represent"),
        }
    }
}

/// Configuration for a rename batch.
///
/// Built once by the caller and then only read. The target selection
/// (`files`, `recurse_dirs`) and `dry_run` are per-run and never come from a
/// config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit files to rename
    #[serde(skip)]
    pub files: Vec<PathBuf>,
    /// Directories whose whole tree is renamed, the directory included
    #[serde(skip)]
    pub recurse_dirs: Vec<PathBuf>,
    /// Target file system character profile
    pub profile: ProfileKind,
    /// Handling of characters outside the profile
    pub strategy: Strategy,
    /// Search-and-replace rules, applied in order
    pub substitutions: Vec<SubstitutionRule>,
    /// Maximum name length in bytes. `None` or `0` disables truncation
    pub truncate: Option<usize>,
    /// Only report what would be renamed
    #[serde(skip)]
    pub dry_run: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn with_recurse_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.recurse_dirs.push(path.into());
        self
    }

    pub fn with_profile(mut self, profile: ProfileKind) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_substitution(mut self, rule: SubstitutionRule) -> Self {
        self.substitutions.push(rule);
        self
    }

    pub fn with_truncate(mut self, bytes: usize) -> Self {
        self.truncate = Some(bytes);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The character profile selected by [`Config::profile`]
    pub fn character_profile(&self) -> CharacterProfile {
        self.profile.profile()
    }

    /// Effective truncation length, if any
    pub fn truncate_len(&self) -> Option<usize> {
        self.truncate.filter(|&len| len > 0)
    }

    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("safename").join("config.json"))
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from the default location, falling back to defaults when
    /// there is no config file
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        for rule in &self.substitutions {
            rule.validate()?;
        }
        Ok(())
    }
}
