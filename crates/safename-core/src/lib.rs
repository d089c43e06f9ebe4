//! # safename-core
//!
//! Rename planning engine for making file names valid on constrained file
//! systems such as FAT32/exFAT, or within the POSIX portable character set.
//!
//! This crate provides:
//! - Character profiles describing which code points a file system accepts
//! - A name sanitizing pipeline (encoding repair, user substitutions,
//!   invalid character removal or escaping, truncation)
//! - Collection of target paths, ordered so a whole tree can be renamed in
//!   place
//! - A rename executor with case-insensitive collision detection and a
//!   dry-run mode
//!
//! ## Modules
//!
//! - [`collect`] - Target collection, ordering and the sibling index
//! - [`config`] - Batch configuration and substitution rules
//! - [`error`] - Error and diagnostic types
//! - [`profile`] - Character profiles
//! - [`rename`] - Rename execution and decision records
//! - [`sanitize`] - The name sanitizing pipeline
//!
//! ## Example
//!
//! ```no_run
//! use safename_core::{run, Config, Strategy};
//!
//! let config = Config::new()
//!     .with_recurse_dir("Music")
//!     .with_strategy(Strategy::Remove)
//!     .dry_run(true);
//!
//! let report = run(&config).expect("Failed to resolve paths");
//! for decision in report.renames() {
//!     println!("{} -> {}", decision.original_path.display(), decision.new_path.display());
//! }
//! println!("{} files renamed!", report.renamed);
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod profile;
pub mod rename;
pub mod sanitize;

// Error types
pub use error::{Diagnostic, Error, Result};

// Configuration
pub use config::{Config, Strategy, SubstitutionRule};

// Character profiles
pub use profile::{CharacterProfile, ProfileKind};

// Name sanitizing
pub use sanitize::{sanitize, sanitize_str, EMPTY_PLACEHOLDER, INVALID_PLACEHOLDER};

// Collection
pub use collect::{collect, compare_paths, Collection, SiblingIndex, TargetList};

// Execution
pub use rename::{execute, run, RenameDecision, RenameOutcome, RenameReport};
