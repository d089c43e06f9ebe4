//! Turning an arbitrary file name into one that is valid under a profile.
//!
//! The pipeline runs in a fixed order, each stage seeing the previous
//! stage's output:
//!
//! 1. encoding repair: runs of bytes that are not UTF-8 become `_INVALID_`
//! 2. substitution rules, in configuration order
//! 3. characters outside the profile are removed or escaped as `_U<HEX>_`
//! 4. an empty result becomes `_EMPTY_`
//! 5. truncation to the configured byte length, on a character boundary
//!
//! Escape tokens are not reversible: a name that already contains the text
//! `_U3F_` is indistinguishable from one where `?` was escaped.

use std::collections::HashMap;
use std::ffi::OsStr;

use crate::config::{apply_all, Config, Strategy};
use crate::profile::CharacterProfile;

/// Stand-in for a run of bytes that are not valid UTF-8
pub const INVALID_PLACEHOLDER: &str = "_INVALID_";

/// Stand-in for a name that sanitized to nothing
pub const EMPTY_PLACEHOLDER: &str = "_EMPTY_";

/// Sanitize a file name taken straight from the OS.
///
/// # Examples
///
/// ```
/// use safename_core::{sanitize, Config, Strategy};
/// use std::ffi::OsStr;
///
/// let config = Config::new().with_strategy(Strategy::Remove);
/// assert_eq!(sanitize(OsStr::new("::?\\"), &config), "_EMPTY_");
///
/// let config = Config::new();
/// assert_eq!(sanitize(OsStr::new("::?\\"), &config), "_U3A__U3A__U3F__U5C_");
/// ```
pub fn sanitize(raw_name: &OsStr, config: &Config) -> String {
    let repaired = repair_encoding(raw_name.as_encoded_bytes());
    sanitize_str(&repaired, config)
}

/// Run stages 2 to 5 of the pipeline on a name that is already valid text.
pub fn sanitize_str(name: &str, config: &Config) -> String {
    let substituted = apply_all(&config.substitutions, name);
    let mut restricted =
        restrict_to_profile(&substituted, &config.character_profile(), config.strategy);
    if restricted.is_empty() {
        restricted = EMPTY_PLACEHOLDER.to_string();
    }
    match config.truncate_len() {
        Some(max_bytes) => truncate(&restricted, max_bytes).to_string(),
        None => restricted,
    }
}

/// Replace each maximal run of invalid UTF-8 with [`INVALID_PLACEHOLDER`],
/// leaving valid text around it untouched.
pub fn repair_encoding(raw: &[u8]) -> String {
    let mut repaired = String::with_capacity(raw.len());
    let mut in_invalid_run = false;
    for chunk in raw.utf8_chunks() {
        let valid = chunk.valid();
        if !valid.is_empty() {
            repaired.push_str(valid);
            in_invalid_run = false;
        }
        if !chunk.invalid().is_empty() && !in_invalid_run {
            repaired.push_str(INVALID_PLACEHOLDER);
            in_invalid_run = true;
        }
    }
    repaired
}

/// The `_U<HEX>_` escape token for `c`, uppercase hex without padding.
pub fn escape_token(c: char) -> String {
    format!("_U{:X}_", c as u32)
}

/// Remove or escape every character of `name` that `profile` rejects.
///
/// The replacement for each distinct invalid character is worked out first,
/// then the name is rewritten in one pass so inserted text is never
/// inspected again.
pub fn restrict_to_profile(name: &str, profile: &CharacterProfile, strategy: Strategy) -> String {
    let replacements: HashMap<char, String> = name
        .chars()
        .filter(|&c| !profile.is_valid(c))
        .map(|c| {
            let replacement = match strategy {
                Strategy::Remove => String::new(),
                Strategy::Represent => escape_token(c),
            };
            (c, replacement)
        })
        .collect();

    if replacements.is_empty() {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        match replacements.get(&c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

/// Cut `name` to at most `max_bytes` bytes without splitting a character.
///
/// A name is never cut to nothing: when even the first character is longer
/// than `max_bytes`, that character alone is kept.
pub fn truncate(name: &str, max_bytes: usize) -> &str {
    if name.len() <= max_bytes {
        return name;
    }
    let mut end = max_bytes;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    if end == 0 {
        end = name.chars().next().map_or(0, char::len_utf8);
    }
    &name[..end]
}
