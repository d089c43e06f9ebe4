//! User supplied search-and-replace rules

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Replaces occurrences of `target`, left to right, with successive members
/// of `replacements`. Once the list runs out the last member is reused for
/// every remaining occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub target: String,
    pub replacements: Vec<String>,
}

impl SubstitutionRule {
    pub fn new(target: impl Into<String>, replacements: Vec<String>) -> Result<Self> {
        let rule = Self {
            target: target.into(),
            replacements,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Parse the `TARGET:REPLACEMENT1,REPLACEMENT2,...` form.
    ///
    /// The target ends at the first `:`, so it cannot itself contain one.
    pub fn parse(rule: &str) -> Result<Self> {
        let (target, subs) = rule
            .split_once(':')
            .ok_or_else(|| Error::InvalidSubstitution(rule.to_string()))?;
        let replacements = subs.split(',').map(str::to_string).collect();
        Self::new(target, replacements).map_err(|_| Error::InvalidSubstitution(rule.to_string()))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.target.is_empty() || self.replacements.is_empty() {
            return Err(Error::InvalidSubstitution(format!(
                "{}:{}",
                self.target,
                self.replacements.join(",")
            )));
        }
        Ok(())
    }

    /// Apply this rule to `name`.
    ///
    /// Occurrences are found in the input only, text inserted by a
    /// replacement is never matched again.
    pub fn apply(&self, name: &str) -> String {
        let Some(last) = self.replacements.last() else {
            return name.to_string();
        };

        let mut result = String::with_capacity(name.len());
        let mut cursor = 0;
        for (i, (start, matched)) in name.match_indices(self.target.as_str()).enumerate() {
            result.push_str(&name[cursor..start]);
            result.push_str(self.replacements.get(i).unwrap_or(last));
            cursor = start + matched.len();
        }
        result.push_str(&name[cursor..]);
        result
    }
}

impl FromStr for SubstitutionRule {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Apply each rule in order, each one seeing the previous rule's output.
pub fn apply_all(rules: &[SubstitutionRule], name: &str) -> String {
    rules
        .iter()
        .fold(name.to_string(), |current, rule| rule.apply(&current))
}
