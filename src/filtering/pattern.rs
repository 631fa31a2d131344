//! Regex filter.
use regex::Regex;

use super::Filter;
use crate::error::Error;

/// Detects lines where a regular expression matches anywhere.
///
/// Matching is unanchored: use `^`/`$` to anchor the expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `src` into a new [Pattern].
    pub fn new(src: &str) -> Result<Self, Error> {
        Ok(Self {
            regex: Regex::new(src)?,
        })
    }

    /// Get a reference to the pattern's regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Get the source of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Filter<&str> for Pattern {
    fn detect(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
