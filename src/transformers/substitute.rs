/*! Regex substitution

Replaces the first match of a pattern in a line, like `s/pattern/replacement/` would.
!*/
use regex::Regex;

use super::Transform;
use crate::error::Error;

/// First-match regex substitution.
///
/// The replacement can refer to capture groups with `$1` or `${name}`
/// (see [regex::Captures::expand]). Use `$$` for a literal `$`.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Get a reference to the substitution's pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Get a reference to the substitution's replacement.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Transform for Substitution {
    fn transform(&self, line: &str) -> Option<String> {
        let captures = self.pattern.captures(line)?;

        // group 0 is always there on a match
        let whole = captures.get(0)?;

        let mut out = String::with_capacity(line.len());
        out.push_str(&line[..whole.start()]);
        captures.expand(&self.replacement, &mut out);
        out.push_str(&line[whole.end()..]);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_prefix() {
        let s = Substitution::new(r"^ca", "fu").unwrap();
        assert_eq!(s.transform("cat"), Some("fut".to_string()));
        assert_eq!(s.transform("cabbage"), Some("fubbage".to_string()));
    }

    #[test]
    fn no_match() {
        let s = Substitution::new(r"^ca", "fu").unwrap();
        assert_eq!(s.transform("nomatch"), None);
    }

    #[test]
    fn first_match_only() {
        let s = Substitution::new("a", "o").unwrap();
        assert_eq!(s.transform("banana"), Some("bonana".to_string()));
    }

    #[test]
    fn capture_groups() {
        let s = Substitution::new(r"(\w+)@(\w+)", "$2 at ${1}").unwrap();
        assert_eq!(
            s.transform("mail: user@host!"),
            Some("mail: host at user!".to_string())
        );
    }

    #[test]
    fn named_groups() {
        let s = Substitution::new(r"(?P<key>\w+)=(?P<value>\w+)", "${value}=${key}").unwrap();
        assert_eq!(s.transform("a=b"), Some("b=a".to_string()));
    }

    #[test]
    fn invalid_pattern() {
        assert!(Substitution::new("(", "x").is_err());
    }
}
