use std::sync::Arc;

use thompson_nfa_compiler::{Matcher, NFA};

use crate::{builders::RegexBuilder, error::Error};

/// A compiled regular expression for matching whole strings.
///
/// Compilation happens once, in [`Regex::new`]. A `Regex` should then be
/// reused for every string it is matched against; cloning it only bumps a
/// reference count, and it may be shared freely between threads.
///
/// ```
/// use thompson::Regex;
///
/// let re = Regex::new("(ab|cd)?e").unwrap();
/// assert!(re.is_match("e"));
/// assert!(re.is_match("cde"));
/// assert!(!re.is_match("abcde"));
/// ```
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    nfa: Arc<NFA>,
}

impl Regex {
    /// Compiles a regular expression with the default configuration.
    ///
    /// Use [`RegexBuilder`] to set a size or nesting limit.
    pub fn new(re: &str) -> Result<Regex, Error> {
        RegexBuilder::new(re).build()
    }

    pub(crate) fn from_parts(pattern: &str, nfa: NFA) -> Regex {
        Regex { pattern: Arc::from(pattern), nfa: Arc::new(nfa) }
    }

    /// Returns true if and only if the entire haystack matches.
    pub fn is_match(&self, haystack: &str) -> bool {
        Matcher::new(&self.nfa).is_match(haystack)
    }

    /// Like [`Regex::is_match`], but for bytes that should hold UTF-8.
    ///
    /// Fails with [`Error::Match`] if `haystack` is not valid UTF-8.
    pub fn is_match_bytes(&self, haystack: &[u8]) -> Result<bool, Error> {
        Ok(Matcher::new(&self.nfa).is_match_bytes(haystack)?)
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The compiled automaton.
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl core::fmt::Display for Regex {
    /// Shows the original regular expression.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Debug for Regex {
    /// Shows the original regular expression.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl core::str::FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    fn from_str(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

impl TryFrom<&str> for Regex {
    type Error = Error;

    fn try_from(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

/// Compiles `pattern` and matches it against `haystack` once.
///
/// This compiles the pattern on every call. When matching more than one
/// haystack, build a [`Regex`] and reuse it instead.
///
/// ```
/// assert_eq!(thompson::is_match("ab?", "a").unwrap(), true);
/// assert!(thompson::is_match("a*", "aaa").is_err());
/// ```
pub fn is_match(pattern: &str, haystack: &str) -> Result<bool, Error> {
    Ok(Regex::new(pattern)?.is_match(haystack))
}
