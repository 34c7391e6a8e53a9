use std::fmt;
use std::str::FromStr;

use crate::cursor::{CaptureMatches, Captures, Match, Matches};
use crate::error::{Error, Result};

/// A compiled regular expression.
///
/// Matching is delegated to the [`regex`] crate, which guarantees linear
/// runtime (no backtracking) and creates fresh match state per call, so a
/// `Pattern` is immutable and may be shared by any number of concurrent
/// calls. Compilation cost is paid once; callers are expected to reuse the
/// compiled value across invocations.
///
/// # Example
///
/// ```rust
/// use regexp_scalar::Pattern;
///
/// let p = Pattern::new("[0-9]+").unwrap();
/// assert!(p.is_match("a1b2c3"));
/// assert_eq!(p.find("a1b2c3").unwrap().as_str(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    re: regex::Regex,
}

impl Pattern {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when the pattern text is rejected
    /// by the regex compiler.
    pub fn new(pattern: &str) -> Result<Pattern> {
        Ok(Pattern {
            re: regex::Regex::new(pattern)?,
        })
    }

    /// Returns the original pattern text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }

    /// Number of capture groups declared by the pattern, not counting the
    /// implicit group 0 for the whole match.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.re.captures_len() - 1
    }

    /// Whether the pattern matches anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// First match in `text`, if any.
    #[inline]
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_at(text, 0)
    }

    /// First match beginning at or after byte offset `start`.
    ///
    /// `start` must lie on a codepoint boundary and be at most `text.len()`.
    /// Anchors look at the whole text, not the sub-slice, so `^` does not
    /// match at a non-zero `start`.
    #[inline]
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<Match<'t>> {
        self.re
            .find_at(text, start)
            .map(|m| Match::new(text, m.start(), m.end()))
    }

    /// Capture groups of the first match beginning at or after byte offset
    /// `start`. Group 0 is always present; a group that did not participate
    /// in the match is `None`.
    #[inline]
    pub fn captures_at<'t>(&self, text: &'t str, start: usize) -> Option<Captures<'t>> {
        self.re
            .captures_at(text, start)
            .map(|caps| Captures::new(text, caps))
    }

    /// Returns an iterator over successive non-overlapping matches in
    /// `text`, following the zero-width resume rule documented on
    /// [`Matches`].
    #[inline]
    pub fn find_iter<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches::new(self, text)
    }

    /// Like [`Pattern::find_iter`], but yields the capture groups of each
    /// match.
    #[inline]
    pub fn captures_iter<'p, 't>(&'p self, text: &'t str) -> CaptureMatches<'p, 't> {
        CaptureMatches::new(self, text)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    /// Attempts to compile a string into a pattern.
    fn from_str(s: &str) -> Result<Pattern> {
        Pattern::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let s = r"([0-9]+)-([0-9]+)";
        let p = s.parse::<Pattern>().unwrap();
        assert_eq!(p.as_str(), s);
        assert_eq!(p.to_string(), s);
    }

    #[test]
    fn group_count_excludes_whole_match() {
        assert_eq!(Pattern::new("abc").unwrap().group_count(), 0);
        assert_eq!(Pattern::new("(a)(b(c))").unwrap().group_count(), 3);
    }

    #[test]
    fn find_at_respects_start_offset() {
        let p = Pattern::new("[0-9]").unwrap();
        let m = p.find_at("a1b2", 2).unwrap();
        assert_eq!((m.start(), m.end()), (3, 4));
        assert!(p.find_at("a1b2", 4).is_none());
    }
}
