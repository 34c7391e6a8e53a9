use std::ops::Range;

use crate::pattern::Pattern;
use crate::utf8::next_codepoint_ix;

/// A single match of a pattern in the source text.
///
/// A match is a half-open byte range `[start, end)`; `start == end` is a
/// zero-width match. Byte offsets always lie on codepoint boundaries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    pub(crate) fn new(text: &'t str, start: usize, end: usize) -> Match<'t> {
        Match { text, start, end }
    }

    /// Returns the starting byte offset of the match in the text.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset of the match in the text.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the range over the starting and ending byte offsets.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the matched text.
    #[inline]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Returns true if and only if this is a zero-width match.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<'t> AsRef<str> for Match<'t> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'t> From<Match<'t>> for Range<usize> {
    fn from(m: Match<'t>) -> Range<usize> {
        m.range()
    }
}

/// Capture groups of a single match.
///
/// Group 0 is always present and is the whole match. A group that did not
/// participate in the match is `None`, distinct from a group that
/// participated and matched the empty string.
#[derive(Debug)]
pub struct Captures<'t> {
    text: &'t str,
    caps: regex::Captures<'t>,
}

#[allow(clippy::len_without_is_empty)] // follow regex's API
impl<'t> Captures<'t> {
    pub(crate) fn new(text: &'t str, caps: regex::Captures<'t>) -> Captures<'t> {
        Captures { text, caps }
    }

    /// Get the capture group by its index in the pattern. Index 0 returns
    /// the whole match; a group that did not participate is `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        self.caps
            .get(i)
            .map(|m| Match::new(self.text, m.start(), m.end()))
    }

    /// Returns the match for a named capture group, or `None` when the
    /// group did not participate or no group has the given name.
    #[inline]
    pub fn name(&self, name: &str) -> Option<Match<'t>> {
        self.caps
            .name(name)
            .map(|m| Match::new(self.text, m.start(), m.end()))
    }

    /// How many groups this pattern declares, counting group 0, so this is
    /// always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.caps.len()
    }
}

/// An iterator over successive non-overlapping matches in a text.
///
/// After a non-empty match the search resumes at the match's end offset;
/// after a zero-width match it resumes exactly one codepoint further, so an
/// empty-matching pattern steps through codepoint boundaries instead of
/// stalling on the same position forever. The search stops once the resume
/// offset reaches the end of the text: a match can still end on the final
/// boundary, but no new search starts there, so an empty source yields no
/// matches at all.
///
/// `'p` is the lifetime of the compiled pattern and `'t` is the lifetime of
/// the text being searched.
#[derive(Debug, Clone)]
pub struct Matches<'p, 't> {
    pattern: &'p Pattern,
    text: &'t str,
    last_end: usize,
}

impl<'p, 't> Matches<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, text: &'t str) -> Matches<'p, 't> {
        Matches {
            pattern,
            text,
            last_end: 0,
        }
    }

    /// Return the text being searched.
    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// Return the underlying pattern.
    #[inline]
    pub fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    fn advance_past(&mut self, start: usize, end: usize) {
        self.last_end = if end > start {
            end
        } else if end == self.text.len() {
            // A zero-width match can end on the final boundary (an anchor,
            // say) even though no search starts there.
            end + 1
        } else {
            next_codepoint_ix(self.text, end)
        };
    }
}

impl<'p, 't> Iterator for Matches<'p, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        if self.last_end >= self.text.len() {
            return None;
        }
        let m = self.pattern.find_at(self.text, self.last_end)?;
        self.advance_past(m.start(), m.end());
        Some(m)
    }
}

/// Like [`Matches`], but yielding the capture groups of each match.
///
/// Uses the same resume rule as [`Matches`], so the two iterators report the
/// same match sequence.
#[derive(Debug)]
pub struct CaptureMatches<'p, 't>(Matches<'p, 't>);

impl<'p, 't> CaptureMatches<'p, 't> {
    pub(crate) fn new(pattern: &'p Pattern, text: &'t str) -> CaptureMatches<'p, 't> {
        CaptureMatches(Matches::new(pattern, text))
    }

    /// Return the text being searched.
    #[inline]
    pub fn text(&self) -> &'t str {
        self.0.text
    }

    /// Return the underlying pattern.
    #[inline]
    pub fn pattern(&self) -> &'p Pattern {
        self.0.pattern
    }
}

impl<'p, 't> Iterator for CaptureMatches<'p, 't> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Captures<'t>> {
        if self.0.last_end >= self.0.text.len() {
            return None;
        }
        let caps = self.0.pattern.captures_at(self.0.text, self.0.last_end)?;
        let m = caps
            .get(0)
            .expect("`Captures` is expected to have entire match at 0th position");
        self.0.advance_past(m.start(), m.end());
        Some(caps)
    }
}
