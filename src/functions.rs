use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::utf8::{count_codepoints, count_codepoints_in, offset_of_codepoint};

/// Returns true if and only if `pattern` matches anywhere in `source`.
#[inline]
pub fn regexp_like(source: &str, pattern: &Pattern) -> bool {
    pattern.is_match(source)
}

/// Replaces every non-overlapping match in `source` with `replacement`.
///
/// The replacement is inserted verbatim; no `$group` expansion is performed.
/// Non-matched spans are copied through unchanged, and when nothing matches
/// the source is returned borrowed. Pass `""` to delete matches.
///
/// # Example
///
/// ```rust
/// use regexp_scalar::{regexp_replace, Pattern};
///
/// let p = Pattern::new("[0-9]").unwrap();
/// assert_eq!(regexp_replace("a1b2c3", &p, ""), "abc");
/// assert_eq!(regexp_replace("a1b2c3", &p, "#"), "a#b#c#");
/// ```
pub fn regexp_replace<'t>(source: &'t str, pattern: &Pattern, replacement: &str) -> Cow<'t, str> {
    let mut it = pattern.find_iter(source).peekable();
    if it.peek().is_none() {
        return Cow::Borrowed(source);
    }
    let mut new = String::with_capacity(source.len());
    let mut last_match = 0;
    for m in it {
        new.push_str(&source[last_match..m.start()]);
        new.push_str(replacement);
        last_match = m.end();
    }
    new.push_str(&source[last_match..]);
    Cow::Owned(new)
}

/// Returns the requested group of the first match, or `None` when there is
/// no match or the group did not participate in it. The first match is the
/// first element of the sequence [`regexp_extract_all`] iterates, so the two
/// functions always agree.
///
/// Group 0 is the whole match; groups 1 to [`Pattern::group_count`] are the
/// capture groups. A group that participated but matched the empty string is
/// `Some("")`, which is distinct from `None`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `group` is negative or exceeds
/// the pattern's declared group count.
pub fn regexp_extract<'t>(
    source: &'t str,
    pattern: &Pattern,
    group: i64,
) -> Result<Option<&'t str>> {
    let group = validate_group(pattern, group)?;
    Ok(pattern
        .captures_iter(source)
        .next()
        .and_then(|caps| caps.get(group).map(|m| m.as_str())))
}

/// Returns the requested group of every non-overlapping match, in match
/// order. Entries are `None` where the group did not participate in that
/// particular match.
///
/// # Example
///
/// ```rust
/// use regexp_scalar::{regexp_extract_all, Pattern};
///
/// let p = Pattern::new("[0-9]").unwrap();
/// let groups = regexp_extract_all("a1b2c3", &p, 0).unwrap();
/// assert_eq!(groups, vec![Some("1"), Some("2"), Some("3")]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `group` is negative or exceeds
/// the pattern's declared group count.
pub fn regexp_extract_all<'t>(
    source: &'t str,
    pattern: &Pattern,
    group: i64,
) -> Result<Vec<Option<&'t str>>> {
    let group = validate_group(pattern, group)?;
    Ok(pattern
        .captures_iter(source)
        .map(|caps| caps.get(group).map(|m| m.as_str()))
        .collect())
}

/// Cuts `source` at every non-overlapping match; the matches themselves are
/// discarded. A match adjacent to either end of the source or to another
/// match contributes an empty segment, so concatenating the segments with
/// the matched spans reinserted in order reconstructs the source exactly.
///
/// # Example
///
/// ```rust
/// use regexp_scalar::{regexp_split, Pattern};
///
/// let p = Pattern::new(",").unwrap();
/// assert_eq!(regexp_split("a,b,,c,", &p), vec!["a", "b", "", "c", ""]);
/// ```
pub fn regexp_split<'t>(source: &'t str, pattern: &Pattern) -> Vec<&'t str> {
    let mut segments = Vec::new();
    let mut last_match = 0;
    for m in pattern.find_iter(source) {
        segments.push(&source[last_match..m.start()]);
        last_match = m.end();
    }
    segments.push(&source[last_match..]);
    segments
}

/// Returns the 1-based codepoint position of the `occurrence`-th match
/// beginning at or after the 1-based codepoint position `start`, or `-1`
/// when fewer than `occurrence` matches exist from that point.
///
/// A `start` past the end of `source` yields `-1`, not an error. The prefix
/// before `start` is sliced off before scanning, so anchors in the pattern
/// see the sliced text; match offsets inside the tail are shifted back by
/// the byte length of the skipped prefix before translation to codepoints.
///
/// # Example
///
/// ```rust
/// use regexp_scalar::{regexp_position, Pattern};
///
/// let p = Pattern::new("[0-9]").unwrap();
/// assert_eq!(regexp_position("a1b2c3", &p, 1, 2).unwrap(), 4);
/// assert_eq!(regexp_position("a1b2c3", &p, 1, 4).unwrap(), -1);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `start < 1` or `occurrence < 1`.
pub fn regexp_position(
    source: &str,
    pattern: &Pattern,
    start: i64,
    occurrence: i64,
) -> Result<i64> {
    if start < 1 {
        return Err(Error::InvalidArgument(format!(
            "start position cannot be smaller than 1: {}",
            start
        )));
    }
    if occurrence < 1 {
        return Err(Error::InvalidArgument(format!(
            "occurrence cannot be smaller than 1: {}",
            occurrence
        )));
    }

    // A start past the number of codepoints in the source is not found.
    if start as u64 > count_codepoints(source) as u64 {
        return Ok(-1);
    }
    // The guard leaves `start - 1` at most the codepoint count, so the
    // translation always succeeds; the past-the-end offset would leave an
    // empty tail with no matches in it.
    let prefix_len = offset_of_codepoint(source, (start - 1) as usize).unwrap_or(source.len());

    let tail = &source[prefix_len..];
    let mut remaining = occurrence;
    for m in pattern.find_iter(tail) {
        remaining -= 1;
        if remaining == 0 {
            // Positions are reported starting from 1.
            let position = count_codepoints_in(source, 0, prefix_len + m.start()) + 1;
            return Ok(position as i64);
        }
    }
    Ok(-1)
}

/// Returns the number of non-overlapping matches in `source`, counted with
/// the same zero-width resume rule as the other operations. The count is
/// always obtained by iterating the match sequence, never derived from a
/// closed form.
#[inline]
pub fn regexp_count(source: &str, pattern: &Pattern) -> i64 {
    pattern.find_iter(source).count() as i64
}

fn validate_group(pattern: &Pattern, group: i64) -> Result<usize> {
    if group < 0 {
        return Err(Error::InvalidArgument(format!(
            "group cannot be negative: {}",
            group
        )));
    }
    let group = group as usize;
    if group > pattern.group_count() {
        return Err(Error::InvalidArgument(format!(
            "pattern has {} groups; cannot access group {}",
            pattern.group_count(),
            group
        )));
    }
    Ok(group)
}
