//! Codepoint/byte offset translation.
//!
//! The match engine reports byte offsets; the SQL surface speaks 1-based
//! codepoint positions. These helpers translate between the two by scanning
//! UTF-8 first bytes, O(distance) each. All offsets taken as arguments must
//! lie on codepoint boundaries; the text is guaranteed valid UTF-8 by its
//! type.

#[inline]
pub fn codepoint_len(b: u8) -> usize {
    match b {
        b if b < 0x80 => 1,
        b if b < 0xe0 => 2,
        b if b < 0xf0 => 3,
        _ => 4,
    }
}

// bit trick covering the ranges 0..0x80 + 0xc0..
#[allow(clippy::cast_possible_wrap)]
#[inline]
fn is_utf8_first_byte(b: u8) -> bool {
    (b as i8) >= -0x40
}

/// Byte offset one whole codepoint past `ix`. Multi-byte codepoints are
/// stepped over atomically, never split.
///
/// Precondition: `ix` is a codepoint boundary strictly inside the text.
#[inline]
pub fn next_codepoint_ix(s: impl AsRef<[u8]>, ix: usize) -> usize {
    ix + codepoint_len(s.as_ref()[ix])
}

/// Byte offset where the `n`-th codepoint (0-based) begins, or `None` if `n`
/// exceeds the codepoint count. `n` equal to the count yields the
/// past-the-end offset.
#[inline]
pub fn offset_of_codepoint(s: impl AsRef<[u8]>, n: usize) -> Option<usize> {
    let bytes = s.as_ref();
    let mut ix = 0;
    for _ in 0..n {
        ix += codepoint_len(*bytes.get(ix)?);
    }
    Some(ix)
}

/// Number of codepoints in the whole text.
#[inline]
pub fn count_codepoints(s: impl AsRef<[u8]>) -> usize {
    first_bytes_in(s.as_ref())
}

/// Number of codepoints in the byte range `from..to`. Both ends must be
/// codepoint boundaries.
#[inline]
pub fn count_codepoints_in(s: impl AsRef<[u8]>, from: usize, to: usize) -> usize {
    first_bytes_in(&s.as_ref()[from..to])
}

#[inline]
fn first_bytes_in(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| is_utf8_first_byte(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    // "café" is 4 codepoints in 5 bytes; the accent is 2 bytes.
    const CAFE: &str = "caf\u{e9}";

    #[test]
    fn codepoint_len_by_first_byte() {
        assert_eq!(codepoint_len(b'a'), 1);
        assert_eq!(codepoint_len("\u{e9}".as_bytes()[0]), 2);
        assert_eq!(codepoint_len("\u{4e2d}".as_bytes()[0]), 3);
        assert_eq!(codepoint_len("\u{1f600}".as_bytes()[0]), 4);
    }

    #[test]
    fn next_codepoint_steps_whole_codepoints() {
        assert_eq!(next_codepoint_ix(CAFE, 0), 1);
        assert_eq!(next_codepoint_ix(CAFE, 3), 5);
    }

    #[test]
    fn offset_of_codepoint_boundaries() {
        assert_eq!(offset_of_codepoint(CAFE, 0), Some(0));
        assert_eq!(offset_of_codepoint(CAFE, 3), Some(3));
        assert_eq!(offset_of_codepoint(CAFE, 4), Some(5));
        assert_eq!(offset_of_codepoint(CAFE, 5), None);
        assert_eq!(offset_of_codepoint("", 0), Some(0));
        assert_eq!(offset_of_codepoint("", 1), None);
    }

    #[test]
    fn counting() {
        assert_eq!(count_codepoints(CAFE), 4);
        assert_eq!(count_codepoints(""), 0);
        assert_eq!(count_codepoints_in(CAFE, 0, 3), 3);
        assert_eq!(count_codepoints_in(CAFE, 3, 5), 1);
        assert_eq!(count_codepoints_in(CAFE, 0, 0), 0);
    }
}
