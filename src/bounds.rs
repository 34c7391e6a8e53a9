//! Static output-length bound for replacement.
//!
//! Consumed by the host engine's type/length propagation when a plan is
//! compiled; never consulted at runtime.

/// Largest length the host type system can represent (the largest 32-bit
/// signed value). Bounds are clamped here so downstream length arithmetic
/// cannot overflow.
pub const MAX_LENGTH: u64 = i32::MAX as u64;

/// A safe upper bound on the codepoint length of replacement output, given
/// the declared maximum codepoint lengths of the source (`x`) and the
/// replacement (`y`):
///
/// ```text
/// min(MAX_LENGTH, x + max(x * y / 2, y) * (x + 1))
/// ```
///
/// The worst case is an empty-matching pattern inserting the replacement
/// between every pair of adjacent codepoints of the source and at both ends,
/// `x + 1` insertion points in total; `y` on its own dominates `x * y / 2`
/// when `x` is small. Intermediate products saturate, so the result is exact
/// up to the [`MAX_LENGTH`] clamp even for extreme declared lengths.
pub fn replaced_length_bound(x: u64, y: u64) -> u64 {
    let per_insertion = (x.saturating_mul(y) / 2).max(y);
    let bound = x.saturating_add(per_insertion.saturating_mul(x.saturating_add(1)));
    bound.min(MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_constraint_formula() {
        // x + max(x * y / 2, y) * (x + 1), small enough not to clamp
        assert_eq!(replaced_length_bound(4, 2), 4 + 4 * 5);
        assert_eq!(replaced_length_bound(6, 1), 6 + 3 * 7);
        assert_eq!(replaced_length_bound(10, 10), 10 + 50 * 11);
    }

    #[test]
    fn small_source_is_dominated_by_the_replacement_itself() {
        assert_eq!(replaced_length_bound(0, 5), 5);
        assert_eq!(replaced_length_bound(1, 5), 1 + 5 * 2);
    }

    #[test]
    fn empty_replacement_keeps_the_source_length() {
        assert_eq!(replaced_length_bound(7, 0), 7);
        assert_eq!(replaced_length_bound(0, 0), 0);
    }

    #[test]
    fn clamps_to_max_length() {
        assert_eq!(replaced_length_bound(MAX_LENGTH, MAX_LENGTH), MAX_LENGTH);
        assert_eq!(replaced_length_bound(u64::MAX, u64::MAX), MAX_LENGTH);
        assert_eq!(replaced_length_bound(1 << 20, 1 << 20), MAX_LENGTH);
    }
}
