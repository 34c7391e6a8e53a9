/*!
SQL-style regexp scalar functions over UTF-8 text.

This crate implements the regexp scalar-function family of a query engine:
matching, extraction, splitting, replacement, positional search and
occurrence counting. Positions and lengths on the public surface are 1-based
Unicode codepoint indices, as SQL strings are indexed, while the underlying
match engine (the [regex] crate) works on raw byte offsets; the translation
between the two, and a match iteration that can never stall on a zero-width
match nor report overlapping matches, are what this crate provides.

Every operation is a pure function of its inputs. A compiled [`Pattern`] is
immutable and freely shareable across threads; source text is borrowed for
the duration of a call and results either borrow from it or are newly
allocated.

# Usage

Compile a pattern once, then apply the scalar functions to it:

```rust
use regexp_scalar::{regexp_count, regexp_extract_all, regexp_replace, Pattern};

let digits = Pattern::new("[0-9]").unwrap();

assert_eq!(regexp_count("a1b2c3", &digits), 3);
assert_eq!(
    regexp_extract_all("a1b2c3", &digits, 0).unwrap(),
    vec![Some("1"), Some("2"), Some("3")],
);
assert_eq!(regexp_replace("a1b2c3", &digits, ""), "abc");
```

Positions are codepoints, not bytes:

```rust
use regexp_scalar::{regexp_position, Pattern};

// "café" is 4 codepoints in 5 bytes.
let p = Pattern::new("f.").unwrap();
assert_eq!(regexp_position("caf\u{e9}", &p, 1, 1).unwrap(), 3);
```

Successive matches never overlap, and a zero-width match advances the search
by exactly one codepoint, so empty-matching patterns terminate; no search
starts once the end of the source is reached:

```rust
use regexp_scalar::{regexp_count, Pattern};

assert_eq!(regexp_count("banana", &Pattern::new("ana").unwrap()), 1);
assert_eq!(regexp_count("ab", &Pattern::new("").unwrap()), 2);
assert_eq!(regexp_count("", &Pattern::new("").unwrap()), 0);
```

[regex]: https://crates.io/crates/regex
*/

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod bounds;
mod cursor;
mod error;
mod functions;
mod pattern;
mod utf8;

pub use crate::bounds::{replaced_length_bound, MAX_LENGTH};
pub use crate::cursor::{CaptureMatches, Captures, Match, Matches};
pub use crate::error::{Error, Result};
pub use crate::functions::{
    regexp_count, regexp_extract, regexp_extract_all, regexp_like, regexp_position,
    regexp_replace, regexp_split,
};
pub use crate::pattern::Pattern;
