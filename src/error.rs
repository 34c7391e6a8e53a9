use std::error;
use std::fmt;

/// Result type for the fallible operations of this crate.
pub type Result<T> = ::std::result::Result<T, Error>;

/// An error raised while validating scalar arguments or compiling a pattern.
///
/// Not-found conditions are never errors: `regexp_position` reports them as
/// `-1` and `regexp_extract` as `None`. Every error here is deterministic
/// given the same inputs and is detected before any scanning begins.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// A scalar argument was outside its valid range: a start position or
    /// occurrence ordinal below 1, or a capture group index outside the
    /// pattern's declared groups.
    InvalidArgument(String),
    /// The pattern text was rejected by the regex compiler. The compiler's
    /// error is carried unmodified.
    InvalidPattern(regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::InvalidPattern(e) => write!(f, "invalid pattern: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidPattern(e) => Some(e),
            Error::InvalidArgument(_) => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::InvalidPattern(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pattern;
    use matches::assert_matches;
    use std::error::Error as _;

    #[test]
    fn malformed_pattern_is_propagated() {
        let err = Pattern::new("(unclosed").unwrap_err();
        assert_matches!(err, Error::InvalidPattern(_));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid pattern: "));
    }

    #[test]
    fn invalid_argument_display() {
        let err = Error::InvalidArgument("group cannot be negative: -1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid argument: group cannot be negative: -1"
        );
        assert!(err.source().is_none());
    }
}
