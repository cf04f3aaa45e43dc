/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All the ways a TypeID string or prefix can be rejected.
///
/// Every variant is a client (input) error: the codec never panics and
/// nothing here is retryable. Messages are safe to surface to end users
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The string starts with the separator but has no prefix before it.
    #[error("id with empty prefix must not contain the separator '_'")]
    DanglingSeparator,

    /// An empty or whitespace-only prefix was given where one is required.
    #[error("prefix must not be blank")]
    BlankPrefix,

    /// The prefix segment exceeds the 63 character maximum.
    #[error("the prefix can't be {len} characters, it needs to be 63 characters or less")]
    PrefixTooLong { len: usize },

    /// The prefix starts or ends with the separator.
    #[error("prefix must not start or end with '_'")]
    PrefixBoundary,

    /// The prefix contains a character outside `a`-`z` and `_`.
    #[error("illegal character in prefix, must be one of [a-z_]")]
    InvalidPrefixChar,

    /// The suffix segment is not exactly 26 characters.
    #[error("suffix with illegal length {len}, must be 26")]
    SuffixLength { len: usize },

    /// The leftmost suffix character would overflow 128 bits.
    #[error("illegal leftmost suffix character, must be one of [01234567]")]
    SuffixLeftmost,

    /// The suffix contains a character outside the encoding alphabet.
    #[error("illegal character in suffix, must be one of [0123456789abcdefghjkmnpqrstvwxyz]")]
    InvalidSuffixChar,

    /// A typed decode saw a well-formed id with the wrong prefix.
    #[error("prefix mismatch, expected '{expected}' but got '{actual}'")]
    PrefixMismatch { expected: String, actual: String },
}

impl Error {
    /// Returns true if this error is a violation of the prefix rules.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            Error::BlankPrefix
                | Error::PrefixTooLong { .. }
                | Error::PrefixBoundary
                | Error::InvalidPrefixChar
        )
    }

    /// Returns true if this error is a violation of the suffix rules.
    pub fn is_suffix_error(&self) -> bool {
        matches!(
            self,
            Error::SuffixLength { .. } | Error::SuffixLeftmost | Error::InvalidSuffixChar
        )
    }
}
