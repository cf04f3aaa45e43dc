use crate::codec;
use crate::error::{Error, Result};
use core::fmt;
use std::sync::Arc;

/// A validated TypeID prefix.
///
/// A `Prefix` value always satisfies the prefix rules (1-63 characters
/// of `[a-z_]`, no boundary underscore, non-blank); constructing one
/// validates eagerly so identifier types never have to. The backing
/// storage is shared, making clones cheap — the prefix cache hands out
/// clones on every mint and parse.
///
/// Note that while the codec accepts ids with an *empty* prefix, a
/// standalone `Prefix` must be non-blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(Arc<str>);

impl Prefix {
    /// Creates a validated prefix.
    ///
    /// # Errors
    ///
    /// Returns the first violated prefix rule, blank input first.
    ///
    /// ```
    /// use typeid::Prefix;
    ///
    /// assert!(Prefix::new("user").is_ok());
    /// assert!(Prefix::new("some_prefix").is_ok());
    /// assert!(Prefix::new("_user").is_err());
    /// assert!(Prefix::new("").is_err());
    /// ```
    pub fn new(prefix: &str) -> Result<Self> {
        codec::validate_prefix(prefix)?;
        Ok(Self(Arc::from(prefix)))
    }

    /// Wraps a prefix that is already known to satisfy the rules, e.g.
    /// one sliced out of a string the codec just validated.
    pub(crate) fn new_unchecked(prefix: &str) -> Self {
        debug_assert!(
            codec::is_valid_prefix(prefix),
            "prefix {prefix:?} violates the prefix rules"
        );
        Self(Arc::from(prefix))
    }

    /// The prefix as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Prefix {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Prefix {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl core::str::FromStr for Prefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Prefix {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
