use crate::codec;
use crate::error::{Error, Result};
use crate::id::Prefix;
use core::fmt;
use uuid::Uuid;

/// A type-unsafe TypeID: a validated [`Prefix`] paired with a [`Uuid`],
/// with no compile-time entity tag.
///
/// Useful at trust boundaries where the entity type is not statically
/// known, e.g. routing an id to a handler by its prefix. Unlike the
/// codec, a `RawId` always carries a prefix: parsing a bare 26-character
/// suffix is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId {
    prefix: Prefix,
    uuid: Uuid,
}

impl RawId {
    /// Creates an id from a prefix and a uuid.
    pub fn new(prefix: Prefix, uuid: Uuid) -> Self {
        Self { prefix, uuid }
    }

    /// Parses any well-formed, prefixed id.
    ///
    /// # Errors
    ///
    /// Any codec validation failure, or
    /// [`Error::BlankPrefix`] for a bare suffix.
    ///
    /// ```
    /// use typeid::RawId;
    ///
    /// let id = RawId::parse("user_01h455vb4pex5vsknk084sn02q").unwrap();
    /// assert_eq!(id.prefix().as_str(), "user");
    ///
    /// assert!(RawId::parse("01h455vb4pex5vsknk084sn02q").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let (prefix, uuid) = codec::decode(text)?;
        if prefix.is_empty() {
            return Err(Error::BlankPrefix);
        }
        Ok(Self::new(Prefix::new_unchecked(prefix), uuid))
    }

    /// The id's prefix.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// The id's uuid.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self.prefix.as_str(), &self.uuid))
    }
}

impl core::str::FromStr for RawId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RawId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_ID: &str = "user_01h455vb4pex5vsknk084sn02q";

    #[test]
    fn parse_roundtrips_display() {
        let id = RawId::parse(TEST_ID).unwrap();
        assert_eq!(id.prefix().as_str(), "user");
        assert_eq!(id.to_string(), TEST_ID);
        assert_eq!(TEST_ID.parse::<RawId>().unwrap(), id);
    }

    #[test]
    fn parse_keeps_underscored_prefixes_whole() {
        let id = RawId::parse("some_prefix_01h455vb4pex5vsknk084sn02q").unwrap();
        assert_eq!(id.prefix().as_str(), "some_prefix");
    }

    #[test]
    fn parse_requires_a_prefix() {
        // the codec accepts a bare suffix, the wrapper does not
        assert_eq!(
            RawId::parse("01h455vb4pex5vsknk084sn02q").unwrap_err(),
            Error::BlankPrefix
        );
    }

    #[test]
    fn parse_propagates_codec_errors() {
        assert_eq!(
            RawId::parse("_01h455vb4pex5vsknk084sn02q").unwrap_err(),
            Error::DanglingSeparator
        );
        assert!(RawId::parse("user_0123").unwrap_err().is_suffix_error());
    }
}
