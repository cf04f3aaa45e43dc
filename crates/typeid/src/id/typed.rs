use crate::codec;
use crate::error::Result;
use crate::id::{Identifiable, Prefix, RawId};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use uuid::Uuid;

/// A type-safe TypeID: a [`Prefix`] and a [`Uuid`] tagged with the
/// entity type the id belongs to.
///
/// The tag prevents mixing ids of different entity types at compile
/// time, and typed parsing rejects well-formed ids that carry the wrong
/// prefix. The stored prefix is the one resolved when the id was
/// created — the entity's [`Identifiable::PREFIX`] default, or a custom
/// prefix registered on the [`Factory`](crate::Factory) that minted it —
/// so formatting never consults shared state.
///
/// # Example
///
/// ```
/// use typeid::{Id, identifiable};
/// use uuid::Uuid;
///
/// struct User;
/// identifiable!(User => "user");
///
/// let uuid = Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
/// let id = Id::<User>::from_uuid(uuid);
/// assert_eq!(id.to_string(), "user_01h455vb4pex5vsknk084sn02q");
///
/// let parsed: Id<User> = "user_01h455vb4pex5vsknk084sn02q".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
pub struct Id<T: Identifiable> {
    prefix: Prefix,
    uuid: Uuid,
    // fn() -> T keeps the id Send + Sync + 'static independent of T
    entity: PhantomData<fn() -> T>,
}

impl<T: Identifiable> Id<T> {
    /// Creates an id from an already-resolved prefix and a uuid.
    pub fn new(prefix: Prefix, uuid: Uuid) -> Self {
        Self {
            prefix,
            uuid,
            entity: PhantomData,
        }
    }

    /// Creates an id with the entity's default prefix.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self::new(Prefix::new_unchecked(T::PREFIX), uuid)
    }

    /// Parses an id, requiring the entity's default prefix.
    ///
    /// Custom-prefix-aware parsing goes through
    /// [`Factory::parse`](crate::Factory::parse).
    ///
    /// # Errors
    ///
    /// Any codec validation failure, or
    /// [`Error::PrefixMismatch`](crate::Error::PrefixMismatch) for a
    /// well-formed id of another entity type.
    pub fn parse(text: &str) -> Result<Self> {
        let (prefix, uuid) = codec::decode_expecting(T::PREFIX, text)?;
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

    /// Discards the compile-time tag.
    pub fn into_raw(self) -> RawId {
        RawId::new(self.prefix, self.uuid)
    }
}

impl<T: Identifiable> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.prefix.clone(), self.uuid)
    }
}

impl<T: Identifiable> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.uuid == other.uuid
    }
}

impl<T: Identifiable> Eq for Id<T> {}

impl<T: Identifiable> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
        self.uuid.hash(state);
    }
}

impl<T: Identifiable> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Identifiable> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.prefix, self.uuid).cmp(&(&other.prefix, other.uuid))
    }
}

impl<T: Identifiable> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Id")
            .field("prefix", &self.prefix)
            .field("uuid", &self.uuid)
            .finish()
    }
}

impl<T: Identifiable> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self.prefix.as_str(), &self.uuid))
    }
}

impl<T: Identifiable> core::str::FromStr for Id<T> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: Identifiable> TryFrom<&str> for Id<T> {
    type Error = crate::Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<T: Identifiable> From<Id<T>> for RawId {
    fn from(id: Id<T>) -> Self {
        id.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct User;
    crate::identifiable!(User => "user");

    struct Organization;
    crate::identifiable!(Organization => "org");

    const TEST_ID: &str = "user_01h455vb4pex5vsknk084sn02q";

    fn test_uuid() -> Uuid {
        Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap()
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let id = Id::<User>::from_uuid(test_uuid());
        assert_eq!(id.to_string(), TEST_ID);
        assert_eq!(Id::<User>::parse(TEST_ID).unwrap(), id);
        assert_eq!(TEST_ID.parse::<Id<User>>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_other_entity_types() {
        let err = Id::<Organization>::parse(TEST_ID).unwrap_err();
        assert_eq!(
            err,
            Error::PrefixMismatch {
                expected: "org".to_owned(),
                actual: "user".to_owned(),
            }
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Id::<User>::parse("user_").unwrap_err().is_suffix_error());
        assert!(Id::<User>::parse("").unwrap_err().is_suffix_error());
    }

    #[test]
    fn ids_order_by_prefix_then_uuid() {
        let a = Id::<User>::from_uuid(Uuid::from_u64_pair(0, 1));
        let b = Id::<User>::from_uuid(Uuid::from_u64_pair(0, 2));
        assert!(a < b);
        // string ordering agrees with value ordering for a fixed prefix
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn into_raw_keeps_prefix_and_uuid() {
        let raw = Id::<User>::from_uuid(test_uuid()).into_raw();
        assert_eq!(raw.prefix(), &"user");
        assert_eq!(raw.uuid(), test_uuid());
        assert_eq!(raw.to_string(), TEST_ID);
    }
}
