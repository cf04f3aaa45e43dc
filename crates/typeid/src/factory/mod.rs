//! Creating and parsing ids through an explicit, caller-owned
//! configuration object.

mod cache;

use crate::codec;
use crate::error::Result;
use crate::id::{Id, Identifiable, Prefix, RawId};
use cache::PrefixCache;
use core::any::TypeId;
use std::collections::HashMap;
#[cfg(feature = "tracing")]
use tracing::instrument;
use uuid::Uuid;

/// A source of fresh UUIDs for minting random ids.
///
/// [`UuidV7`] is the default; implement the trait to substitute a
/// different version or a deterministic source in tests:
///
/// ```
/// use typeid::{Factory, UuidSource};
/// use uuid::Uuid;
///
/// struct Fixed(Uuid);
///
/// impl UuidSource for Fixed {
///     fn next_uuid(&self) -> Uuid {
///         self.0
///     }
/// }
///
/// let fixed = Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
/// let factory = Factory::new().with_uuid_source(Fixed(fixed));
/// assert_eq!(factory.random_raw("user").unwrap().uuid(), fixed);
/// ```
pub trait UuidSource {
    /// Returns the next UUID.
    fn next_uuid(&self) -> Uuid;
}

/// The default [`UuidSource`]: version 7 UUIDs from the system clock.
///
/// UUIDv7 embeds a millisecond timestamp in its high bits, so encoded
/// ids sort by creation time.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidV7;

impl UuidSource for UuidV7 {
    fn next_uuid(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Creates and parses [`Id`]s and [`RawId`]s.
///
/// A factory owns its configuration — the UUID source behind
/// [`random_id`](Factory::random_id) and the table of custom prefixes
/// that override entity defaults — instead of hiding it in process-wide
/// state. Construct one at startup and share it by reference;
/// [`Factory::new`] is the default-configured convenience. Resolved
/// prefixes are cached per entity type, so a long-lived factory is
/// cheaper than ad-hoc construction.
///
/// ```
/// use typeid::{Factory, identifiable};
///
/// struct User;
/// struct Organization;
/// identifiable!(User => "user");
/// identifiable!(Organization => "organization");
///
/// let factory = Factory::new()
///     .with_custom_prefix::<Organization>("org")
///     .unwrap();
///
/// let user_id = factory.random_id::<User>();
/// assert!(user_id.to_string().starts_with("user_"));
///
/// // the custom prefix applies to minting and parsing alike
/// let org_id = factory.random_id::<Organization>();
/// assert!(org_id.to_string().starts_with("org_"));
/// let parsed = factory.parse::<Organization>(&org_id.to_string()).unwrap();
/// assert_eq!(parsed, org_id);
/// ```
#[derive(Debug)]
pub struct Factory<S = UuidV7> {
    uuids: S,
    custom: HashMap<TypeId, Prefix>,
    cache: PrefixCache,
}

impl Factory {
    /// Creates a factory with the default UUIDv7 source and no custom
    /// prefixes.
    pub fn new() -> Self {
        Self {
            uuids: UuidV7,
            custom: HashMap::new(),
            cache: PrefixCache::new(),
        }
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Factory<S> {
    /// Replaces the UUID source used for random ids.
    pub fn with_uuid_source<S2: UuidSource>(self, uuids: S2) -> Factory<S2> {
        Factory {
            uuids,
            custom: self.custom,
            cache: self.cache,
        }
    }

    /// Registers a custom prefix for an entity type, overriding
    /// `T::PREFIX` for every id this factory mints or parses.
    ///
    /// # Errors
    ///
    /// Fails eagerly when the prefix violates the prefix rules, so a
    /// bad registration surfaces at construction rather than at first
    /// use.
    pub fn with_custom_prefix<T: Identifiable>(mut self, prefix: &str) -> Result<Self> {
        let key = TypeId::of::<T>();
        self.custom.insert(key, Prefix::new(prefix)?);
        self.cache.remove(&key);
        Ok(self)
    }

    /// Wraps an existing uuid in a typed id.
    pub fn id_of<T: Identifiable>(&self, uuid: Uuid) -> Id<T> {
        Id::new(self.resolve_prefix::<T>(), uuid)
    }

    /// Wraps an existing uuid in an untyped id under `prefix`.
    ///
    /// # Errors
    ///
    /// Fails when the prefix violates the prefix rules.
    pub fn raw(&self, prefix: &str, uuid: Uuid) -> Result<RawId> {
        Ok(RawId::new(Prefix::new(prefix)?, uuid))
    }

    /// Parses a typed id, honoring custom prefixes.
    ///
    /// # Errors
    ///
    /// Any codec validation failure, or
    /// [`Error::PrefixMismatch`](crate::Error::PrefixMismatch) when the
    /// id is well-formed but carries a different prefix than the one
    /// resolved for `T`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn parse<T: Identifiable>(&self, text: &str) -> Result<Id<T>> {
        let prefix = self.resolve_prefix::<T>();
        let (_, uuid) = codec::decode_expecting(prefix.as_str(), text)?;
        Ok(Id::new(prefix, uuid))
    }

    /// Parses an untyped id.
    ///
    /// # Errors
    ///
    /// Any codec validation failure; a bare suffix is rejected because
    /// a [`RawId`] always carries a prefix.
    pub fn parse_raw(&self, text: &str) -> Result<RawId> {
        RawId::parse(text)
    }

    /// Returns true if `text` parses as an id of the entity type.
    pub fn is_id<T: Identifiable>(&self, text: &str) -> bool {
        self.parse::<T>(text).is_ok()
    }

    /// Resolution order: cache, custom table, entity default.
    fn resolve_prefix<T: Identifiable>(&self) -> Prefix {
        let key = TypeId::of::<T>();
        if let Some(prefix) = self.cache.get(&key) {
            return prefix;
        }
        let prefix = match self.custom.get(&key) {
            Some(custom) => custom.clone(),
            None => Prefix::new_unchecked(T::PREFIX),
        };
        self.cache.insert(key, prefix.clone());
        prefix
    }
}

impl<S: UuidSource> Factory<S> {
    /// Mints a fresh typed id from the factory's UUID source.
    pub fn random_id<T: Identifiable>(&self) -> Id<T> {
        self.id_of(self.uuids.next_uuid())
    }

    /// Mints a fresh untyped id under `prefix`.
    ///
    /// # Errors
    ///
    /// Fails when the prefix violates the prefix rules.
    pub fn random_raw(&self, prefix: &str) -> Result<RawId> {
        self.raw(prefix, self.uuids.next_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::Arc;

    struct User;
    crate::identifiable!(User => "user");

    struct Organization;
    crate::identifiable!(Organization => "organization");

    const TEST_UUID: &str = "01890a5d-ac96-774b-bcce-b302099a8057";
    const TEST_ID: &str = "user_01h455vb4pex5vsknk084sn02q";

    fn test_uuid() -> Uuid {
        Uuid::parse_str(TEST_UUID).unwrap()
    }

    struct FixedUuid;

    impl UuidSource for FixedUuid {
        fn next_uuid(&self) -> Uuid {
            test_uuid()
        }
    }

    fn fixed_factory() -> Factory<FixedUuid> {
        Factory::new().with_uuid_source(FixedUuid)
    }

    #[test]
    fn random_id_uses_the_default_prefix() {
        let id = fixed_factory().random_id::<User>();
        assert_eq!(id.to_string(), TEST_ID);
    }

    #[test]
    fn custom_prefix_applies_to_minting_and_parsing() {
        let factory = fixed_factory()
            .with_custom_prefix::<Organization>("org")
            .unwrap();

        let id = factory.random_id::<Organization>();
        assert!(id.to_string().starts_with("org_"));

        let parsed = factory.parse::<Organization>(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        // the default prefix no longer parses for this entity type
        let default_tagged = "organization_01h455vb4pex5vsknk084sn02q";
        assert_eq!(
            factory.parse::<Organization>(default_tagged).unwrap_err(),
            Error::PrefixMismatch {
                expected: "org".to_owned(),
                actual: "organization".to_owned(),
            }
        );
    }

    #[test]
    fn custom_prefix_registration_validates_eagerly() {
        let err = Factory::new()
            .with_custom_prefix::<Organization>("Org")
            .unwrap_err();
        assert_eq!(err, Error::InvalidPrefixChar);
    }

    #[test]
    fn parse_rejects_ids_of_other_entity_types() {
        let factory = Factory::new();
        assert_eq!(
            factory.parse::<Organization>(TEST_ID).unwrap_err(),
            Error::PrefixMismatch {
                expected: "organization".to_owned(),
                actual: "user".to_owned(),
            }
        );
    }

    #[test]
    fn parse_raw_accepts_any_prefixed_id() {
        let factory = Factory::new();
        let raw = factory.parse_raw(TEST_ID).unwrap();
        assert_eq!(raw.prefix().as_str(), "user");
        assert_eq!(raw.uuid(), test_uuid());
    }

    #[test]
    fn is_id_reports_validity() {
        let factory = Factory::new();
        assert!(factory.is_id::<User>(TEST_ID));
        assert!(!factory.is_id::<Organization>(TEST_ID));
        assert!(!factory.is_id::<User>("user_not_an_id"));
    }

    #[test]
    fn id_of_and_raw_wrap_existing_uuids() {
        let factory = Factory::new();
        let id = factory.id_of::<User>(test_uuid());
        assert_eq!(id.to_string(), TEST_ID);

        let raw = factory.raw("user", test_uuid()).unwrap();
        assert_eq!(raw.to_string(), TEST_ID);
        assert_eq!(factory.raw("User", test_uuid()).unwrap_err(), Error::InvalidPrefixChar);
    }

    #[test]
    fn random_raw_validates_the_prefix() {
        let factory = Factory::new();
        assert!(factory.random_raw("user").is_ok());
        assert_eq!(
            factory.random_raw("_user").unwrap_err(),
            Error::PrefixBoundary
        );
    }

    #[test]
    fn resolved_prefixes_are_shared_across_calls() {
        let factory = fixed_factory();
        let a = factory.random_id::<User>();
        let b = factory.random_id::<User>();
        // both ids hold the same cached prefix storage
        assert!(core::ptr::eq(a.prefix().as_str(), b.prefix().as_str()));
    }

    #[test]
    fn a_shared_factory_is_usable_from_many_threads() {
        let factory = Arc::new(Factory::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let factory = Arc::clone(&factory);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let id = factory.random_id::<User>();
                        assert!(factory.is_id::<User>(&id.to_string()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
