//! Serde support for the identifier types.
//!
//! Ids serialize as exactly their encoded string form and deserialize
//! through the codec, so malformed input surfaces as a data-validation
//! error rather than a silent default. Typed ids validate against the
//! entity's default prefix; custom-prefix-aware parsing goes through
//! [`Factory::parse`](crate::Factory::parse), which owns the registry.

use crate::codec;
use crate::id::{Id, Identifiable, Prefix, RawId};
use core::fmt;
use core::marker::PhantomData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Prefix {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PrefixVisitor;

        impl serde::de::Visitor<'_> for PrefixVisitor {
            type Value = Prefix;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a TypeID prefix")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Prefix::new(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(PrefixVisitor)
    }
}

impl Serialize for RawId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&codec::encode(self.prefix().as_str(), &self.uuid()))
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawIdVisitor;

        impl serde::de::Visitor<'_> for RawIdVisitor {
            type Value = RawId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a prefixed TypeID string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                RawId::parse(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(RawIdVisitor)
    }
}

impl<T: Identifiable> Serialize for Id<T> {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&codec::encode(self.prefix().as_str(), &self.uuid()))
    }
}

impl<'de, T: Identifiable> Deserialize<'de> for Id<T> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor<T>(PhantomData<fn() -> T>);

        impl<T: Identifiable> serde::de::Visitor<'_> for IdVisitor<T> {
            type Value = Id<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a TypeID string with the entity's prefix")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Id::parse(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(IdVisitor(PhantomData))
    }
}
