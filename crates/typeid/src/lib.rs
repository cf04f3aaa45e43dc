//! Type-safe TypeID identifiers.
//!
//! A TypeID is a compact, URL-safe, lexicographically sortable string
//! identifier combining a human-readable type prefix with a base32
//! encoded UUID:
//!
//! ```text
//!   user_01h455vb4pex5vsknk084sn02q
//!   └──┘ └────────────────────────┘
//!   prefix   suffix (26 characters encoding the 128 uuid bits)
//! ```
//!
//! The core is the codec — [`encode`], [`decode`], [`decode_expecting`]
//! and [`validate_prefix`] — a set of pure functions with strict,
//! message-carrying validation. Layered on top are the typed wrappers
//! ([`Id`], [`RawId`], [`Prefix`]), the compile-time prefix association
//! ([`Identifiable`] via [`identifiable!`]), and a caller-owned
//! [`Factory`] that mints and parses ids with a pluggable UUID source,
//! custom per-type prefixes and a bounded prefix cache.
//!
//! # Examples
//!
//! ```
//! use typeid::{Factory, Id, identifiable};
//!
//! struct User;
//! identifiable!(User => "user");
//!
//! let factory = Factory::new();
//! let id: Id<User> = factory.random_id();
//!
//! let parsed: Id<User> = factory.parse(&id.to_string()).unwrap();
//! assert_eq!(parsed, id);
//! ```
//!
//! Parsing is strict; malformed ids and ids of the wrong entity type
//! are rejected with a user-facing-safe message:
//!
//! ```
//! use typeid::{Id, identifiable};
//!
//! struct User;
//! struct Order;
//! identifiable!(User => "user");
//! identifiable!(Order => "order");
//!
//! let err = Id::<Order>::parse("user_01h455vb4pex5vsknk084sn02q").unwrap_err();
//! assert_eq!(err.to_string(), "prefix mismatch, expected 'order' but got 'user'");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Prefix`], [`Id`] and
//!   [`RawId`] as their encoded string form.
//! - `tracing`: trace-level instrumentation of typed parsing and the
//!   prefix cache.

mod codec;
mod error;
mod factory;
mod id;
mod macros;
#[cfg(feature = "serde")]
mod serde;

pub use crate::codec::*;
pub use crate::error::*;
pub use crate::factory::*;
pub use crate::id::*;
