//! The TypeID codec: conversion between `(prefix, uuid)` pairs and their
//! canonical string form, plus the validation rules that reject malformed
//! strings.
//!
//! The string grammar is `typeid := (prefix "_")? suffix` where `prefix`
//! is 1-63 characters of `[a-z_]` with no leading or trailing `_`, and
//! `suffix` is exactly 26 characters over a 32-symbol alphabet encoding
//! the 128 bits of a UUID. The separator between prefix and suffix is the
//! *last* underscore in the string, so prefixes may contain underscores
//! themselves.
//!
//! Everything in this module is a pure, stateless function: no shared
//! state, no I/O, no panics for any input.

mod base32;

pub use base32::SUFFIX_LEN;

use crate::error::{Error, Result};
use uuid::Uuid;

/// The character joining prefix and suffix.
pub const SEPARATOR: char = '_';

/// Maximum number of characters in a prefix.
pub const MAX_PREFIX_LEN: usize = 63;

/// Encodes a prefix and a UUID into a TypeID string.
///
/// The prefix is not validated here; callers that accept untrusted
/// prefixes validate through [`validate_prefix`] (or construct a
/// [`Prefix`](crate::Prefix), which does so eagerly). An empty prefix
/// produces a bare 26-character suffix with no separator.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
///
/// let uuid = Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap();
/// assert_eq!(typeid::encode("user", &uuid), "user_01h455vb4pex5vsknk084sn02q");
/// assert_eq!(typeid::encode("", &Uuid::nil()), "00000000000000000000000000");
/// ```
pub fn encode(prefix: &str, uuid: &Uuid) -> String {
    let (msb, lsb) = uuid.as_u64_pair();
    let mut suffix = [0_u8; SUFFIX_LEN];
    base32::encode_suffix(msb, lsb, &mut suffix);

    let mut out = String::with_capacity(if prefix.is_empty() {
        SUFFIX_LEN
    } else {
        prefix.len() + 1 + SUFFIX_LEN
    });
    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push(SEPARATOR);
    }
    // SAFETY: the suffix bytes all come from the ASCII alphabet table
    out.push_str(unsafe { core::str::from_utf8_unchecked(&suffix) });
    out
}

/// Decodes a TypeID string into its prefix and UUID.
///
/// The prefix is returned as a borrow of the input; the empty prefix is
/// legal and decodes from a bare suffix. See the module docs for the
/// accepted grammar.
///
/// # Errors
///
/// Returns the first applicable violation: the dangling-separator check,
/// then the prefix rules (length, boundary, character set), then the
/// suffix rules (length, leftmost symbol, alphabet membership).
///
/// # Example
///
/// ```
/// use uuid::Uuid;
///
/// let (prefix, uuid) = typeid::decode("user_01h455vb4pex5vsknk084sn02q").unwrap();
/// assert_eq!(prefix, "user");
/// assert_eq!(uuid, Uuid::parse_str("01890a5d-ac96-774b-bcce-b302099a8057").unwrap());
///
/// assert!(typeid::decode("_01h455vb4pex5vsknk084sn02q").is_err());
/// ```
pub fn decode(text: &str) -> Result<(&str, Uuid)> {
    // the *last* underscore delimits prefix from suffix
    let (prefix, suffix) = match text.rfind(SEPARATOR) {
        Some(0) => return Err(Error::DanglingSeparator),
        Some(at) => {
            let prefix = &text[..at];
            validate_prefix_segment(prefix.as_bytes())?;
            (prefix, &text.as_bytes()[at + 1..])
        }
        None => ("", text.as_bytes()),
    };

    let (msb, lsb) = base32::decode_suffix(suffix)?;
    Ok((prefix, Uuid::from_u64_pair(msb, lsb)))
}

/// Decodes a TypeID string, additionally requiring the decoded prefix to
/// equal `expected`.
///
/// This is the typed variant of [`decode`]: it supports type-checked
/// identifiers without duplicating the core algorithm.
///
/// # Errors
///
/// As [`decode`], plus [`Error::PrefixMismatch`] naming both prefixes
/// when the id is well-formed but tagged differently.
pub fn decode_expecting<'a>(expected: &str, text: &'a str) -> Result<(&'a str, Uuid)> {
    let (prefix, uuid) = decode(text)?;
    if prefix != expected {
        return Err(Error::PrefixMismatch {
            expected: expected.to_owned(),
            actual: prefix.to_owned(),
        });
    }
    Ok((prefix, uuid))
}

/// Validates a standalone prefix, rejecting blank input.
///
/// This is the eager check identifier constructors use to fail fast at
/// construction time rather than at first encode. Note the asymmetry
/// with [`decode`]: a decoded id may carry the empty prefix, but a
/// standalone prefix must be non-blank.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(Error::BlankPrefix);
    }
    validate_prefix_segment(prefix.as_bytes())
}

/// Returns true if `prefix` is a legal non-empty prefix.
///
/// `const` so that prefixes declared through
/// [`identifiable!`](crate::identifiable) are checked at compile time.
pub const fn is_valid_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_PREFIX_LEN {
        return false;
    }
    if bytes[0] == b'_' || bytes[bytes.len() - 1] == b'_' {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !(bytes[i].is_ascii_lowercase() || bytes[i] == b'_') {
            return false;
        }
        i += 1;
    }
    true
}

/// Checks the prefix rules over a non-empty segment, in specification
/// order: length, boundary underscores, character set.
fn validate_prefix_segment(prefix: &[u8]) -> Result<()> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(Error::PrefixTooLong { len: prefix.len() });
    }
    if prefix[0] == b'_' || prefix[prefix.len() - 1] == b'_' {
        return Err(Error::PrefixBoundary);
    }
    for &b in prefix {
        if !(b.is_ascii_lowercase() || b == b'_') {
            return Err(Error::InvalidPrefixChar);
        }
    }
    Ok(())
}
