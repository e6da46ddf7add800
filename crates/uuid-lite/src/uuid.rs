//! The identifier value type and its random generation.

use std::{fmt, str::FromStr};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::text;
use crate::UuidError;

/// A 128-bit universally unique identifier held as 16 raw bytes.
///
/// `Uuid` is a plain value: trivially copyable, immutable once constructed,
/// and safe to share read-only across threads. Equality and hashing cover all
/// 16 bytes in order, so two identifiers are equal exactly when their raw
/// bytes match.
///
/// # Construction
/// - [`Uuid::new`] generates a fresh random version-4 identifier.
/// - [`Uuid::from_raw_bytes`] wraps exactly 16 bytes.
/// - [`Uuid::from_bytes`] accepts any byte sequence, padding or truncating.
/// - [`Uuid::parse_uuid_string`] reads the canonical hyphenated form.
///
/// # Display format
/// When displayed or converted to string, `Uuid` always produces the
/// canonical 36-character uppercase hyphenated form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero (empty) identifier.
    ///
    /// A valid value in its own right; parsing
    /// `00000000-0000-0000-0000-000000000000` produces it.
    pub const NIL: Uuid = Uuid([0; 16]);

    /// Generates a new random version-4 identifier.
    ///
    /// Randomness comes from the operating system's cryptographically secure
    /// source. Use [`Uuid::new_with_rng`] to supply a different source.
    pub fn new() -> Self {
        Self::new_with_rng(&mut OsRng)
    }

    /// Generates a new version-4 identifier from the supplied source.
    ///
    /// Draws two independent `u64` values and lays their bytes out
    /// little-endian across the 16 positions (first draw into bytes 0-7,
    /// second into bytes 8-15), then stamps the RFC 4122 markers: the top
    /// nibble of byte 6 becomes `4` (version) and the top two bits of byte 8
    /// become `10` (variant).
    ///
    /// The source is borrowed exclusively for the duration of the call.
    /// Callers sharing one source across threads are responsible for
    /// serializing access to it.
    pub fn new_with_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&rng.next_u64().to_le_bytes());
        bytes[8..].copy_from_slice(&rng.next_u64().to_le_bytes());
        // version 4, RFC 4122 variant
        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        Uuid(bytes)
    }

    /// Wraps exactly 16 bytes. Never fails.
    pub const fn from_raw_bytes(bytes: [u8; 16]) -> Self {
        Uuid(bytes)
    }

    /// Builds an identifier from any byte sequence.
    ///
    /// Fewer than 16 bytes are right-padded with zeros; anything beyond the
    /// first 16 is ignored. This is a deliberately permissive constructor —
    /// use [`Uuid::from_raw_bytes`] when the input is known to be exactly 16
    /// bytes.
    pub fn from_bytes<I>(bytes: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut raw = [0u8; 16];
        for (slot, byte) in raw.iter_mut().zip(bytes) {
            *slot = byte;
        }
        Uuid(raw)
    }

    /// Returns the underlying 16 bytes, in construction order.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Renders the canonical uppercase 36-character form.
    pub fn to_uuid_string(&self) -> String {
        text::format(&self.0)
    }

    /// Parses the canonical `8-4-4-4-12` hyphenated form.
    ///
    /// Hex digits are accepted in either case. Returns `None` unless the
    /// input is exactly 36 bytes with hyphens at positions 8, 13, 18 and 23
    /// and hex digits everywhere else.
    pub fn parse_uuid_string(input: &str) -> Option<Self> {
        text::parse(input).map(Uuid)
    }
}

impl Default for Uuid {
    /// Generates a fresh random identifier, equivalent to [`Uuid::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_raw_bytes(bytes)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self.to_uuid_string())
    }
}

impl fmt::Display for Uuid {
    /// Formats in canonical form (uppercase, hyphenated).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uuid_string())
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Parses a string, requiring the canonical hyphenated form.
    ///
    /// This is [`Uuid::parse_uuid_string`] with the absent value surfaced as
    /// [`UuidError::InvalidUuidString`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_uuid_string(s).ok_or_else(|| {
            UuidError::InvalidUuidString(format!(
                "expected 36 hyphenated hex characters, got: '{}'",
                s
            ))
        })
    }
}
