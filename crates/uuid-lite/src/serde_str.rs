//! Serde integration: a `Uuid` is exactly one canonical string value.
//!
//! The default impls write the uppercase canonical form and accept either hex
//! case when reading. The casing applied on output is selected per field with
//! the [`uppercase`] and [`lowercase`] strategy modules:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use uuid_lite::Uuid;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     id: Uuid, // uppercase, the default
//!     #[serde(with = "uuid_lite::serde_str::lowercase")]
//!     legacy_id: Uuid,
//! }
//! ```
//!
//! Anything beyond the two canonical casings is a caller-supplied transform:
//! point serde's own `serialize_with` / `deserialize_with` attributes at your
//! own functions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Uuid, UuidError};

impl Serialize for Uuid {
    /// Serializes as the canonical uppercase 36-character string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_uuid_string())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    /// Deserializes from a canonical string, accepting either hex case.
    ///
    /// A string that does not satisfy the canonical grammar produces a
    /// deserializer error carrying the offending input; format layers such as
    /// `serde_json` attach the failing location to it.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uuid::parse_uuid_string(&s).ok_or_else(|| {
            serde::de::Error::custom(UuidError::InvalidUuidString(format!(
                "expected 36 hyphenated hex characters, got: '{}'",
                s
            )))
        })
    }
}

/// Canonical uppercase strategy, for use with `#[serde(with = "...")]`.
///
/// Identical to the default `Serialize`/`Deserialize` behaviour; it exists so
/// a field can name its casing explicitly.
pub mod uppercase {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Uuid;

    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        uuid.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer)
    }
}

/// Lowercase strategy: the canonical form, lowercased on output.
///
/// Lowercasing is a post-pass over the canonical uppercase rendering; reading
/// is unchanged, since parsing accepts either case.
pub mod lowercase {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::Uuid;

    pub fn serialize<S>(uuid: &Uuid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = uuid.to_uuid_string();
        s.make_ascii_lowercase();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        Uuid::deserialize(deserializer)
    }
}
