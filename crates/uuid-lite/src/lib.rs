//! A self-contained 128-bit UUID value type.
//!
//! `uuid-lite` implements the identifier end-to-end rather than wrapping an
//! existing implementation: the 16-byte storage, the canonical textual form,
//! and random version-4 generation are all defined here.
//!
//! ## Canonical form
//! - Length: 36
//! - Layout: `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`, hyphens at byte
//!   positions 8, 13, 18 and 23
//! - Output is uppercase hexadecimal; parsing accepts either case
//! - Example: `550E8400-E29B-41D4-A716-446655440000`
//!
//! Notes:
//! - [`Uuid::new`] generates a random RFC 4122 version-4 identifier from the
//!   operating system's randomness source. [`Uuid::new_with_rng`] accepts any
//!   [`rand::RngCore`], so tests can substitute a deterministic source.
//! - [`Uuid::parse_uuid_string`] validates an externally supplied identifier
//!   string; [`Uuid`] also implements [`std::str::FromStr`] for callers that
//!   want an error value instead of an absent one.
//! - With the `serde` feature (on by default) a `Uuid` serializes as exactly
//!   one canonical string value; see [`serde_str`] for the lowercase
//!   strategy.

mod text;
mod uuid;

#[cfg(feature = "serde")]
pub mod serde_str;

pub use uuid::Uuid;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid UUID string provided
    #[error("Invalid UUID string: {0}")]
    InvalidUuidString(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
