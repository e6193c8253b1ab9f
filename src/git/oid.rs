//! git::oid
//!
//! Object identifiers.
//!
//! An [`Oid`] is a fixed 20-byte SHA-1 buffer plus the number of hex digits
//! that are significant. A full identifier has all 40 digits significant; a
//! shorter one is a prefix usable for lookups as long as it is unambiguous.
//!
//! # Example
//!
//! ```
//! use gitveneer::git::Oid;
//!
//! let full = Oid::from_hex("abc123def4567890abc123def4567890abc12345").unwrap();
//! assert!(!full.is_prefix());
//! assert_eq!(full.short(7), "abc123d");
//!
//! let prefix = Oid::from_hex("abc12").unwrap();
//! assert!(prefix.is_prefix());
//! assert_eq!(prefix.to_string(), "abc12");
//! assert!(prefix.is_prefix_of(&full));
//!
//! assert!(Oid::from_hex("not-a-sha").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GitError, Result};

/// Size of a binary identifier in bytes.
pub const RAW_LEN: usize = 20;

/// Number of hex digits in a full identifier.
pub const HEX_LEN: usize = RAW_LEN * 2;

/// Shortest prefix libgit2 accepts for lookups.
pub const MIN_PREFIX_LEN: usize = 4;

/// A full or abbreviated object identifier.
///
/// Equality and ordering compare the byte buffer first and the number of
/// significant digits second, so `abc1` and `abc10` are different values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid {
    raw: [u8; RAW_LEN],
    hex_len: usize,
}

impl Oid {
    /// Parse a full identifier or a prefix of at least [`MIN_PREFIX_LEN`]
    /// hex digits. Odd lengths are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidOid`] for empty, too short, too long or
    /// non-hex input.
    pub fn from_hex(text: &str) -> Result<Self> {
        let invalid = || GitError::InvalidOid {
            oid: text.to_string(),
        };

        if text.len() < MIN_PREFIX_LEN || text.len() > HEX_LEN {
            return Err(invalid());
        }
        if !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut padded = text.to_ascii_lowercase();
        while padded.len() < HEX_LEN {
            padded.push('0');
        }

        let mut raw = [0u8; RAW_LEN];
        hex::decode_to_slice(&padded, &mut raw).map_err(|_| invalid())?;

        Ok(Self {
            raw,
            hex_len: text.len(),
        })
    }

    /// Build a full identifier from its binary form.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidOid`] unless `bytes` is exactly
    /// [`RAW_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; RAW_LEN] = bytes.try_into().map_err(|_| GitError::InvalidOid {
            oid: hex::encode(bytes),
        })?;
        Ok(Self {
            raw,
            hex_len: HEX_LEN,
        })
    }

    /// The all-zero identifier.
    pub fn zero() -> Self {
        Self {
            raw: [0u8; RAW_LEN],
            hex_len: HEX_LEN,
        }
    }

    /// The constant-length binary buffer. Digits past [`Oid::hex_len`] are zero.
    pub fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.raw
    }

    /// Number of significant hex digits.
    pub fn hex_len(&self) -> usize {
        self.hex_len
    }

    /// Whether this is an abbreviated identifier.
    pub fn is_prefix(&self) -> bool {
        self.hex_len < HEX_LEN
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.raw.iter().all(|b| *b == 0)
    }

    /// Hex text of the significant digits.
    pub fn to_hex(&self) -> String {
        let mut text = hex::encode(self.raw);
        text.truncate(self.hex_len);
        text
    }

    /// At most `len` leading hex digits.
    pub fn short(&self, len: usize) -> String {
        let mut text = self.to_hex();
        text.truncate(len);
        text
    }

    /// Whether `other` starts with this identifier's significant digits.
    pub fn is_prefix_of(&self, other: &Oid) -> bool {
        self.hex_len <= other.hex_len && other.to_hex().starts_with(&self.to_hex())
    }

    pub(crate) fn from_git2(oid: git2::Oid) -> Self {
        let mut raw = [0u8; RAW_LEN];
        raw.copy_from_slice(oid.as_bytes());
        Self {
            raw,
            hex_len: HEX_LEN,
        }
    }

    /// Convert a full identifier for libgit2 calls that do not take prefixes.
    pub(crate) fn to_git2(self) -> Result<git2::Oid> {
        if self.is_prefix() {
            return Err(GitError::InvalidOid {
                oid: self.to_hex(),
            });
        }
        git2::Oid::from_bytes(&self.raw).map_err(|e| GitError::from_git2(e, self.to_hex()))
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self.to_hex())
    }
}

impl FromStr for Oid {
    type Err = GitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Oid {
    type Error = GitError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.to_hex()
    }
}
