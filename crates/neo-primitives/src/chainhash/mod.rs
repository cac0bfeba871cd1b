//! Fixed-width hash value types.
//!
//! Provides `Hash` (UInt256), used for transaction ids, referenced
//! transactions, and asset ids, and `ScriptHash` (UInt160), used for
//! output destinations and asset admins. Both store bytes in internal
//! (little-endian) order and display as byte-reversed hex, optionally
//! prefixed with `0x` when parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::{hash160, sha256, sha256d};
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Size of a ScriptHash in bytes.
pub const SCRIPT_HASH_SIZE: usize = 20;

/// Decode a byte-reversed hex string into a fixed-size internal-order array.
///
/// Short strings are zero-padded on the high end; a leading `0x` is ignored.
fn decode_reversed_hex<const N: usize>(hex_str: &str) -> Result<[u8; N], PrimitivesError> {
    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    if hex_str.len() > N * 2 {
        return Err(PrimitivesError::InvalidHash(format!(
            "max hash string length is {} characters",
            N * 2
        )));
    }

    let padded = if hex_str.len() % 2 != 0 {
        format!("0{}", hex_str)
    } else {
        hex_str.to_string()
    };

    let decoded = hex::decode(&padded)?;
    let mut display_order = [0u8; N];
    display_order[N - decoded.len()..].copy_from_slice(&decoded);
    display_order.reverse();
    Ok(display_order)
}

fn copy_exact<const N: usize>(bytes: &[u8]) -> Result<[u8; N], PrimitivesError> {
    if bytes.len() != N {
        return Err(PrimitivesError::InvalidHash(format!(
            "invalid hash length of {}, want {}",
            bytes.len(),
            N
        )));
    }
    let mut arr = [0u8; N];
    arr.copy_from_slice(bytes);
    Ok(arr)
}

fn write_reversed_hex(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut reversed = bytes.to_vec();
    reversed.reverse();
    write!(f, "{}", hex::encode(reversed))
}

// ---------------------------------------------------------------------------
// Hash (UInt256)
// ---------------------------------------------------------------------------

/// A 32-byte hash used for transaction ids and asset ids.
///
/// When displayed as a string, the bytes are reversed so the most
/// significant byte comes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from a raw 32-byte array in internal byte order.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        copy_exact(bytes).map(Hash)
    }

    /// Create a Hash from a byte-reversed hex string.
    ///
    /// The hex string represents bytes in display order. A `0x` prefix is
    /// accepted and short strings are zero-padded on the high end. An empty
    /// string yields the zero hash.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        decode_reversed_hex(hex_str).map(Hash)
    }

    /// Access the internal byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return a copy of the internal bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Return `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Display the hash as byte-reversed hex.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reversed_hex(&self.0, f)
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute SHA-256 of the input and return the result as a Hash.
pub fn hash_h(data: &[u8]) -> Hash {
    Hash(sha256(data))
}

/// Compute double SHA-256 of the input and return the result as a Hash.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}

// ---------------------------------------------------------------------------
// ScriptHash (UInt160)
// ---------------------------------------------------------------------------

/// A 20-byte script hash identifying an account or contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct ScriptHash([u8; SCRIPT_HASH_SIZE]);

impl ScriptHash {
    /// Create a ScriptHash from a raw 20-byte array in internal byte order.
    pub const fn new(bytes: [u8; SCRIPT_HASH_SIZE]) -> Self {
        ScriptHash(bytes)
    }

    /// Create a ScriptHash from a slice that must be exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        copy_exact(bytes).map(ScriptHash)
    }

    /// Create a ScriptHash from a byte-reversed hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        decode_reversed_hex(hex_str).map(ScriptHash)
    }

    /// Hash160 of a verification script.
    pub fn from_script(script: &[u8]) -> Self {
        ScriptHash(hash160(script))
    }

    pub fn as_bytes(&self) -> &[u8; SCRIPT_HASH_SIZE] {
        &self.0
    }
}

impl From<[u8; SCRIPT_HASH_SIZE]> for ScriptHash {
    fn from(bytes: [u8; SCRIPT_HASH_SIZE]) -> Self {
        ScriptHash(bytes)
    }
}

impl AsRef<[u8]> for ScriptHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reversed_hex(&self.0, f)
    }
}

impl FromStr for ScriptHash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptHash::from_hex(s)
    }
}

impl Serialize for ScriptHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScriptHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ScriptHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
