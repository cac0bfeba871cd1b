/// NEO wallet core - Hashing, hash value types, and binary codec primitives.
///
/// This crate provides the foundational building blocks shared by the
/// transaction crate:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - `Hash` (UInt256) and `ScriptHash` (UInt160) value types
/// - Variable-length integer encoding and cursor-based binary reader/writer
/// - BIP-39 mnemonic validation and word suggestion

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod bip39;

mod error;
pub use error::PrimitivesError;
