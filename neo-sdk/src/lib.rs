#![deny(missing_docs)]

//! NEO wallet core SDK.
//!
//! Re-exports the primitives and transaction crates for convenient
//! single-crate usage.

pub use neo_primitives as primitives;
pub use neo_transaction as transaction;
