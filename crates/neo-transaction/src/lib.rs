/// NEO wallet core - Transaction model, binary serialization, and hashing.
///
/// Provides the Transaction envelope shared by every transaction type, the
/// type-specific exclusive data, the value types carried inside (attributes,
/// coin references, outputs, witnesses), decoding limits, and transaction
/// hash derivation.

pub mod attribute;
pub mod coin_reference;
pub mod ecpoint;
pub mod exclusive;
pub mod fixed8;
pub mod limits;
pub mod output;
pub mod serializable;
pub mod transaction;
pub mod transaction_type;
pub mod witness;

mod error;
pub use error::TransactionError;
pub use attribute::{AttributeUsage, TransactionAttribute};
pub use coin_reference::CoinReference;
pub use ecpoint::EcPoint;
pub use exclusive::ExclusiveData;
pub use fixed8::Fixed8;
pub use limits::Limits;
pub use output::TransactionOutput;
pub use serializable::Serializable;
pub use transaction::Transaction;
pub use transaction_type::TransactionType;
pub use witness::Witness;

#[cfg(test)]
mod tests;
