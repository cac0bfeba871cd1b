//! Transaction output: an amount of an asset paid to a script hash.
//!
//! Provides binary serialization/deserialization following the NEO wire
//! format.

use neo_primitives::chainhash::{Hash, ScriptHash, HASH_SIZE, SCRIPT_HASH_SIZE};
use neo_primitives::util::{BinaryReader, BinaryWriter};

use crate::error::at;
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::serializable::Serializable;
use crate::TransactionError;

/// A single output in a transaction.
///
/// # Wire format
///
/// | Field        | Size          |
/// |--------------|---------------|
/// | asset_id     | 32 bytes      |
/// | value        | 8 bytes (LE)  |
/// | script_hash  | 20 bytes      |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransactionOutput {
    /// Id of the asset being transferred (the hash of its register
    /// transaction).
    pub asset_id: Hash,

    /// Amount transferred, in Fixed8 units.
    pub value: Fixed8,

    /// Script hash of the receiving account.
    pub script_hash: ScriptHash,
}

impl TransactionOutput {
    pub const SIZE: usize = HASH_SIZE + Fixed8::SIZE + SCRIPT_HASH_SIZE;

    pub fn new(asset_id: Hash, value: Fixed8, script_hash: ScriptHash) -> Self {
        TransactionOutput {
            asset_id,
            value,
            script_hash,
        }
    }
}

impl Serializable for TransactionOutput {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(self.asset_id.as_bytes());
        writer.write_i64_le(self.value.raw());
        writer.write_bytes(self.script_hash.as_bytes());
    }

    fn read_from(reader: &mut BinaryReader<'_>, _limits: &Limits) -> Result<Self, TransactionError> {
        let asset_id = Hash::new(reader.read_array().map_err(at("output asset id"))?);
        let value = Fixed8(reader.read_i64_le().map_err(at("output value"))?);
        let script_hash = ScriptHash::new(reader.read_array().map_err(at("output script hash"))?);
        Ok(TransactionOutput {
            asset_id,
            value,
            script_hash,
        })
    }
}
