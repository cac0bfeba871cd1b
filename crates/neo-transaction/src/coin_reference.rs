//! Reference to an output of an earlier transaction.

use neo_primitives::chainhash::{Hash, HASH_SIZE};
use neo_primitives::util::{BinaryReader, BinaryWriter};

use crate::error::at;
use crate::limits::Limits;
use crate::serializable::Serializable;
use crate::TransactionError;

/// A spent output, identified by the hash of the transaction that created
/// it and its position in that transaction's outputs.
///
/// # Wire format
///
/// | Field      | Size          |
/// |------------|---------------|
/// | prev_hash  | 32 bytes      |
/// | prev_index | 2 bytes (LE)  |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinReference {
    /// Hash of the transaction holding the spent output, internal byte order.
    pub prev_hash: Hash,
    /// Index of the spent output within that transaction.
    pub prev_index: u16,
}

impl CoinReference {
    pub const SIZE: usize = HASH_SIZE + 2;

    pub fn new(prev_hash: Hash, prev_index: u16) -> Self {
        CoinReference {
            prev_hash,
            prev_index,
        }
    }
}

impl Serializable for CoinReference {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(self.prev_hash.as_bytes());
        writer.write_u16_le(self.prev_index);
    }

    fn read_from(reader: &mut BinaryReader<'_>, _limits: &Limits) -> Result<Self, TransactionError> {
        let prev_hash = Hash::new(reader.read_array().map_err(at("coin reference hash"))?);
        let prev_index = reader.read_u16_le().map_err(at("coin reference index"))?;
        Ok(CoinReference {
            prev_hash,
            prev_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding() {
        let reference = CoinReference::new(Hash::new([0x42; 32]), 0x0102);
        let bytes = reference.to_bytes();
        assert_eq!(bytes.len(), CoinReference::SIZE);
        assert_eq!(&bytes[32..], &[0x02, 0x01]);
        assert_eq!(CoinReference::from_bytes(&bytes).unwrap(), reference);
    }

    #[test]
    fn test_deserialize_at_offset() {
        let reference = CoinReference::new(Hash::new([0x07; 32]), 9);
        let mut data = vec![0xee, 0xee];
        data.extend(reference.to_bytes());
        let (decoded, end) = CoinReference::deserialize_at(&data, 2).unwrap();
        assert_eq!(decoded, reference);
        assert_eq!(end, data.len());
    }

    #[test]
    fn test_truncated() {
        let err = CoinReference::from_bytes(&[0u8; 33]).unwrap_err();
        assert_eq!(
            err,
            TransactionError::Truncated {
                context: "coin reference index",
                needed: 2,
                remaining: 1,
            }
        );
    }
}
