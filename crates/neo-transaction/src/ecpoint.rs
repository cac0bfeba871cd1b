//! Encoded secp256r1 public keys as they appear inside transactions.
//!
//! Only the framing is checked here; whether the bytes name a point on the
//! curve is the signer's concern.

use neo_primitives::util::{BinaryReader, BinaryWriter};

use crate::error::at;
use crate::limits::Limits;
use crate::serializable::Serializable;
use crate::TransactionError;

/// A public key in its wire encoding.
///
/// | Prefix               | Total length | Meaning             |
/// |----------------------|--------------|---------------------|
/// | `0x00`               | 1            | point at infinity   |
/// | `0x02` / `0x03`      | 33           | compressed          |
/// | `0x04` `0x06` `0x07` | 65           | uncompressed/hybrid |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EcPoint(Vec<u8>);

impl EcPoint {
    /// The point at infinity.
    pub fn infinity() -> Self {
        EcPoint(vec![0x00])
    }

    /// Wrap an encoded key, checking its prefix and length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let prefix = *bytes.first().ok_or(TransactionError::Truncated {
            context: "ec point prefix",
            needed: 1,
            remaining: 0,
        })?;
        let expected = Self::encoded_len(prefix)?;
        if bytes.len() != expected {
            return Err(TransactionError::InvalidEcPoint(prefix));
        }
        Ok(EcPoint(bytes.to_vec()))
    }

    fn encoded_len(prefix: u8) -> Result<usize, TransactionError> {
        match prefix {
            0x00 => Ok(1),
            0x02 | 0x03 => Ok(33),
            0x04 | 0x06 | 0x07 => Ok(65),
            other => Err(TransactionError::InvalidEcPoint(other)),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.0 == [0x00]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Serializable for EcPoint {
    fn size(&self) -> usize {
        self.0.len()
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(&self.0);
    }

    fn read_from(reader: &mut BinaryReader<'_>, _limits: &Limits) -> Result<Self, TransactionError> {
        let prefix = reader.read_u8().map_err(at("ec point prefix"))?;
        let body = reader
            .read_bytes(Self::encoded_len(prefix)? - 1)
            .map_err(at("ec point"))?;
        let mut bytes = Vec::with_capacity(body.len() + 1);
        bytes.push(prefix);
        bytes.extend_from_slice(body);
        Ok(EcPoint(bytes))
    }
}
