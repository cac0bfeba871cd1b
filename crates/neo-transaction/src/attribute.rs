//! Transaction attributes: a usage tag plus an opaque payload.
//!
//! The usage tag decides how the payload is framed on the wire. Some tags
//! carry a fixed-size payload with no prefix, `DescriptionUrl` carries a
//! one-byte length, and `Description`/`Remark*` carry a VarInt length.

use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use crate::error::at;
use crate::limits::Limits;
use crate::serializable::{read_var_bytes, Serializable};
use crate::TransactionError;

/// Longest payload a VarInt-framed attribute may carry.
pub const MAX_ATTRIBUTE_DATA: usize = u16::MAX as usize;

/// Attribute usage tags.
///
/// | Tag                 | Byte        | Payload                    |
/// |---------------------|-------------|----------------------------|
/// | `ContractHash`      | 0x00        | 32 bytes                   |
/// | `Ecdh02`/`Ecdh03`   | 0x02/0x03   | 32 bytes (key x-coordinate)|
/// | `Script`            | 0x20        | 20 bytes                   |
/// | `Vote`              | 0x30        | 32 bytes                   |
/// | `DescriptionUrl`    | 0x81        | u8 length + data           |
/// | `Description`       | 0x90        | VarInt length + data       |
/// | `Hash(1..=15)`      | 0xa1..0xaf  | 32 bytes                   |
/// | `Remark(0..=15)`    | 0xf0..0xff  | VarInt length + data       |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    ContractHash,
    Ecdh02,
    Ecdh03,
    Script,
    Vote,
    DescriptionUrl,
    Description,
    Hash(u8),
    Remark(u8),
}

/// How an attribute payload is framed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadLength {
    Fixed(usize),
    BytePrefixed,
    VarPrefixed,
}

impl AttributeUsage {
    /// Decode a usage tag byte.
    pub fn from_byte(b: u8) -> Result<Self, TransactionError> {
        Ok(match b {
            0x00 => AttributeUsage::ContractHash,
            0x02 => AttributeUsage::Ecdh02,
            0x03 => AttributeUsage::Ecdh03,
            0x20 => AttributeUsage::Script,
            0x30 => AttributeUsage::Vote,
            0x81 => AttributeUsage::DescriptionUrl,
            0x90 => AttributeUsage::Description,
            0xa1..=0xaf => AttributeUsage::Hash(b - 0xa0),
            0xf0..=0xff => AttributeUsage::Remark(b - 0xf0),
            other => return Err(TransactionError::InvalidAttributeUsage(other)),
        })
    }

    /// The wire byte for this tag.
    ///
    /// Out-of-range `Hash`/`Remark` indices map to bytes that `from_byte`
    /// rejects, so they never survive `TransactionAttribute::new`.
    pub fn to_byte(self) -> u8 {
        match self {
            AttributeUsage::ContractHash => 0x00,
            AttributeUsage::Ecdh02 => 0x02,
            AttributeUsage::Ecdh03 => 0x03,
            AttributeUsage::Script => 0x20,
            AttributeUsage::Vote => 0x30,
            AttributeUsage::DescriptionUrl => 0x81,
            AttributeUsage::Description => 0x90,
            AttributeUsage::Hash(n) if (1..=15).contains(&n) => 0xa0 + n,
            AttributeUsage::Remark(n) if n <= 15 => 0xf0 + n,
            AttributeUsage::Hash(_) | AttributeUsage::Remark(_) => 0x01,
        }
    }

    pub fn payload_length(self) -> PayloadLength {
        match self {
            AttributeUsage::ContractHash
            | AttributeUsage::Ecdh02
            | AttributeUsage::Ecdh03
            | AttributeUsage::Vote
            | AttributeUsage::Hash(_) => PayloadLength::Fixed(32),
            AttributeUsage::Script => PayloadLength::Fixed(20),
            AttributeUsage::DescriptionUrl => PayloadLength::BytePrefixed,
            AttributeUsage::Description | AttributeUsage::Remark(_) => PayloadLength::VarPrefixed,
        }
    }
}

/// A single attribute attached to a transaction.
///
/// Fields are private so that every instance satisfies its usage tag's
/// payload rule and therefore round-trips through the wire format.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransactionAttribute {
    usage: AttributeUsage,
    data: Vec<u8>,
}

impl TransactionAttribute {
    /// Create an attribute, validating the payload against the usage tag.
    pub fn new(usage: AttributeUsage, data: Vec<u8>) -> Result<Self, TransactionError> {
        let byte = usage.to_byte();
        if AttributeUsage::from_byte(byte).ok() != Some(usage) {
            return Err(TransactionError::InvalidAttribute(format!(
                "usage {:?} has no wire tag",
                usage
            )));
        }
        let ok = match usage.payload_length() {
            PayloadLength::Fixed(n) => data.len() == n,
            PayloadLength::BytePrefixed => data.len() <= u8::MAX as usize,
            PayloadLength::VarPrefixed => data.len() <= MAX_ATTRIBUTE_DATA,
        };
        if !ok {
            return Err(TransactionError::InvalidAttribute(format!(
                "{} byte payload does not fit usage 0x{:02x}",
                data.len(),
                byte
            )));
        }
        Ok(TransactionAttribute { usage, data })
    }

    /// A free-form remark, the attribute wallets use to make otherwise
    /// identical transactions distinct.
    pub fn remark(data: Vec<u8>) -> Result<Self, TransactionError> {
        Self::new(AttributeUsage::Remark(0), data)
    }

    pub fn usage(&self) -> AttributeUsage {
        self.usage
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1 + match self.usage.payload_length() {
            PayloadLength::Fixed(n) => n,
            PayloadLength::BytePrefixed => 1 + self.data.len(),
            PayloadLength::VarPrefixed => var_bytes_size(self.data.len()),
        }
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.usage.to_byte());
        match self.usage.payload_length() {
            PayloadLength::Fixed(_) => writer.write_bytes(&self.data),
            PayloadLength::BytePrefixed => {
                writer.write_u8(self.data.len() as u8);
                writer.write_bytes(&self.data);
            }
            PayloadLength::VarPrefixed => writer.write_var_bytes(&self.data),
        }
    }

    fn read_from(reader: &mut BinaryReader<'_>, _limits: &Limits) -> Result<Self, TransactionError> {
        let usage = AttributeUsage::from_byte(reader.read_u8().map_err(at("attribute usage"))?)?;
        let data = match usage.payload_length() {
            PayloadLength::Fixed(n) => reader.read_bytes(n).map_err(at("attribute data"))?.to_vec(),
            PayloadLength::BytePrefixed => {
                let len = reader.read_u8().map_err(at("attribute length"))? as usize;
                if len > reader.remaining() {
                    return Err(TransactionError::MalformedLength {
                        context: "attribute data",
                        declared: len as u64,
                        remaining: reader.remaining(),
                    });
                }
                reader.read_bytes(len).map_err(at("attribute data"))?.to_vec()
            }
            PayloadLength::VarPrefixed => {
                read_var_bytes(reader, MAX_ATTRIBUTE_DATA, "attribute data")?
            }
        };
        Ok(TransactionAttribute { usage, data })
    }
}
