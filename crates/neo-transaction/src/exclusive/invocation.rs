use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use super::ExclusiveCodec;
use crate::error::at;
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::serializable::read_var_bytes;
use crate::TransactionError;

/// Smart contract invocation payload.
///
/// | Field  | Size                         | Present      |
/// |--------|------------------------------|--------------|
/// | script | VarInt length + bytes        | always       |
/// | gas    | 8 bytes (LE)                 | version >= 1 |
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InvocationData {
    pub script: Vec<u8>,
    /// System fee paid for execution. Only encoded from version 1 on, so
    /// it must stay zero in a version 0 transaction.
    pub gas: Fixed8,
}

impl ExclusiveCodec for InvocationData {
    fn size(&self, version: u8) -> usize {
        let gas = if version >= 1 { Fixed8::SIZE } else { 0 };
        var_bytes_size(self.script.len()) + gas
    }

    fn write_to(&self, version: u8, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.script);
        if version >= 1 {
            writer.write_i64_le(self.gas.raw());
        }
    }

    fn read_from(version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let script = read_var_bytes(reader, limits.max_invocation_script, "invocation script")?;
        let gas = if version >= 1 {
            Fixed8(reader.read_i64_le().map_err(at("invocation gas"))?)
        } else {
            Fixed8::ZERO
        };
        Ok(InvocationData { script, gas })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(data: &InvocationData, version: u8) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        data.write_to(version, &mut writer);
        writer.into_bytes()
    }

    #[test]
    fn test_gas_is_version_gated() {
        let data = InvocationData {
            script: vec![0x51, 0x52],
            gas: Fixed8::ZERO,
        };
        assert_eq!(encode(&data, 0), vec![0x02, 0x51, 0x52]);
        assert_eq!(encode(&data, 1).len(), 3 + 8);
        assert_eq!(data.size(0), 3);
        assert_eq!(data.size(1), 11);
    }

    #[test]
    fn test_roundtrip_with_gas() {
        let data = InvocationData {
            script: vec![0x00, 0x14],
            gas: Fixed8(150_000_000),
        };
        let bytes = encode(&data, 1);
        let mut reader = BinaryReader::new(&bytes);
        let decoded = InvocationData::read_from(1, &mut reader, &Limits::standard()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_script_limit() {
        let data = InvocationData {
            script: vec![0x61; 10],
            gas: Fixed8::ZERO,
        };
        let bytes = encode(&data, 0);
        let limits = Limits {
            max_invocation_script: 4,
            ..Limits::standard()
        };
        let mut reader = BinaryReader::new(&bytes);
        let err = InvocationData::read_from(0, &mut reader, &limits).unwrap_err();
        assert_eq!(
            err,
            TransactionError::LimitExceeded {
                context: "invocation script",
                declared: 10,
                max: 4,
            }
        );
    }
}
