use neo_primitives::chainhash::{ScriptHash, SCRIPT_HASH_SIZE};
use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use super::ExclusiveCodec;
use crate::ecpoint::EcPoint;
use crate::error::at;
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::serializable::{read_var_string, Serializable};
use crate::TransactionError;

/// Kind of asset being registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssetType {
    GoverningToken = 0x00,
    UtilityToken = 0x01,
    Currency = 0x08,
    CreditFlag = 0x40,
    Token = 0x60,
    DutyFlag = 0x80,
    Share = 0x90,
    Invoice = 0x98,
}

impl TryFrom<u8> for AssetType {
    type Error = TransactionError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Ok(match b {
            0x00 => AssetType::GoverningToken,
            0x01 => AssetType::UtilityToken,
            0x08 => AssetType::Currency,
            0x40 => AssetType::CreditFlag,
            0x60 => AssetType::Token,
            0x80 => AssetType::DutyFlag,
            0x90 => AssetType::Share,
            0x98 => AssetType::Invoice,
            other => return Err(TransactionError::InvalidAssetType(other)),
        })
    }
}

/// Asset registration payload.
///
/// | Field      | Size                          |
/// |------------|-------------------------------|
/// | asset_type | 1 byte                        |
/// | name       | VarInt length + UTF-8         |
/// | amount     | 8 bytes (LE)                  |
/// | precision  | 1 byte                        |
/// | owner      | encoded EC point              |
/// | admin      | 20 bytes                      |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegisterData {
    pub asset_type: AssetType,
    pub name: String,
    pub amount: Fixed8,
    pub precision: u8,
    pub owner: EcPoint,
    pub admin: ScriptHash,
}

impl ExclusiveCodec for RegisterData {
    fn size(&self, _version: u8) -> usize {
        1 + var_bytes_size(self.name.len()) + Fixed8::SIZE + 1 + self.owner.size() + SCRIPT_HASH_SIZE
    }

    fn write_to(&self, _version: u8, writer: &mut BinaryWriter) {
        writer.write_u8(self.asset_type as u8);
        writer.write_var_string(&self.name);
        writer.write_i64_le(self.amount.raw());
        writer.write_u8(self.precision);
        self.owner.write_to(writer);
        writer.write_bytes(self.admin.as_bytes());
    }

    fn read_from(_version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let asset_type = AssetType::try_from(reader.read_u8().map_err(at("asset type"))?)?;
        let name = read_var_string(reader, limits.max_asset_name, "asset name")?;
        let amount = Fixed8(reader.read_i64_le().map_err(at("asset amount"))?);
        let precision = reader.read_u8().map_err(at("asset precision"))?;
        let owner = EcPoint::read_from(reader, limits)?;
        let admin = ScriptHash::new(reader.read_array().map_err(at("asset admin"))?);
        Ok(RegisterData {
            asset_type,
            name,
            amount,
            precision,
            owner,
            admin,
        })
    }
}
