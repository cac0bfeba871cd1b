use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use super::ExclusiveCodec;
use crate::error::at;
use crate::limits::Limits;
use crate::serializable::{array_size, read_array, read_var_bytes, read_var_string, write_array, Serializable};
use crate::TransactionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateType {
    Account = 0x40,
    Validator = 0x48,
}

impl TryFrom<u8> for StateType {
    type Error = TransactionError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            0x40 => Ok(StateType::Account),
            0x48 => Ok(StateType::Validator),
            other => Err(TransactionError::InvalidStateType(other)),
        }
    }
}

/// One state change, e.g. an account's votes or a validator registration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateDescriptor {
    pub state_type: StateType,
    /// Account script hash or validator public key.
    pub key: Vec<u8>,
    /// Name of the field being changed, e.g. "Votes" or "Registered".
    pub field: String,
    pub value: Vec<u8>,
}

impl Serializable for StateDescriptor {
    fn size(&self) -> usize {
        1 + var_bytes_size(self.key.len())
            + var_bytes_size(self.field.len())
            + var_bytes_size(self.value.len())
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.state_type as u8);
        writer.write_var_bytes(&self.key);
        writer.write_var_string(&self.field);
        writer.write_var_bytes(&self.value);
    }

    fn read_from(reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let state_type = StateType::try_from(reader.read_u8().map_err(at("state type"))?)?;
        let key = read_var_bytes(reader, limits.max_state_key, "state key")?;
        let field = read_var_string(reader, limits.max_state_field, "state field")?;
        let value = read_var_bytes(reader, limits.max_state_value, "state value")?;
        Ok(StateDescriptor {
            state_type,
            key,
            field,
            value,
        })
    }
}

/// State change payload: a list of descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateData {
    pub descriptors: Vec<StateDescriptor>,
}

impl ExclusiveCodec for StateData {
    fn size(&self, _version: u8) -> usize {
        array_size(&self.descriptors)
    }

    fn write_to(&self, _version: u8, writer: &mut BinaryWriter) {
        write_array(writer, &self.descriptors);
    }

    fn read_from(_version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let descriptors =
            read_array(reader, limits, limits.max_state_descriptors, "state descriptor count")?;
        Ok(StateData { descriptors })
    }
}
