use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use super::ExclusiveCodec;
use crate::error::at;
use crate::limits::Limits;
use crate::serializable::{read_bool, read_var_bytes, read_var_string};
use crate::TransactionError;

/// Contract deployment payload.
///
/// `need_storage` is only on the wire from version 1 on; in a version 0
/// transaction it must be `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PublishData {
    pub script: Vec<u8>,
    /// One contract parameter type byte per parameter.
    pub parameter_list: Vec<u8>,
    pub return_type: u8,
    pub need_storage: bool,
    pub name: String,
    pub code_version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl ExclusiveCodec for PublishData {
    fn size(&self, version: u8) -> usize {
        let storage_flag = usize::from(version >= 1);
        var_bytes_size(self.script.len())
            + var_bytes_size(self.parameter_list.len())
            + 1
            + storage_flag
            + [&self.name, &self.code_version, &self.author, &self.email, &self.description]
                .iter()
                .map(|s| var_bytes_size(s.len()))
                .sum::<usize>()
    }

    fn write_to(&self, version: u8, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.script);
        writer.write_var_bytes(&self.parameter_list);
        writer.write_u8(self.return_type);
        if version >= 1 {
            writer.write_u8(self.need_storage as u8);
        }
        writer.write_var_string(&self.name);
        writer.write_var_string(&self.code_version);
        writer.write_var_string(&self.author);
        writer.write_var_string(&self.email);
        writer.write_var_string(&self.description);
    }

    fn read_from(version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let script = read_var_bytes(reader, limits.max_var_bytes, "contract script")?;
        let parameter_list = read_var_bytes(reader, limits.max_var_bytes, "contract parameters")?;
        let return_type = reader.read_u8().map_err(at("contract return type"))?;
        let need_storage = if version >= 1 {
            read_bool(reader, "contract need storage")?
        } else {
            false
        };
        Ok(PublishData {
            script,
            parameter_list,
            return_type,
            need_storage,
            name: read_var_string(reader, limits.max_contract_metadata, "contract name")?,
            code_version: read_var_string(reader, limits.max_contract_metadata, "contract version")?,
            author: read_var_string(reader, limits.max_contract_metadata, "contract author")?,
            email: read_var_string(reader, limits.max_contract_metadata, "contract email")?,
            description: read_var_string(reader, limits.max_contract_description, "contract description")?,
        })
    }
}
