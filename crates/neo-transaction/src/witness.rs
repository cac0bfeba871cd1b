//! Witness: the invocation and verification scripts proving a transaction
//! was authorized.

use neo_primitives::chainhash::ScriptHash;
use neo_primitives::util::{var_bytes_size, BinaryReader, BinaryWriter};

use crate::limits::Limits;
use crate::serializable::{read_var_bytes, Serializable};
use crate::TransactionError;

/// # Wire format
///
/// | Field               | Size                     |
/// |---------------------|--------------------------|
/// | invocation_script   | VarInt length + bytes    |
/// | verification_script | VarInt length + bytes    |
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Witness {
    /// Pushes the signatures (the unlocking data).
    pub invocation_script: Vec<u8>,
    /// The account's verification contract.
    pub verification_script: Vec<u8>,
}

impl Witness {
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Witness {
            invocation_script,
            verification_script,
        }
    }

    /// Hash160 of the verification script, the account this witness
    /// speaks for.
    pub fn script_hash(&self) -> ScriptHash {
        ScriptHash::from_script(&self.verification_script)
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        var_bytes_size(self.invocation_script.len()) + var_bytes_size(self.verification_script.len())
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.invocation_script);
        writer.write_var_bytes(&self.verification_script);
    }

    fn read_from(reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let invocation_script = read_var_bytes(reader, limits.max_var_bytes, "invocation script")?;
        let verification_script =
            read_var_bytes(reader, limits.max_var_bytes, "verification script")?;
        Ok(Witness {
            invocation_script,
            verification_script,
        })
    }
}
