//! Type-specific trailing fields ("exclusive data").
//!
//! Every transaction shares the same envelope; what differs between kinds
//! is a block of fields written after the outputs. `ExclusiveData` is a
//! closed enum with one variant per `TransactionType`, and each variant's
//! payload implements `ExclusiveCodec`. The envelope codec only matches on
//! the variant to delegate, so adding a kind means adding a variant and a
//! payload type.

mod invocation;
mod publish;
mod register;
mod state;

pub use invocation::InvocationData;
pub use publish::PublishData;
pub use register::{AssetType, RegisterData};
pub use state::{StateData, StateDescriptor, StateType};

use neo_primitives::util::{BinaryReader, BinaryWriter};

use crate::coin_reference::CoinReference;
use crate::ecpoint::EcPoint;
use crate::error::at;
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::serializable::{array_size, read_array, write_array, Serializable};
use crate::transaction_type::TransactionType;
use crate::TransactionError;

/// Codec for a payload whose layout may depend on the transaction version.
pub trait ExclusiveCodec: Sized {
    fn size(&self, version: u8) -> usize;

    fn write_to(&self, version: u8, writer: &mut BinaryWriter);

    fn read_from(
        version: u8,
        reader: &mut BinaryReader<'_>,
        limits: &Limits,
    ) -> Result<Self, TransactionError>;
}

/// Block reward transaction payload: a nonce that makes each one unique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MinerData {
    pub nonce: u32,
}

impl ExclusiveCodec for MinerData {
    fn size(&self, _version: u8) -> usize {
        4
    }

    fn write_to(&self, _version: u8, writer: &mut BinaryWriter) {
        writer.write_u32_le(self.nonce);
    }

    fn read_from(_version: u8, reader: &mut BinaryReader<'_>, _limits: &Limits) -> Result<Self, TransactionError> {
        let nonce = reader.read_u32_le().map_err(at("miner nonce"))?;
        Ok(MinerData { nonce })
    }
}

/// GAS claim payload: the spent outputs whose generated GAS is claimed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClaimData {
    pub claims: Vec<CoinReference>,
}

impl ExclusiveCodec for ClaimData {
    fn size(&self, _version: u8) -> usize {
        array_size(&self.claims)
    }

    fn write_to(&self, _version: u8, writer: &mut BinaryWriter) {
        write_array(writer, &self.claims);
    }

    fn read_from(_version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let claims = read_array(reader, limits, limits.max_inputs, "claim count")?;
        Ok(ClaimData { claims })
    }
}

/// Validator enrollment payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnrollmentData {
    pub public_key: EcPoint,
}

impl ExclusiveCodec for EnrollmentData {
    fn size(&self, _version: u8) -> usize {
        self.public_key.size()
    }

    fn write_to(&self, _version: u8, writer: &mut BinaryWriter) {
        self.public_key.write_to(writer);
    }

    fn read_from(_version: u8, reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let public_key = EcPoint::read_from(reader, limits)?;
        Ok(EnrollmentData { public_key })
    }
}

/// The exclusive data of a transaction, tagged by transaction type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExclusiveData {
    Miner(MinerData),
    Issue,
    Claim(ClaimData),
    Enrollment(EnrollmentData),
    Register(RegisterData),
    Contract,
    State(StateData),
    Publish(PublishData),
    Invocation(InvocationData),
}

impl ExclusiveData {
    /// The transaction type this payload belongs to.
    pub fn tx_type(&self) -> TransactionType {
        match self {
            ExclusiveData::Miner(_) => TransactionType::Miner,
            ExclusiveData::Issue => TransactionType::Issue,
            ExclusiveData::Claim(_) => TransactionType::Claim,
            ExclusiveData::Enrollment(_) => TransactionType::Enrollment,
            ExclusiveData::Register(_) => TransactionType::Register,
            ExclusiveData::Contract => TransactionType::Contract,
            ExclusiveData::State(_) => TransactionType::State,
            ExclusiveData::Publish(_) => TransactionType::Publish,
            ExclusiveData::Invocation(_) => TransactionType::Invocation,
        }
    }

    pub fn size(&self, version: u8) -> usize {
        match self {
            ExclusiveData::Issue | ExclusiveData::Contract => 0,
            ExclusiveData::Miner(d) => d.size(version),
            ExclusiveData::Claim(d) => d.size(version),
            ExclusiveData::Enrollment(d) => d.size(version),
            ExclusiveData::Register(d) => d.size(version),
            ExclusiveData::State(d) => d.size(version),
            ExclusiveData::Publish(d) => d.size(version),
            ExclusiveData::Invocation(d) => d.size(version),
        }
    }

    pub fn write_to(&self, version: u8, writer: &mut BinaryWriter) {
        match self {
            ExclusiveData::Issue | ExclusiveData::Contract => {}
            ExclusiveData::Miner(d) => d.write_to(version, writer),
            ExclusiveData::Claim(d) => d.write_to(version, writer),
            ExclusiveData::Enrollment(d) => d.write_to(version, writer),
            ExclusiveData::Register(d) => d.write_to(version, writer),
            ExclusiveData::State(d) => d.write_to(version, writer),
            ExclusiveData::Publish(d) => d.write_to(version, writer),
            ExclusiveData::Invocation(d) => d.write_to(version, writer),
        }
    }

    /// Decode the payload for `tx_type` at the reader's position.
    pub fn read_from(
        tx_type: TransactionType,
        version: u8,
        reader: &mut BinaryReader<'_>,
        limits: &Limits,
    ) -> Result<Self, TransactionError> {
        Ok(match tx_type {
            TransactionType::Issue => ExclusiveData::Issue,
            TransactionType::Contract => ExclusiveData::Contract,
            TransactionType::Miner => {
                ExclusiveData::Miner(MinerData::read_from(version, reader, limits)?)
            }
            TransactionType::Claim => {
                ExclusiveData::Claim(ClaimData::read_from(version, reader, limits)?)
            }
            TransactionType::Enrollment => {
                ExclusiveData::Enrollment(EnrollmentData::read_from(version, reader, limits)?)
            }
            TransactionType::Register => {
                ExclusiveData::Register(RegisterData::read_from(version, reader, limits)?)
            }
            TransactionType::State => {
                ExclusiveData::State(StateData::read_from(version, reader, limits)?)
            }
            TransactionType::Publish => {
                ExclusiveData::Publish(PublishData::read_from(version, reader, limits)?)
            }
            TransactionType::Invocation => {
                ExclusiveData::Invocation(InvocationData::read_from(version, reader, limits)?)
            }
        })
    }

    /// Lowest transaction version whose encoding carries every field set
    /// here: 1 when a version-gated field (invocation gas, publish
    /// `need_storage`) holds a non-default value, otherwise 0.
    pub fn min_version(&self) -> u8 {
        match self {
            ExclusiveData::Invocation(d) if d.gas != Fixed8::ZERO => 1,
            ExclusiveData::Publish(d) if d.need_storage => 1,
            _ => 0,
        }
    }

    /// Coin references spent through the payload (claims only).
    pub fn claims(&self) -> &[CoinReference] {
        match self {
            ExclusiveData::Claim(d) => &d.claims,
            _ => &[],
        }
    }
}
