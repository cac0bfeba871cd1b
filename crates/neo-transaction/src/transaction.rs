//! Core transaction type.
//!
//! A transaction is a shared envelope (type, version, attributes, inputs,
//! outputs, witnesses) plus a type-specific exclusive data block. Supports
//! binary and hex serialization, decoding with type dispatch, and the
//! transaction hash used for signing and identity.

use std::fmt;

use neo_primitives::chainhash::{double_hash_h, Hash};
use neo_primitives::util::{BinaryReader, BinaryWriter};
use num_bigint::BigUint;

use crate::attribute::TransactionAttribute;
use crate::coin_reference::CoinReference;
use crate::error::at;
use crate::exclusive::{ClaimData, ExclusiveData, InvocationData, MinerData};
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::output::TransactionOutput;
use crate::serializable::{array_size, read_array, write_array, Serializable};
use crate::transaction_type::TransactionType;
use crate::witness::Witness;
use crate::TransactionError;

/// A transaction of any type.
///
/// # Wire format
///
/// | Field          | Size                          |
/// |----------------|-------------------------------|
/// | type           | 1 byte                        |
/// | version        | 1 byte                        |
/// | attributes     | VarInt count + attributes     |
/// | inputs         | VarInt count + references     |
/// | outputs        | VarInt count + outputs        |
/// | exclusive data | type-specific, may be empty   |
/// | witnesses      | VarInt count + witnesses      |
///
/// Everything before the witnesses is the signable portion; the hash is
/// taken over it alone, so attaching witnesses never changes the hash.
///
/// The type byte is not stored separately: it is derived from the
/// `exclusive` variant, so the two cannot disagree. The version and the
/// exclusive data are private so that the version never drops below what
/// the payload needs; every constructible transaction round-trips.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transaction {
    /// Format version. Some exclusive fields only exist from version 1.
    version: u8,

    pub attributes: Vec<TransactionAttribute>,

    /// Outputs of earlier transactions being spent.
    pub inputs: Vec<CoinReference>,

    pub outputs: Vec<TransactionOutput>,

    /// Type-specific fields; its variant decides the transaction type.
    exclusive: ExclusiveData,

    /// Proofs of authorization, appended after signing.
    witnesses: Vec<Witness>,
}

impl Transaction {
    /// Create an unsigned, empty transaction carrying `exclusive`.
    ///
    /// Invocation and publish transactions start at version 1, where their
    /// gas and storage fields are on the wire; every other type starts at 0.
    pub fn new(exclusive: ExclusiveData) -> Self {
        let version = match &exclusive {
            ExclusiveData::Invocation(_) | ExclusiveData::Publish(_) => 1,
            _ => 0,
        };
        Transaction {
            version,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            exclusive,
            witnesses: Vec::new(),
        }
    }

    /// A plain asset transfer.
    pub fn contract() -> Self {
        Self::new(ExclusiveData::Contract)
    }

    pub fn miner(nonce: u32) -> Self {
        Self::new(ExclusiveData::Miner(MinerData { nonce }))
    }

    pub fn claim(claims: Vec<CoinReference>) -> Self {
        Self::new(ExclusiveData::Claim(ClaimData { claims }))
    }

    /// A version 1 invocation transaction paying `gas` as system fee.
    pub fn invocation(script: Vec<u8>, gas: Fixed8) -> Self {
        Self::new(ExclusiveData::Invocation(InvocationData { script, gas }))
    }

    /// The transaction type, derived from the exclusive data.
    pub fn tx_type(&self) -> TransactionType {
        self.exclusive.tx_type()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Change the format version.
    ///
    /// Fails with `VersionTooLow` if the exclusive data holds a field the
    /// new version does not encode, e.g. a non-zero invocation gas at
    /// version 0.
    pub fn set_version(&mut self, version: u8) -> Result<(), TransactionError> {
        let required = self.exclusive.min_version();
        if version < required {
            return Err(TransactionError::VersionTooLow { version, required });
        }
        self.version = version;
        Ok(())
    }

    pub fn exclusive(&self) -> &ExclusiveData {
        &self.exclusive
    }

    // -----------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------

    pub fn add_attribute(&mut self, attribute: TransactionAttribute) {
        self.attributes.push(attribute);
    }

    pub fn add_input(&mut self, input: CoinReference) {
        self.inputs.push(input);
    }

    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Append a witness. Witnesses are append-only; they are produced
    /// from the hash and do not affect it.
    pub fn add_witness(&mut self, witness: Witness) {
        self.witnesses.push(witness);
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn is_signed(&self) -> bool {
        !self.witnesses.is_empty()
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Size of the signable portion in bytes.
    fn signable_size(&self) -> usize {
        2 + array_size(&self.attributes)
            + array_size(&self.inputs)
            + array_size(&self.outputs)
            + self.exclusive.size(self.version)
    }

    fn write_signable(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.tx_type().to_byte());
        writer.write_u8(self.version);
        write_array(writer, &self.attributes);
        write_array(writer, &self.inputs);
        write_array(writer, &self.outputs);
        self.exclusive.write_to(self.version, writer);
    }

    /// The bytes that are hashed and signed: everything but witnesses.
    pub fn signable_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(self.signable_size());
        self.write_signable(&mut writer);
        writer.into_bytes()
    }

    /// Serialize this transaction to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| TransactionError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction that must span all of `bytes`, applying
    /// `limits` to every count and length.
    pub fn from_bytes_with_limits(bytes: &[u8], limits: &Limits) -> Result<Self, TransactionError> {
        let mut reader = BinaryReader::new(bytes);
        let tx = Self::read_from(&mut reader, limits)?;
        if reader.remaining() != 0 {
            tracing::debug!(
                trailing = reader.remaining(),
                tx_type = %tx.tx_type(),
                "rejecting transaction with trailing bytes"
            );
            return Err(TransactionError::TrailingBytes(reader.remaining()));
        }
        Ok(tx)
    }

    // -----------------------------------------------------------------
    // Hash
    // -----------------------------------------------------------------

    /// Transaction hash: double SHA-256 of the signable bytes.
    pub fn hash(&self) -> Hash {
        let hash = double_hash_h(&self.signable_bytes());
        tracing::trace!(%hash, tx_type = %self.tx_type(), "computed transaction hash");
        hash
    }

    /// The hash read as an unsigned big-endian integer over the raw
    /// digest bytes.
    pub fn hash_uint256(&self) -> BigUint {
        BigUint::from_bytes_be(self.hash().as_bytes())
    }

    /// The hash in display (byte-reversed) hex.
    pub fn tx_id_hex(&self) -> String {
        self.hash().to_string()
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Every coin reference this transaction spends: inputs, then claims.
    pub fn references(&self) -> impl Iterator<Item = &CoinReference> {
        self.inputs.iter().chain(self.exclusive.claims())
    }

    /// Sum of output values paying `asset_id`, or `None` on overflow.
    pub fn total_output(&self, asset_id: &Hash) -> Option<Fixed8> {
        self.outputs
            .iter()
            .filter(|o| &o.asset_id == asset_id)
            .try_fold(Fixed8::ZERO, |acc, o| acc.checked_add(o.value))
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.signable_size() + array_size(&self.witnesses)
    }

    fn write_to(&self, writer: &mut BinaryWriter) {
        self.write_signable(writer);
        write_array(writer, &self.witnesses);
    }

    /// Decode a transaction: read the type byte, then the shared envelope,
    /// then hand the reader to that type's exclusive data codec.
    ///
    /// Decoding is all-or-nothing; on error no partial transaction escapes.
    fn read_from(reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError> {
        let start = reader.position();
        let type_byte = reader.read_u8().map_err(at("transaction type"))?;
        let tx_type = TransactionType::try_from(type_byte).map_err(|e| {
            tracing::debug!(type_byte, "unknown transaction type");
            e
        })?;
        let version = reader.read_u8().map_err(at("transaction version"))?;

        let attributes = read_array(reader, limits, limits.max_attributes, "attribute count")?;
        let inputs = read_array(reader, limits, limits.max_inputs, "input count")?;
        let outputs = read_array(reader, limits, limits.max_outputs, "output count")?;
        let exclusive = ExclusiveData::read_from(tx_type, version, reader, limits)?;
        let witnesses = read_array(reader, limits, limits.max_witnesses, "witness count")?;

        let tx = Transaction {
            version,
            attributes,
            inputs,
            outputs,
            exclusive,
            witnesses,
        };
        tracing::debug!(
            tx_type = %tx_type,
            version,
            attributes = tx.attributes.len(),
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            witnesses = tx.witnesses.len(),
            size = reader.position() - start,
            "decoded transaction"
        );
        Ok(tx)
    }

    fn from_bytes(data: &[u8]) -> Result<Self, TransactionError> {
        Self::from_bytes_with_limits(data, &Limits::standard())
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::contract()
    }
}

impl fmt::Display for Transaction {
    /// Display the transaction as its hex-encoded serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
