//! Tests for the neo-transaction crate.
//!
//! Covers fixed wire vectors, serialization roundtrips for every
//! transaction type, hash stability under witness attachment, and
//! rejection of truncated, oversized, and unknown input.

use neo_primitives::chainhash::{Hash, ScriptHash};
use num_bigint::BigUint;

use crate::attribute::{AttributeUsage, TransactionAttribute};
use crate::coin_reference::CoinReference;
use crate::ecpoint::EcPoint;
use crate::exclusive::{
    AssetType, ClaimData, EnrollmentData, ExclusiveData, InvocationData, MinerData, PublishData,
    RegisterData, StateData, StateDescriptor, StateType,
};
use crate::fixed8::Fixed8;
use crate::limits::Limits;
use crate::output::TransactionOutput;
use crate::serializable::Serializable;
use crate::transaction::Transaction;
use crate::transaction_type::TransactionType;
use crate::witness::Witness;
use crate::TransactionError;

// -----------------------------------------------------------------------
// Fixed vectors
// -----------------------------------------------------------------------

/// Contract transaction: one input, one output of 1.0, no witnesses.
const CONTRACT_TX_HEX: &str = "800000011111111111111111111111111111111111111111111111111111111111111111010001222222222222222222222222222222222222222222222222222222222222222200e1f50500000000333333333333333333333333333333333333333300";

/// `CONTRACT_TX_HEX` with one witness attached.
const CONTRACT_TX_SIGNED_HEX: &str = "800000011111111111111111111111111111111111111111111111111111111111111111010001222222222222222222222222222222222222222222222222222222222222222200e1f5050000000033333333333333333333333333333333333333330102404101ac";

const CONTRACT_TX_ID: &str = "5b60503961f01282bd5921d1f5b559bab65b5a2de50ae305b22b8a15c56a9677";

/// Raw (unreversed) digest of the contract transaction.
const CONTRACT_TX_DIGEST: &str = "77966ac5158a2bb205e30ae52d5a5bb6ba59b5f5d12159bd8212f0613950605b";

const MINER_TX_HEX: &str = "00000000000403020100";
const MINER_TX_ID: &str = "4dbf9936edaef3b7c0e257a86f0b3fe0a90e05de1617c273b7737768813f26ee";

/// Version 1 invocation of script `51` paying 1.5 gas.
const INVOCATION_TX_HEX: &str = "d101000000015180d1f0080000000000";
const INVOCATION_TX_ID: &str = "dedbe5184517cca3292df7e797794b2398c9a77dbd62903c658613004721756f";

fn contract_tx() -> Transaction {
    let mut tx = Transaction::contract();
    tx.add_input(CoinReference::new(Hash::new([0x11; 32]), 1));
    tx.add_output(TransactionOutput::new(
        Hash::new([0x22; 32]),
        Fixed8(100_000_000),
        ScriptHash::new([0x33; 20]),
    ));
    tx
}

fn witness() -> Witness {
    Witness::new(vec![0x40, 0x41], vec![0xac])
}

/// One populated transaction per type, each with a shared envelope.
fn sample_transactions() -> Vec<Transaction> {
    let mut key = vec![0x02];
    key.extend_from_slice(&[0x7e; 32]);
    let public_key = EcPoint::from_bytes(&key).expect("valid compressed key");

    let payloads = vec![
        ExclusiveData::Miner(MinerData { nonce: 0xdead_beef }),
        ExclusiveData::Issue,
        ExclusiveData::Claim(ClaimData {
            claims: vec![CoinReference::new(Hash::new([0x44; 32]), 3)],
        }),
        ExclusiveData::Enrollment(EnrollmentData {
            public_key: public_key.clone(),
        }),
        ExclusiveData::Register(RegisterData {
            asset_type: AssetType::Share,
            name: "share".to_string(),
            amount: Fixed8(1_000 * 100_000_000),
            precision: 0,
            owner: public_key,
            admin: ScriptHash::new([0x55; 20]),
        }),
        ExclusiveData::Contract,
        ExclusiveData::State(StateData {
            descriptors: vec![StateDescriptor {
                state_type: StateType::Validator,
                key: key.clone(),
                field: "Registered".to_string(),
                value: vec![0x01],
            }],
        }),
        ExclusiveData::Publish(PublishData {
            script: vec![0x51, 0x66],
            parameter_list: vec![0x05],
            return_type: 0x01,
            need_storage: true,
            name: "Adder".to_string(),
            code_version: "2".to_string(),
            author: "ops".to_string(),
            email: String::new(),
            description: "adds".to_string(),
        }),
        ExclusiveData::Invocation(InvocationData {
            script: vec![0x00, 0xc1, 0x04],
            gas: Fixed8(5),
        }),
    ];

    payloads
        .into_iter()
        .map(|exclusive| {
            let mut tx = Transaction::new(exclusive);
            tx.set_version(1).expect("version 1 encodes every payload");
            tx.add_attribute(TransactionAttribute::remark(b"memo".to_vec()).expect("short remark"));
            tx.add_attribute(
                TransactionAttribute::new(AttributeUsage::Script, vec![0x66; 20])
                    .expect("20 byte script hash"),
            );
            tx.add_input(CoinReference::new(Hash::new([0x77; 32]), 0));
            tx.add_output(TransactionOutput::new(
                Hash::new([0x88; 32]),
                Fixed8(42),
                ScriptHash::new([0x99; 20]),
            ));
            tx.add_witness(witness());
            tx
        })
        .collect()
}

// -----------------------------------------------------------------------
// Serialization
// -----------------------------------------------------------------------

#[test]
fn test_contract_vector() {
    let tx = contract_tx();
    assert_eq!(tx.to_hex(), CONTRACT_TX_HEX);
    assert_eq!(tx.to_string(), CONTRACT_TX_HEX);
    assert_eq!(tx.size(), CONTRACT_TX_HEX.len() / 2);
    assert!(!tx.is_signed());

    let parsed = Transaction::from_hex(CONTRACT_TX_HEX).expect("should parse contract tx");
    assert_eq!(parsed, tx);
    assert_eq!(parsed.tx_type(), TransactionType::Contract);
    assert_eq!(parsed.version(), 0);
}

#[test]
fn test_miner_and_invocation_vectors() {
    let miner = Transaction::miner(0x0403_0201);
    assert_eq!(miner.to_hex(), MINER_TX_HEX);
    assert_eq!(miner.tx_id_hex(), MINER_TX_ID);
    assert_eq!(Transaction::from_hex(MINER_TX_HEX).unwrap(), miner);

    let invocation = Transaction::invocation(vec![0x51], Fixed8(150_000_000));
    assert_eq!(invocation.version(), 1);
    assert_eq!(invocation.to_hex(), INVOCATION_TX_HEX);
    assert_eq!(invocation.tx_id_hex(), INVOCATION_TX_ID);
    assert_eq!(Transaction::from_hex(INVOCATION_TX_HEX).unwrap(), invocation);
}

/// Every type survives encode/decode and reports an exact size.
#[test]
fn test_roundtrip_every_type() {
    let txs = sample_transactions();
    let types: Vec<TransactionType> = txs.iter().map(Transaction::tx_type).collect();
    assert_eq!(types, TransactionType::ALL.to_vec());

    for tx in txs {
        let bytes = tx.to_bytes();
        assert_eq!(bytes.len(), tx.size(), "size mismatch for {}", tx.tx_type());
        assert_eq!(bytes[0], tx.tx_type().to_byte());
        assert_eq!(bytes[1], 1);

        let decoded = Transaction::from_bytes(&bytes)
            .unwrap_or_else(|e| panic!("{} should decode: {}", tx.tx_type(), e));
        assert_eq!(decoded, tx);
        assert_eq!(decoded.to_bytes(), bytes);
    }
}

#[test]
fn test_serialization_is_deterministic() {
    for tx in sample_transactions() {
        assert_eq!(tx.to_bytes(), tx.clone().to_bytes());
        assert_eq!(tx.hash(), tx.hash());
    }
}

#[test]
fn test_deserialize_at_offset() {
    let mut buf = vec![0xee, 0xee, 0xee];
    buf.extend_from_slice(&hex::decode(MINER_TX_HEX).unwrap());
    buf.push(0xff);

    let (tx, end) = Transaction::deserialize_at(&buf, 3).expect("should decode at offset");
    assert_eq!(tx, Transaction::miner(0x0403_0201));
    assert_eq!(end, buf.len() - 1);
}

// -----------------------------------------------------------------------
// Version-gated fields
// -----------------------------------------------------------------------

/// A gas fee set by the caller is always on the wire and under the hash.
#[test]
fn test_invocation_gas_survives_roundtrip() {
    let tx = Transaction::new(ExclusiveData::Invocation(InvocationData {
        script: vec![0x51],
        gas: Fixed8(100_000_000),
    }));
    assert_eq!(tx.version(), 1);

    let back = Transaction::from_bytes(&tx.to_bytes()).unwrap();
    assert_eq!(back, tx);

    let free = Transaction::invocation(vec![0x51], Fixed8::ZERO);
    assert_ne!(tx.hash(), free.hash());
}

#[test]
fn test_set_version_keeps_gated_fields_encodable() {
    let mut tx = Transaction::invocation(vec![0x51], Fixed8(1));
    assert_eq!(
        tx.set_version(0).unwrap_err(),
        TransactionError::VersionTooLow { version: 0, required: 1 }
    );
    assert_eq!(tx.version(), 1);
    tx.set_version(2).unwrap();
    assert_eq!(Transaction::from_bytes(&tx.to_bytes()).unwrap(), tx);

    let mut publish = Transaction::new(ExclusiveData::Publish(PublishData {
        need_storage: true,
        ..PublishData::default()
    }));
    assert_eq!(publish.version(), 1);
    assert!(publish.set_version(0).is_err());
    assert_eq!(Transaction::from_bytes(&publish.to_bytes()).unwrap(), publish);

    // Without a gated value set, version 0 is allowed and round-trips.
    let mut free = Transaction::invocation(vec![0x51], Fixed8::ZERO);
    free.set_version(0).unwrap();
    assert_eq!(free.to_hex(), "d100000000015100");
    assert_eq!(Transaction::from_bytes(&free.to_bytes()).unwrap(), free);
}

// -----------------------------------------------------------------------
// Hash
// -----------------------------------------------------------------------

#[test]
fn test_hash_vector() {
    let tx = contract_tx();
    assert_eq!(tx.tx_id_hex(), CONTRACT_TX_ID);
    assert_eq!(hex::encode(tx.hash().as_bytes()), CONTRACT_TX_DIGEST);
    assert_eq!(tx.signable_bytes().len(), tx.size() - 1);
}

/// Attaching witnesses changes the bytes but never the hash.
#[test]
fn test_hash_ignores_witnesses() {
    let mut tx = contract_tx();
    let unsigned = tx.hash();
    tx.add_witness(witness());
    assert!(tx.is_signed());
    assert_eq!(tx.to_hex(), CONTRACT_TX_SIGNED_HEX);
    assert_eq!(tx.hash(), unsigned);

    tx.add_witness(Witness::new(vec![], vec![0x51]));
    assert_eq!(tx.witnesses().len(), 2);
    assert_eq!(tx.hash(), unsigned);
    assert_eq!(Transaction::from_bytes(&tx.to_bytes()).unwrap(), tx);
}

#[test]
fn test_hash_depends_on_signable_fields() {
    let base = contract_tx();
    let mut other = contract_tx();
    other.set_version(1).unwrap();
    assert_ne!(base.hash(), other.hash());

    let mut other = contract_tx();
    other.add_attribute(TransactionAttribute::remark(vec![0x01]).unwrap());
    assert_ne!(base.hash(), other.hash());
}

#[test]
fn test_hash_uint256_is_big_endian_digest() {
    let tx = contract_tx();
    let expected = BigUint::parse_bytes(CONTRACT_TX_DIGEST.as_bytes(), 16).unwrap();
    assert_eq!(tx.hash_uint256(), expected);
    assert_eq!(tx.hash_uint256().to_bytes_be(), tx.hash().to_vec());
}

// -----------------------------------------------------------------------
// Queries
// -----------------------------------------------------------------------

#[test]
fn test_references_include_claims() {
    let claim = CoinReference::new(Hash::new([0x01; 32]), 9);
    let input = CoinReference::new(Hash::new([0x02; 32]), 0);
    let mut tx = Transaction::claim(vec![claim]);
    tx.add_input(input);

    let refs: Vec<&CoinReference> = tx.references().collect();
    assert_eq!(refs, vec![&input, &claim]);
    assert_eq!(contract_tx().references().count(), 1);
}

#[test]
fn test_total_output() {
    let asset = Hash::new([0x22; 32]);
    let mut tx = contract_tx();
    tx.add_output(TransactionOutput::new(asset, Fixed8(50_000_000), ScriptHash::new([0; 20])));
    tx.add_output(TransactionOutput::new(
        Hash::new([0x23; 32]),
        Fixed8(7),
        ScriptHash::new([0; 20]),
    ));
    assert_eq!(tx.total_output(&asset), Some(Fixed8(150_000_000)));
    assert_eq!(tx.total_output(&Hash::new([0; 32])), Some(Fixed8::ZERO));

    tx.add_output(TransactionOutput::new(asset, Fixed8(i64::MAX), ScriptHash::new([0; 20])));
    assert_eq!(tx.total_output(&asset), None);
}

// -----------------------------------------------------------------------
// Malformed input
// -----------------------------------------------------------------------

/// Every strict prefix of a valid encoding fails as truncation.
#[test]
fn test_every_prefix_is_truncated() {
    for tx in sample_transactions() {
        let bytes = tx.to_bytes();
        for len in 0..bytes.len() {
            let err = Transaction::from_bytes(&bytes[..len]).unwrap_err();
            assert!(
                err.is_truncation(),
                "{} prefix of {} bytes gave {:?}",
                tx.tx_type(),
                len,
                err
            );
        }
    }
}

#[test]
fn test_unknown_type_byte() {
    let mut bytes = hex::decode(CONTRACT_TX_HEX).unwrap();
    bytes[0] = 0x81;
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        TransactionError::UnknownVariant(0x81)
    );
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = hex::decode(CONTRACT_TX_HEX).unwrap();
    bytes.extend_from_slice(&[0x00, 0x00]);
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        TransactionError::TrailingBytes(2)
    );
}

#[test]
fn test_invalid_hex() {
    assert!(matches!(
        Transaction::from_hex("80zz").unwrap_err(),
        TransactionError::InvalidHex(_)
    ));
}

/// An input count far beyond the buffer fails before allocating.
#[test]
fn test_oversized_count() {
    // contract, version 0, no attributes, input count 0xffffffff
    let bytes = hex::decode("800000feffffffff").unwrap();
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        TransactionError::LimitExceeded {
            context: "input count",
            declared: 0xffff_ffff,
            max: 0x0100_0000,
        }
    );

    let err = Transaction::from_bytes_with_limits(&bytes, &Limits::unbounded()).unwrap_err();
    assert_eq!(
        err,
        TransactionError::MalformedLength {
            context: "input count",
            declared: 0xffff_ffff,
            remaining: 0,
        }
    );
    assert!(err.is_truncation());
}

#[test]
fn test_attribute_limit() {
    let mut tx = contract_tx();
    for i in 0..17u8 {
        tx.add_attribute(TransactionAttribute::remark(vec![i]).unwrap());
    }
    let bytes = tx.to_bytes();
    let err = Transaction::from_bytes(&bytes).unwrap_err();
    assert_eq!(
        err,
        TransactionError::LimitExceeded { context: "attribute count", declared: 17, max: 16 }
    );

    let decoded = Transaction::from_bytes_with_limits(&bytes, &Limits::unbounded()).unwrap();
    assert_eq!(decoded, tx);
}

/// Per-field caps are limits too: an oversized descriptor key fails the
/// standard limits and round-trips without them.
#[test]
fn test_state_key_limit() {
    let state = |key_len: usize| {
        Transaction::new(ExclusiveData::State(StateData {
            descriptors: vec![StateDescriptor {
                state_type: StateType::Account,
                key: vec![0x23; key_len],
                field: "Votes".to_string(),
                value: vec![],
            }],
        }))
    };

    let at_limit = state(100);
    assert_eq!(Transaction::from_bytes(&at_limit.to_bytes()).unwrap(), at_limit);

    let over = state(101);
    let bytes = over.to_bytes();
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        TransactionError::LimitExceeded { context: "state key", declared: 101, max: 100 }
    );
    let decoded = Transaction::from_bytes_with_limits(&bytes, &Limits::unbounded()).unwrap();
    assert_eq!(decoded, over);
}

#[test]
fn test_non_canonical_count() {
    // attribute count 0 written as fd 00 00
    let bytes = hex::decode("8000fd0000000000").unwrap();
    assert_eq!(
        Transaction::from_bytes(&bytes).unwrap_err(),
        TransactionError::NonCanonicalVarInt { context: "attribute count" }
    );
}
