//! Decoding limits with protocol defaults.

/// Most attributes a transaction may carry.
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Default bound for element counts and byte strings.
pub const MAX_ARRAY_SIZE: usize = 0x0100_0000;
/// Most outputs a transaction may carry.
pub const MAX_OUTPUTS: usize = u16::MAX as usize + 1;
/// Longest script an invocation transaction may carry.
pub const MAX_INVOCATION_SCRIPT_SIZE: usize = 65536;
/// Most descriptors a state transaction may carry.
pub const MAX_STATE_DESCRIPTORS: usize = 16;
/// Longest asset name, in bytes.
pub const MAX_ASSET_NAME: usize = 1024;
/// Longest state descriptor key.
pub const MAX_STATE_KEY: usize = 100;
/// Longest state descriptor field name.
pub const MAX_STATE_FIELD: usize = 32;
/// Longest state descriptor value.
pub const MAX_STATE_VALUE: usize = u16::MAX as usize;
/// Longest contract name, version, author or email.
pub const MAX_CONTRACT_METADATA: usize = 252;
/// Longest contract description.
pub const MAX_CONTRACT_DESCRIPTION: usize = 65536;

/// Upper bounds applied while decoding untrusted bytes.
///
/// Lengths and counts above these bounds fail with `LimitExceeded` before
/// anything is allocated. Independently of the limits, a declared length
/// that runs past the end of the buffer always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_attributes: usize,
    pub max_inputs: usize,
    pub max_outputs: usize,
    pub max_witnesses: usize,
    pub max_var_bytes: usize,
    pub max_invocation_script: usize,
    pub max_state_descriptors: usize,
    pub max_asset_name: usize,
    pub max_state_key: usize,
    pub max_state_field: usize,
    pub max_state_value: usize,
    pub max_contract_metadata: usize,
    pub max_contract_description: usize,
}

impl Limits {
    /// Limits enforced by the network.
    pub const fn standard() -> Self {
        Limits {
            max_attributes: MAX_TRANSACTION_ATTRIBUTES,
            max_inputs: MAX_ARRAY_SIZE,
            max_outputs: MAX_OUTPUTS,
            max_witnesses: MAX_ARRAY_SIZE,
            max_var_bytes: MAX_ARRAY_SIZE,
            max_invocation_script: MAX_INVOCATION_SCRIPT_SIZE,
            max_state_descriptors: MAX_STATE_DESCRIPTORS,
            max_asset_name: MAX_ASSET_NAME,
            max_state_key: MAX_STATE_KEY,
            max_state_field: MAX_STATE_FIELD,
            max_state_value: MAX_STATE_VALUE,
            max_contract_metadata: MAX_CONTRACT_METADATA,
            max_contract_description: MAX_CONTRACT_DESCRIPTION,
        }
    }

    /// No count or length limits beyond the size of the buffer itself.
    pub const fn unbounded() -> Self {
        Limits {
            max_attributes: usize::MAX,
            max_inputs: usize::MAX,
            max_outputs: usize::MAX,
            max_witnesses: usize::MAX,
            max_var_bytes: usize::MAX,
            max_invocation_script: usize::MAX,
            max_state_descriptors: usize::MAX,
            max_asset_name: usize::MAX,
            max_state_key: usize::MAX,
            max_state_field: usize::MAX,
            max_state_value: usize::MAX,
            max_contract_metadata: usize::MAX,
            max_contract_description: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}

/// Widen a `usize` limit for comparison against a decoded VarInt.
pub(crate) fn bound(limit: usize) -> u64 {
    u64::try_from(limit).unwrap_or(u64::MAX)
}
