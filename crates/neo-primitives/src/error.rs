/// Unified error type for all primitives operations.
///
/// Covers errors from binary reading, hash parsing, and mnemonic handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    /// Fewer bytes remain than a fixed-width field requires.
    #[error("unexpected end of data: need {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A decoded length or count points past the end of the buffer.
    #[error("declared length {declared} exceeds the {remaining} remaining bytes")]
    LengthOverflow { declared: u64, remaining: usize },

    /// A decoded length or count is larger than the caller allows.
    #[error("declared length {declared} exceeds limit {max}")]
    LengthExceedsLimit { declared: u64, max: u64 },

    /// A VarInt was encoded in a wider class than its value needs.
    #[error("non-canonical varint: value {value} encoded in {length} bytes")]
    NonCanonicalVarInt { value: u64, length: usize },

    #[error("invalid utf-8 string: {0}")]
    InvalidUtf8(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
