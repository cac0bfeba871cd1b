use neo_primitives::PrimitivesError;

/// Error types for transaction operations.
///
/// Decoding failures name the field that was being read so a caller can
/// tell where a malformed buffer went wrong. Encoding and hashing never
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    /// The buffer ended inside a fixed-width field.
    #[error("truncated input reading {context}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A length or count prefix declares more data than the buffer holds.
    #[error("malformed length reading {context}: declared {declared}, {remaining} bytes remaining")]
    MalformedLength {
        context: &'static str,
        declared: u64,
        remaining: usize,
    },

    /// A length or count prefix is above the configured limit.
    #[error("{context}: declared length {declared} exceeds limit {max}")]
    LimitExceeded {
        context: &'static str,
        declared: u64,
        max: u64,
    },

    /// A VarInt used a wider encoding than its value needs.
    #[error("non-canonical varint reading {context}")]
    NonCanonicalVarInt { context: &'static str },

    /// The leading type byte is not a known transaction type.
    #[error("unknown transaction type: 0x{0:02x}")]
    UnknownVariant(u8),

    /// The exclusive data holds a field the requested version cannot encode.
    #[error("version {version} cannot encode this payload, needs version {required}")]
    VersionTooLow { version: u8, required: u8 },

    #[error("invalid attribute usage: 0x{0:02x}")]
    InvalidAttributeUsage(u8),

    /// An attribute payload does not fit the rule of its usage tag.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("invalid ec point prefix: 0x{0:02x}")]
    InvalidEcPoint(u8),

    #[error("invalid asset type: 0x{0:02x}")]
    InvalidAssetType(u8),

    #[error("invalid state descriptor type: 0x{0:02x}")]
    InvalidStateType(u8),

    #[error("invalid boolean byte: 0x{0:02x}")]
    InvalidBoolean(u8),

    #[error("invalid utf-8 reading {context}")]
    InvalidUtf8 { context: &'static str },

    #[error("trailing {0} bytes after transaction")]
    TrailingBytes(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An underlying primitives error not tied to a decode field.
    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

impl TransactionError {
    /// Return `true` if the input ended before a declared field did.
    ///
    /// Both a short fixed-width read and a length prefix pointing past the
    /// end of the buffer count as truncation.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            TransactionError::Truncated { .. } | TransactionError::MalformedLength { .. }
        )
    }

    /// Attach the name of the field being read to a reader error.
    pub(crate) fn reading(context: &'static str, err: PrimitivesError) -> Self {
        match err {
            PrimitivesError::UnexpectedEof { needed, remaining } => TransactionError::Truncated {
                context,
                needed,
                remaining,
            },
            PrimitivesError::LengthOverflow {
                declared,
                remaining,
            } => TransactionError::MalformedLength {
                context,
                declared,
                remaining,
            },
            PrimitivesError::LengthExceedsLimit { declared, max } => {
                TransactionError::LimitExceeded {
                    context,
                    declared,
                    max,
                }
            }
            PrimitivesError::NonCanonicalVarInt { .. } => {
                TransactionError::NonCanonicalVarInt { context }
            }
            PrimitivesError::InvalidUtf8(_) => TransactionError::InvalidUtf8 { context },
            other => TransactionError::Primitives(other),
        }
    }
}

/// Build a `map_err` adapter that tags reader errors with a field name.
pub(crate) fn at(context: &'static str) -> impl Fn(PrimitivesError) -> TransactionError {
    move |err| TransactionError::reading(context, err)
}
