//! The serialization contract shared by every wire-format type.

use neo_primitives::util::{BinaryReader, BinaryWriter, VarInt};

use crate::error::at;
use crate::limits::{bound, Limits};
use crate::TransactionError;

/// A value with an exact, deterministic binary encoding.
///
/// Implementors guarantee `size() == to_bytes().len()` and that
/// `read_from` reconstructs an equal value from `write_to`'s output.
/// Decoding never reads past the end of the reader's buffer.
pub trait Serializable: Sized {
    /// Exact encoded length in bytes.
    fn size(&self) -> usize;

    /// Append the encoding to `writer`.
    fn write_to(&self, writer: &mut BinaryWriter);

    /// Decode one value from `reader`, advancing it past the value.
    fn read_from(reader: &mut BinaryReader<'_>, limits: &Limits) -> Result<Self, TransactionError>;

    /// Encode into a fresh byte vector.
    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.write_to(&mut writer);
        writer.into_bytes()
    }

    /// Decode a value that must span all of `data`.
    fn from_bytes(data: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = BinaryReader::new(data);
        let value = Self::read_from(&mut reader, &Limits::standard())?;
        if reader.remaining() != 0 {
            return Err(TransactionError::TrailingBytes(reader.remaining()));
        }
        Ok(value)
    }

    /// Decode a value starting at `pos`.
    ///
    /// # Returns
    /// The value and the position just past its last byte.
    fn deserialize_at(data: &[u8], pos: usize) -> Result<(Self, usize), TransactionError> {
        let mut reader = BinaryReader::at(data, pos).map_err(at("start position"))?;
        let value = Self::read_from(&mut reader, &Limits::standard())?;
        Ok((value, reader.position()))
    }
}

/// Encoded size of a VarInt count followed by each item.
pub(crate) fn array_size<T: Serializable>(items: &[T]) -> usize {
    VarInt::from(items.len()).length() + items.iter().map(Serializable::size).sum::<usize>()
}

pub(crate) fn write_array<T: Serializable>(writer: &mut BinaryWriter, items: &[T]) {
    writer.write_varint(VarInt::from(items.len()));
    for item in items {
        item.write_to(writer);
    }
}

/// Read a VarInt count of at most `max` items, then each item.
pub(crate) fn read_array<T: Serializable>(
    reader: &mut BinaryReader<'_>,
    limits: &Limits,
    max: usize,
    context: &'static str,
) -> Result<Vec<T>, TransactionError> {
    let count = reader.read_length(bound(max)).map_err(at(context))?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(T::read_from(reader, limits)?);
    }
    Ok(items)
}

/// Read a VarInt-prefixed byte string bounded by `max` and the buffer.
pub(crate) fn read_var_bytes(
    reader: &mut BinaryReader<'_>,
    max: usize,
    context: &'static str,
) -> Result<Vec<u8>, TransactionError> {
    reader
        .read_var_bytes(bound(max))
        .map(<[u8]>::to_vec)
        .map_err(at(context))
}

pub(crate) fn read_var_string(
    reader: &mut BinaryReader<'_>,
    max: usize,
    context: &'static str,
) -> Result<String, TransactionError> {
    reader.read_var_string(bound(max)).map_err(at(context))
}

/// Read a boolean byte, accepting only 0x00 and 0x01.
pub(crate) fn read_bool(
    reader: &mut BinaryReader<'_>,
    context: &'static str,
) -> Result<bool, TransactionError> {
    match reader.read_u8().map_err(at(context))? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(TransactionError::InvalidBoolean(other)),
    }
}
