//! TLLV block construction and serialization

use bytes::{BufMut, Bytes, BytesMut};
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::error::{Result, TllvError};
use super::{HEADER_SIZE, MAX_PADDING_LENGTH, PADDING_ALIGNMENT};

/// Padding length for a value of `value_length` bytes
///
/// Rounds up to the next 16-byte boundary and adds another 16 bytes, so the
/// result is always in `17..=32`. A multiple of 16 gets the full 32.
pub fn padding_length(value_length: usize) -> usize {
    MAX_PADDING_LENGTH - value_length % PADDING_ALIGNMENT
}

/// A tagged value ready to be framed as TLLV
///
/// Lengths are derived from the value at construction and cannot be set
/// independently. Padding content is generated fresh on each serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TllvBlock {
    tag: u64,
    block_length: usize,
    value_length: usize,
    value: Bytes,
}

impl TllvBlock {
    /// Construct a block. Accepts any tag and any value, including empty.
    pub fn new(tag: impl Into<u64>, value: impl Into<Bytes>) -> Self {
        let value = value.into();
        let value_length = value.len();

        Self {
            tag: tag.into(),
            block_length: value_length + padding_length(value_length),
            value_length,
            value,
        }
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Value plus padding, as written to the block length field
    pub fn block_length(&self) -> usize {
        self.block_length
    }

    pub fn value_length(&self) -> usize {
        self.value_length
    }

    pub fn padding_length(&self) -> usize {
        self.block_length - self.value_length
    }

    /// Total bytes `serialize` will emit
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.block_length
    }

    /// Consume the block, returning its value
    pub fn into_value(self) -> Bytes {
        self.value
    }

    /// Serialize with padding drawn from the OS random source
    pub fn serialize(&self) -> Result<Bytes> {
        self.serialize_with(&mut OsRng)
    }

    /// Serialize with padding drawn from `rng`
    ///
    /// Layout (big-endian): tag (8) + block_length (4) + value_length (4) +
    /// value + padding. Fails without output if `rng` cannot fill the padding.
    pub fn serialize_with<R>(&self, rng: &mut R) -> Result<Bytes>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        // Lengths come from the live value, not the cached fields
        let value_length = self.value.len();
        let pad_len = padding_length(value_length);
        let (block_length_field, value_length_field) = wire_lengths(value_length)?;

        let mut padding = [0u8; MAX_PADDING_LENGTH];
        let padding = &mut padding[..pad_len];
        if let Err(e) = rng.try_fill_bytes(padding) {
            tracing::warn!(
                tag = self.tag,
                "Random source failed while padding TLLV block: {}",
                e
            );
            return Err(e.into());
        }

        let mut out = BytesMut::with_capacity(HEADER_SIZE + value_length + pad_len);
        out.put_u64(self.tag);
        out.put_u32(block_length_field);
        out.put_u32(value_length_field);
        out.put_slice(&self.value);
        out.put_slice(padding);

        tracing::trace!(
            tag = self.tag,
            value_length,
            padding_length = pad_len,
            "Serialized TLLV block"
        );

        Ok(out.freeze())
    }
}

/// Wire values of (block_length, value_length) for a value of this size
fn wire_lengths(value_length: usize) -> Result<(u32, u32)> {
    let block_length = value_length
        .checked_add(padding_length(value_length))
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(TllvError::ValueTooLarge { len: value_length })?;

    // block_length fits, so value_length does too
    Ok((block_length, value_length as u32))
}
