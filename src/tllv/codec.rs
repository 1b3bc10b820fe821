//! TLLV decoding and stream helpers
//!
//! The decoder is structural: it reads the header, checks the lengths and
//! returns the value. Padding bytes are skipped unread.

use std::io::{Read, Write};

use bytes::{Buf, Bytes};

use crate::config::Config;
use crate::error::{Result, TllvError};
use super::{padding_length, KnownTag, TllvBlock, HEADER_SIZE};

/// Fixed-width header of a serialized block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub tag: u64,
    pub block_length: u32,
    pub value_length: u32,
}

impl BlockHeader {
    /// Parse the 16-byte header at the start of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(TllvError::Protocol(format!(
                "Incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut buf = &bytes[..HEADER_SIZE];
        Ok(Self {
            tag: buf.get_u64(),
            block_length: buf.get_u32(),
            value_length: buf.get_u32(),
        })
    }

    /// Padding bytes announced by the header
    pub fn padding_length(&self) -> Option<u32> {
        self.block_length.checked_sub(self.value_length)
    }

    /// Header plus block bytes
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.block_length as usize
    }

    /// Check the announced lengths against `config`
    pub fn validate(&self, config: &Config) -> Result<()> {
        if self.block_length > config.max_block_length {
            return Err(TllvError::Protocol(format!(
                "Block too large: {} bytes (max {})",
                self.block_length, config.max_block_length
            )));
        }

        let padding = self.padding_length().ok_or_else(|| {
            TllvError::Protocol(format!(
                "Value length {} exceeds block length {}",
                self.value_length, self.block_length
            ))
        })?;

        if config.strict_padding {
            let expected = padding_length(self.value_length as usize);
            if padding as usize != expected {
                return Err(TllvError::Protocol(format!(
                    "Bad padding length: {} bytes for a {}-byte value (expected {})",
                    padding, self.value_length, expected
                )));
            }
        }

        Ok(())
    }
}

/// A block recovered from the wire, padding discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub header: BlockHeader,
    pub value: Bytes,
}

impl DecodedBlock {
    pub fn known_tag(&self) -> Option<KnownTag> {
        KnownTag::from_value(self.header.tag)
    }

    /// Rebuild an encodable block from the recovered tag and value
    pub fn into_block(self) -> TllvBlock {
        TllvBlock::new(self.header.tag, self.value)
    }
}

/// Decode one block from the start of `bytes`
///
/// Returns the block and the number of bytes consumed. Trailing bytes
/// after the block are left to the caller.
pub fn decode_block(bytes: &[u8], config: &Config) -> Result<(DecodedBlock, usize)> {
    let header = BlockHeader::parse(bytes)?;
    if let Err(e) = header.validate(config) {
        tracing::debug!(tag = header.tag, "Rejected TLLV header: {}", e);
        return Err(e);
    }

    let total_len = header.encoded_len();
    if bytes.len() < total_len {
        return Err(TllvError::Protocol(format!(
            "Incomplete block: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let value_end = HEADER_SIZE + header.value_length as usize;
    let value = Bytes::copy_from_slice(&bytes[HEADER_SIZE..value_end]);

    Ok((DecodedBlock { header, value }, total_len))
}

/// Read a complete block from a stream
///
/// Blocks until the whole block, padding included, has been read.
pub fn read_block<R: Read>(reader: &mut R, config: &Config) -> Result<DecodedBlock> {
    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;

    let header = BlockHeader::parse(&header_bytes)?;
    if let Err(e) = header.validate(config) {
        tracing::debug!(tag = header.tag, "Rejected TLLV header: {}", e);
        return Err(e);
    }

    let mut body = vec![0u8; header.block_length as usize];
    reader.read_exact(&mut body)?;
    body.truncate(header.value_length as usize);

    Ok(DecodedBlock {
        header,
        value: Bytes::from(body),
    })
}

/// Serialize a block with fresh padding and write it to a stream
pub fn write_block<W: Write>(writer: &mut W, block: &TllvBlock) -> Result<()> {
    let bytes = block.serialize()?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
