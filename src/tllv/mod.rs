//! TLLV Module
//!
//! Tag-Length-Length-Value framing for values carried in a CKC.
//!
//! ## Block Format
//! ```text
//! ┌──────────┬─────────────┬─────────────┬─────────────┬───────────────┐
//! │ Tag (8)  │ BlockLen (4)│ ValueLen (4)│    Value    │    Padding    │
//! └──────────┴─────────────┴─────────────┴─────────────┴───────────────┘
//! ```
//!
//! - All integers are big-endian
//! - BlockLen = ValueLen + PaddingLen
//! - PaddingLen = 32 - (ValueLen % 16), always in 17..=32
//! - Padding is random and regenerated on every serialization

mod block;
mod codec;
pub mod tag;

pub use block::{padding_length, TllvBlock};
pub use codec::{decode_block, read_block, write_block, BlockHeader, DecodedBlock};
pub use tag::{parse_tag, KnownTag};

/// Width of the tag field
pub const TAG_FIELD_LENGTH: usize = 8;

/// Width of the block length field
pub const BLOCK_LENGTH_FIELD_LENGTH: usize = 4;

/// Width of the value length field
pub const VALUE_LENGTH_FIELD_LENGTH: usize = 4;

/// Header size: tag + block length + value length
pub const HEADER_SIZE: usize =
    TAG_FIELD_LENGTH + BLOCK_LENGTH_FIELD_LENGTH + VALUE_LENGTH_FIELD_LENGTH;

/// Values are padded to a multiple of this
pub const PADDING_ALIGNMENT: usize = 16;

/// Padding for a value whose length is a multiple of 16
pub const MAX_PADDING_LENGTH: usize = 32;

/// Smallest padding any value receives
pub const MIN_PADDING_LENGTH: usize = MAX_PADDING_LENGTH - (PADDING_ALIGNMENT - 1);
