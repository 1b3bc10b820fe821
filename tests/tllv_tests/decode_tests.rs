//! Tests for structural TLLV decoding
//!
//! These tests verify:
//! - Serialized blocks decode back to their tag and value
//! - Truncated and inconsistent headers are rejected
//! - Stream read/write helpers

use std::io::Cursor;

use ksm_tllv::tllv::{
    decode_block, read_block, write_block, BlockHeader, KnownTag, TllvBlock, HEADER_SIZE,
};
use ksm_tllv::{Config, TllvError};

fn header_bytes(tag: u64, block_length: u32, value_length: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE);
    bytes.extend_from_slice(&tag.to_be_bytes());
    bytes.extend_from_slice(&block_length.to_be_bytes());
    bytes.extend_from_slice(&value_length.to_be_bytes());
    bytes
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_decode_serialized_block() {
    let block = TllvBlock::new(KnownTag::AssetId, b"movie-12345".to_vec());
    let bytes = block.serialize().unwrap();

    let (decoded, consumed) = decode_block(&bytes, &Config::default()).unwrap();

    assert_eq!(consumed, bytes.len());
    assert_eq!(decoded.header.tag, KnownTag::AssetId.value());
    assert_eq!(decoded.header.value_length, 11);
    assert_eq!(decoded.header.block_length, 11 + 21);
    assert_eq!(&decoded.value[..], b"movie-12345");
    assert_eq!(decoded.known_tag(), Some(KnownTag::AssetId));
}

#[test]
fn test_decode_empty_value() {
    let block = TllvBlock::new(KnownTag::StreamingIndicator, Vec::<u8>::new());
    let bytes = block.serialize().unwrap();

    let (decoded, consumed) = decode_block(&bytes, &Config::default()).unwrap();
    assert_eq!(consumed, 48);
    assert!(decoded.value.is_empty());
    assert_eq!(decoded.header.padding_length(), Some(32));
}

#[test]
fn test_decode_unknown_tag() {
    let block = TllvBlock::new(0xDEADBEEFu64, vec![9u8; 40]);
    let bytes = block.serialize().unwrap();

    let (decoded, _) = decode_block(&bytes, &Config::default()).unwrap();
    assert_eq!(decoded.header.tag, 0xDEADBEEF);
    assert_eq!(decoded.known_tag(), None);
}

#[test]
fn test_decode_leaves_trailing_bytes() {
    let first = TllvBlock::new(KnownTag::R1, vec![1u8; 44]).serialize().unwrap();
    let mut bytes = first.to_vec();
    bytes.extend_from_slice(b"trailing");

    let (decoded, consumed) = decode_block(&bytes, &Config::default()).unwrap();
    assert_eq!(consumed, first.len());
    assert_eq!(&bytes[consumed..], b"trailing");
    assert_eq!(decoded.value.len(), 44);
}

#[test]
fn test_decoded_into_block() {
    let original = TllvBlock::new(KnownTag::KeyDuration, vec![0u8, 0, 0x0e, 0x10]);
    let bytes = original.serialize().unwrap();

    let (decoded, _) = decode_block(&bytes, &Config::default()).unwrap();
    assert_eq!(decoded.into_block(), original);
}

// =============================================================================
// Header Tests
// =============================================================================

#[test]
fn test_header_parse() {
    let header = BlockHeader::parse(&header_bytes(0x1122334455667788, 48, 17)).unwrap();
    assert_eq!(header.tag, 0x1122334455667788);
    assert_eq!(header.block_length, 48);
    assert_eq!(header.value_length, 17);
    assert_eq!(header.encoded_len(), 64);
}

#[test]
fn test_header_too_short() {
    let result = BlockHeader::parse(&[0u8; HEADER_SIZE - 1]);
    assert!(matches!(result, Err(TllvError::Protocol(_))));
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_decode_truncated_block() {
    let bytes = TllvBlock::new(KnownTag::R2, vec![3u8; 10]).serialize().unwrap();
    let result = decode_block(&bytes[..bytes.len() - 1], &Config::default());

    match result {
        Err(TllvError::Protocol(msg)) => assert!(msg.contains("Incomplete block")),
        other => panic!("Expected Protocol error, got {:?}", other),
    }
}

#[test]
fn test_decode_value_longer_than_block() {
    let mut bytes = header_bytes(1, 16, 32);
    bytes.extend_from_slice(&[0u8; 32]);

    let result = decode_block(&bytes, &Config::default());
    assert!(matches!(result, Err(TllvError::Protocol(_))));
}

#[test]
fn test_decode_bad_padding_length() {
    // 4-byte value with 12 bytes of padding instead of 28
    let mut bytes = header_bytes(1, 16, 4);
    bytes.extend_from_slice(&[0u8; 16]);

    assert!(matches!(
        decode_block(&bytes, &Config::default()),
        Err(TllvError::Protocol(_))
    ));

    let lenient = Config::builder().strict_padding(false).try_build().unwrap();
    let (decoded, consumed) = decode_block(&bytes, &lenient).unwrap();
    assert_eq!(consumed, 32);
    assert_eq!(decoded.value.len(), 4);
}

#[test]
fn test_decode_block_over_limit() {
    let config = Config::builder().max_block_length(64).try_build().unwrap();
    let bytes = TllvBlock::new(KnownTag::EncryptedContentKey, vec![0u8; 64])
        .serialize()
        .unwrap();

    match decode_block(&bytes, &config) {
        Err(TllvError::Protocol(msg)) => assert!(msg.contains("too large")),
        other => panic!("Expected Protocol error, got {:?}", other),
    }
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_write_then_read_stream() {
    let blocks = [
        TllvBlock::new(KnownTag::ProtocolVersionUsed, vec![0u8, 0, 0, 1]),
        TllvBlock::new(KnownTag::AssetId, b"asset-001".to_vec()),
        TllvBlock::new(KnownTag::HdcpEnforcement, Vec::<u8>::new()),
    ];

    let mut buffer: Vec<u8> = Vec::new();
    for block in &blocks {
        write_block(&mut buffer, block).unwrap();
    }

    let expected_len: usize = blocks.iter().map(|b| b.encoded_len()).sum();
    assert_eq!(buffer.len(), expected_len);

    let mut cursor = Cursor::new(buffer);
    for block in &blocks {
        let decoded = read_block(&mut cursor, &Config::default()).unwrap();
        assert_eq!(decoded.header.tag, block.tag());
        assert_eq!(&decoded.value[..], block.value());
    }
}

#[test]
fn test_read_truncated_stream() {
    let bytes = TllvBlock::new(KnownTag::R1, vec![5u8; 8]).serialize().unwrap();
    let mut cursor = Cursor::new(bytes[..bytes.len() - 3].to_vec());

    let result = read_block(&mut cursor, &Config::default());
    assert!(matches!(result, Err(TllvError::Io(_))));
}
