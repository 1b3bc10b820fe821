//! Value containers carried through TLLV blocks
//!
//! These hold bytes produced or consumed by the crypto layer. They do no
//! encryption or parsing themselves.

use bytes::Bytes;

use crate::tllv::{KnownTag, TllvBlock};

/// Session key block from an SPC: the TLLV block plus its IV and payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkR1Block {
    pub block: TllvBlock,
    pub iv: Bytes,
    pub payload: Bytes,
}

/// Decrypted contents of the session key block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecryptedSkR1Payload {
    /// Session key
    pub sk: Bytes,
    /// Host identifier
    pub hu: Bytes,
    pub r1: Bytes,
    pub integrity_bytes: Bytes,
}

/// R1 nonce returned to the client in the CKC
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CkcR1 {
    pub r1: Bytes,
}

/// IV of the encrypted CKC payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CkcDataIv {
    pub iv: Bytes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CkcEncryptedPayload {
    pub payload: Bytes,
}

impl From<CkcR1> for TllvBlock {
    fn from(record: CkcR1) -> Self {
        TllvBlock::new(KnownTag::R1, record.r1)
    }
}
