//! Known TLLV tags
//!
//! Tags are opaque to the codec. These are the well-known values of the
//! SPC/CKC exchange, kept here so callers and tooling agree on them.

use std::fmt;
use std::str::FromStr;

use crate::error::TllvError;

/// Raw 64-bit tag values
pub mod raw {
    pub const SESSION_KEY_R1: u64 = 0x3d1a10b8bffac2ec;
    pub const SESSION_KEY_R1_INTEGRITY: u64 = 0xb349d4809e910687;
    pub const ANTI_REPLAY_SEED: u64 = 0x89c90f12204106b2;
    pub const R2: u64 = 0x71b5595ac1521133;
    pub const RETURN_REQUEST: u64 = 0x19f9d4e5ab7609cb;
    pub const ASSET_ID: u64 = 0x1bf7f53f5d5d5a1f;
    pub const TRANSACTION_ID: u64 = 0x47aa7ad3440577de;
    pub const PROTOCOL_VERSIONS_SUPPORTED: u64 = 0x67b8fb79ecce1a13;
    pub const PROTOCOL_VERSION_USED: u64 = 0x5d81bcbcc7f61703;
    pub const STREAMING_INDICATOR: u64 = 0xabb0256a31843974;
    /// Media playback state
    pub const SERVER_CLIENT_REFERENCE_TIME: u64 = 0xeb8efdf2b25ab3a0;
    pub const KEY_DURATION: u64 = 0x47acf6a418cd091a;
    /// Same wire value as [`KEY_DURATION`]
    pub const CONTENT_KEY_DURATION: u64 = KEY_DURATION;
    pub const ENCRYPTED_CONTENT_KEY: u64 = 0x58b38165af0e3d5a;
    pub const R1: u64 = 0xea74c4645d5efee9;
    pub const HDCP_ENFORCEMENT: u64 = 0x2e52f1530d8ddb4a;
}

/// Well-known tags of the key exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum KnownTag {
    SessionKeyR1 = raw::SESSION_KEY_R1,
    SessionKeyR1Integrity = raw::SESSION_KEY_R1_INTEGRITY,
    AntiReplaySeed = raw::ANTI_REPLAY_SEED,
    R2 = raw::R2,
    ReturnRequest = raw::RETURN_REQUEST,
    AssetId = raw::ASSET_ID,
    TransactionId = raw::TRANSACTION_ID,
    ProtocolVersionsSupported = raw::PROTOCOL_VERSIONS_SUPPORTED,
    ProtocolVersionUsed = raw::PROTOCOL_VERSION_USED,
    StreamingIndicator = raw::STREAMING_INDICATOR,
    ServerClientReferenceTime = raw::SERVER_CLIENT_REFERENCE_TIME,
    KeyDuration = raw::KEY_DURATION,
    EncryptedContentKey = raw::ENCRYPTED_CONTENT_KEY,
    R1 = raw::R1,
    HdcpEnforcement = raw::HDCP_ENFORCEMENT,
}

impl KnownTag {
    /// Every known tag, in declaration order
    pub const ALL: [KnownTag; 15] = [
        KnownTag::SessionKeyR1,
        KnownTag::SessionKeyR1Integrity,
        KnownTag::AntiReplaySeed,
        KnownTag::R2,
        KnownTag::ReturnRequest,
        KnownTag::AssetId,
        KnownTag::TransactionId,
        KnownTag::ProtocolVersionsSupported,
        KnownTag::ProtocolVersionUsed,
        KnownTag::StreamingIndicator,
        KnownTag::ServerClientReferenceTime,
        KnownTag::KeyDuration,
        KnownTag::EncryptedContentKey,
        KnownTag::R1,
        KnownTag::HdcpEnforcement,
    ];

    /// The 64-bit wire value
    pub fn value(self) -> u64 {
        self as u64
    }

    /// Look up a known tag by wire value
    pub fn from_value(value: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.value() == value)
    }

    /// Kebab-case name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            KnownTag::SessionKeyR1 => "session-key-r1",
            KnownTag::SessionKeyR1Integrity => "session-key-r1-integrity",
            KnownTag::AntiReplaySeed => "anti-replay-seed",
            KnownTag::R2 => "r2",
            KnownTag::ReturnRequest => "return-request",
            KnownTag::AssetId => "asset-id",
            KnownTag::TransactionId => "transaction-id",
            KnownTag::ProtocolVersionsSupported => "protocol-versions-supported",
            KnownTag::ProtocolVersionUsed => "protocol-version-used",
            KnownTag::StreamingIndicator => "streaming-indicator",
            KnownTag::ServerClientReferenceTime => "server-client-reference-time",
            KnownTag::KeyDuration => "key-duration",
            KnownTag::EncryptedContentKey => "encrypted-content-key",
            KnownTag::R1 => "r1",
            KnownTag::HdcpEnforcement => "hdcp-enforcement",
        }
    }
}

impl From<KnownTag> for u64 {
    fn from(tag: KnownTag) -> Self {
        tag.value()
    }
}

impl fmt::Display for KnownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KnownTag {
    type Err = TllvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TllvError::Config(format!("Unknown tag name: {}", s)))
    }
}

/// Parse a tag given either as a known name or as a hex literal (`0x...`)
pub fn parse_tag(s: &str) -> crate::error::Result<u64> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16)
            .map_err(|e| TllvError::Config(format!("Invalid hex tag {}: {}", s, e))),
        None => s.parse::<KnownTag>().map(KnownTag::value),
    }
}
