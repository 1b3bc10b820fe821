//! Error types for ksm-tllv
//!
//! Provides a unified error type for all codec operations.

use thiserror::Error;

/// Result type alias using TllvError
pub type Result<T> = std::result::Result<T, TllvError>;

/// Unified error type for TLLV operations
#[derive(Debug, Error)]
pub enum TllvError {
    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    /// The secure random source could not produce padding bytes
    #[error("Random source failure: {0}")]
    RandomSource(String),

    /// Value plus padding does not fit the 32-bit block length field
    #[error("Value too large for TLLV block: {len} bytes")]
    ValueTooLarge { len: usize },

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rand_core::Error> for TllvError {
    fn from(err: rand_core::Error) -> Self {
        TllvError::RandomSource(err.to_string())
    }
}
