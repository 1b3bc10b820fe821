//! # ksm-tllv
//!
//! The TLLV block codec of a FairPlay-style key server:
//! - Frames tagged values as Tag-Length-Length-Value blocks
//! - Pads every value with 17 to 32 random bytes to hide its length
//! - Structural decoding for tooling and tests
//!
//! ## Where it sits
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Key server (SPC in, CKC out)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ (tag, value) from the crypto layer
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      TLLV Codec                              │
//! │          header + value + random padding                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ serialized block
//!                       ▼
//!               CKC message assembly
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod tllv;
pub mod payload;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TllvError, Result};
pub use config::Config;
pub use tllv::{KnownTag, TllvBlock};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ksm-tllv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
