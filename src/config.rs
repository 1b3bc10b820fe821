//! Configuration for ksm-tllv
//!
//! Decoder limits with sensible defaults. Encoding takes no configuration.

use crate::error::{Result, TllvError};
use crate::tllv::MAX_PADDING_LENGTH;

/// Default cap on the block length a decoder will accept (16 MB)
pub const DEFAULT_MAX_BLOCK_LENGTH: u32 = 16 * 1024 * 1024;

/// Decoder configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest `block_length` a header may announce before it is rejected
    pub max_block_length: u32,

    /// Require the padding length to match `32 - (value_length % 16)`
    pub strict_padding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_block_length: DEFAULT_MAX_BLOCK_LENGTH,
            strict_padding: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum accepted block length (in bytes)
    pub fn max_block_length(mut self, len: u32) -> Self {
        self.config.max_block_length = len;
        self
    }

    /// Enable or disable the padding length check
    pub fn strict_padding(mut self, strict: bool) -> Self {
        self.config.strict_padding = strict;
        self
    }

    /// Build the config, rejecting limits that no block could satisfy
    pub fn try_build(self) -> Result<Config> {
        if (self.config.max_block_length as usize) < MAX_PADDING_LENGTH {
            return Err(TllvError::Config(format!(
                "max_block_length {} is below the {}-byte padding of an empty value",
                self.config.max_block_length, MAX_PADDING_LENGTH
            )));
        }
        Ok(self.config)
    }
}
