//! Codec configuration.

use oxihuff_core::error::{OxiHuffError, Result};

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Cross-check decoded output against the container metadata.
    ///
    /// When enabled the decoder rejects containers whose bit count disagrees
    /// with the tree, whose decoded histogram differs from the stored
    /// frequencies, or which carry bytes after the payload.
    pub verify: bool,
    /// Largest uncompressed size accepted, in bytes.
    ///
    /// Applies to the input when compressing and to the frequency total
    /// declared by the container when decompressing.
    pub max_input_size: Option<u64>,
}

impl HuffmanConfig {
    /// Full verification, no size limit.
    pub const STRICT: Self = Self {
        verify: true,
        max_input_size: None,
    };

    /// Bare decoding: trailing bytes are ignored and the decoded histogram
    /// is not compared against the stored frequencies.
    pub const LENIENT: Self = Self {
        verify: false,
        max_input_size: None,
    };

    /// Set whether decoded output is verified.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Set the uncompressed size limit.
    pub fn with_max_input_size(mut self, limit: Option<u64>) -> Self {
        self.max_input_size = limit;
        self
    }

    /// Check an uncompressed size against the configured limit.
    pub fn check_size(&self, size: u64) -> Result<()> {
        match self.max_input_size {
            Some(limit) if size > limit => Err(OxiHuffError::input_too_large(size, limit)),
            _ => Ok(()),
        }
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::STRICT
    }
}
