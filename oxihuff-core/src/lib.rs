//! # OxiHuff Core
//!
//! Core components for the OxiHuff Huffman compressor.
//!
//! This crate provides the building blocks shared by the codec and the CLI:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`traits`]: Whole-input compressor/decompressor traits and the codec report
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiHuff is layered like a small protocol stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     oxihuff CLI (files, stdin/stdout, progress)         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency table, tree, code table, container        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, errors, codec traits           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1101, 4);
//! let (bits, data) = writer.finish();
//! assert_eq!(bits, 4);
//!
//! let mut reader = BitReader::new(&data);
//! assert!(reader.read_bit().unwrap());
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{ErrorKind, OxiHuffError, Result};
pub use traits::{CodecReport, Compressor, Decompressor};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{ErrorKind, OxiHuffError, Result};
    pub use crate::traits::{CodecReport, Compressor, Decompressor};
}
