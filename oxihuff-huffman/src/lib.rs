//! # OxiHuff Huffman
//!
//! Pure Rust static Huffman compression of arbitrary byte streams.
//!
//! Compression is a fixed pipeline:
//!
//! 1. Count how often each byte value occurs ([`FrequencyTable`]).
//! 2. Build a Huffman tree from the counts ([`HuffmanTree`]).
//! 3. Derive a prefix-free code for every present byte ([`CodeTable`]).
//! 4. Pack the codes MSB-first into a bit stream ([`encode::pack`]).
//! 5. Write the frequency table, bit count and payload ([`container`]).
//!
//! The code table is never stored. Tree construction breaks frequency ties
//! by insertion order, so the decoder rebuilds the identical tree from the
//! stored frequencies alone.
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_huffman::{compress, decompress};
//!
//! let data = b"AAABBC";
//! let container = compress(data).unwrap();
//! assert_eq!(decompress(&container).unwrap(), data);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use oxihuff_huffman::{HuffmanConfig, HuffmanDecoder};
//!
//! // Skip output verification and cap the decoded size at 1 MiB.
//! let decoder = HuffmanDecoder::with_config(
//!     HuffmanConfig::LENIENT.with_max_input_size(Some(1 << 20)),
//! );
//! assert!(!decoder.config().verify);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod codes;
pub mod config;
pub mod container;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod tree;

// Re-exports
pub use codes::{Code, CodeTable};
pub use config::HuffmanConfig;
pub use container::{Container, ContainerHeader, write_container};
pub use decode::{HuffmanDecoder, decode_payload, decode_payload_limited, decompress};
pub use encode::{HuffmanEncoder, compress, pack};
pub use frequency::{FrequencyTable, SYMBOL_COUNT};
pub use tree::{HuffmanTree, Node, NodeId};
