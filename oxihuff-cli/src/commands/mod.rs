//! Command implementations for OxiHuff CLI.

pub mod completions;
pub mod compress;
pub mod decompress;
pub mod info;

pub use completions::cmd_completions;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;

use oxihuff_huffman::HuffmanConfig;
use std::path::Path;

/// Options shared by the compress and decompress commands.
pub struct CodecOptions<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub force: bool,
    pub quiet: bool,
    pub config: HuffmanConfig,
}
