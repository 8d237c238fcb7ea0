//! Huffman decoder.

use crate::config::HuffmanConfig;
use crate::container::Container;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::bitstream::BitReader;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::traits::{CodecReport, Decompressor, read_source, write_sink};
use std::io::{Read, Write};

/// Decode exactly `bit_count` bits of `payload` by walking `tree`.
///
/// A lone-leaf tree emits its symbol once per bit without looking at the
/// bit values. Otherwise each symbol is found by descending from the root,
/// taking the zero-branch on a `0` bit and the one-branch on a `1` bit.
///
/// Fails if the payload is shorter than `bit_count` bits, or if the stream
/// ends part-way down the tree.
pub fn decode_payload(tree: &HuffmanTree, bit_count: u64, payload: &[u8]) -> Result<Vec<u8>> {
    decode_payload_limited(tree, bit_count, payload, None)
}

/// Like [`decode_payload`], but fails with
/// [`OxiHuffError::InputTooLarge`] before the output grows past `limit` bytes.
pub fn decode_payload_limited(
    tree: &HuffmanTree,
    bit_count: u64,
    payload: &[u8],
    limit: Option<u64>,
) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(payload);

    if let Node::Leaf { symbol, .. } = tree.root_node() {
        match limit {
            Some(limit) if bit_count > limit => {
                return Err(OxiHuffError::input_too_large(bit_count, limit));
            }
            _ => {}
        }
        reader.skip_bits(bit_count)?;
        return Ok(vec![symbol; run_len(bit_count)?]);
    }

    let limit = limit.unwrap_or(u64::MAX);
    let capacity = payload
        .len()
        .saturating_mul(2)
        .min(usize::try_from(limit).unwrap_or(usize::MAX));
    let mut output = Vec::with_capacity(capacity);

    while reader.bit_position() < bit_count {
        let mut node = tree.root();
        loop {
            match tree.node(node) {
                Node::Leaf { symbol, .. } => {
                    if output.len() as u64 >= limit {
                        return Err(OxiHuffError::input_too_large(
                            output.len() as u64 + 1,
                            limit,
                        ));
                    }
                    output.push(symbol);
                    break;
                }
                Node::Internal { zero, one, .. } => {
                    if reader.bit_position() >= bit_count {
                        return Err(OxiHuffError::invalid_huffman(reader.bit_position()));
                    }
                    node = if reader.read_bit()? { one } else { zero };
                }
            }
        }
    }

    Ok(output)
}

/// Output length of a lone-leaf stream, one symbol per bit.
fn run_len(bit_count: u64) -> Result<usize> {
    usize::try_from(bit_count).map_err(|_| {
        OxiHuffError::invalid_header(format!(
            "bit count {bit_count} exceeds addressable memory"
        ))
    })
}

/// Huffman decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanDecoder {
    config: HuffmanConfig,
}

impl HuffmanDecoder {
    /// Create a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given configuration.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// Get the decoder configuration.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Decode a complete container held in memory.
    pub fn decode(&self, data: &[u8]) -> Result<(Vec<u8>, CodecReport)> {
        let container = Container::parse(data)?;
        let header = &container.header;
        let header_len = header.encoded_len() as u64;

        if self.config.verify && !container.trailing.is_empty() {
            return Err(OxiHuffError::corrupted(
                container.encoded_len() as u64,
                format!("{} unexpected bytes after payload", container.trailing.len()),
            ));
        }

        let Some(tree) = HuffmanTree::build(&header.frequencies) else {
            let report = CodecReport {
                input_len: data.len() as u64,
                output_len: 0,
                payload_len: 0,
                header_len,
            };
            return Ok((Vec::new(), report));
        };

        self.config.check_size(header.original_len())?;

        if self.config.verify {
            match tree.encoded_bits() {
                Some(expected) if expected == header.bit_count => {}
                expected => {
                    return Err(OxiHuffError::corrupted(
                        header_len - 8,
                        format!(
                            "bit count {} does not match frequencies (expected {})",
                            header.bit_count,
                            expected.map_or_else(|| "overflow".to_string(), |e| e.to_string())
                        ),
                    ));
                }
            }
        }

        let output = decode_payload_limited(
            &tree,
            header.bit_count,
            container.payload,
            self.config.max_input_size,
        )?;

        if self.config.verify && FrequencyTable::count(&output) != header.frequencies {
            return Err(OxiHuffError::corrupted(
                header_len,
                "decoded data does not match stored frequencies",
            ));
        }

        let report = CodecReport {
            input_len: data.len() as u64,
            output_len: output.len() as u64,
            payload_len: container.payload.len() as u64,
            header_len,
        };

        Ok((output, report))
    }
}

impl Decompressor for HuffmanDecoder {
    fn decompress_stream<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CodecReport> {
        let data = read_source(input)?;
        let (decoded, report) = self.decode(&data)?;
        write_sink(output, &decoded)?;
        Ok(report)
    }
}

/// Decompress a container with the default configuration.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanDecoder::new().decode(data).map(|(output, _)| output)
}
