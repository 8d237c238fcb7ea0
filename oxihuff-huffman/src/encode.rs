//! Huffman encoder.

use crate::codes::{Code, CodeTable};
use crate::config::HuffmanConfig;
use crate::container::{ContainerHeader, write_container};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use oxihuff_core::bitstream::BitWriter;
use oxihuff_core::error::Result;
use oxihuff_core::traits::{CodecReport, Compressor, read_source_limited, write_sink};
use std::io::{Read, Write};

/// Append `code` to the bit stream, most significant bit first.
#[inline]
fn write_code(writer: &mut BitWriter, code: Code) {
    let mut remaining = code.len();
    while remaining > 0 {
        let take = remaining.min(32);
        let chunk = (code.bits() >> (remaining - take)) as u32;
        writer.write_bits(chunk, take);
        remaining -= take;
    }
}

/// Pack `data` into a bit stream using `codes`.
///
/// Returns the number of code bits and the payload, zero-padded to a whole
/// byte. Every byte of `data` must have a code in `codes`.
pub fn pack(data: &[u8], codes: &CodeTable) -> (u64, Vec<u8>) {
    let mut writer = BitWriter::with_capacity(data.len() / 2);
    for &byte in data {
        let code = codes.get(byte);
        debug_assert!(code.is_some(), "byte {byte:#04x} has no code");
        if let Some(code) = code {
            write_code(&mut writer, code);
        }
    }
    writer.finish()
}

/// Huffman encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder {
    config: HuffmanConfig,
}

impl HuffmanEncoder {
    /// Create an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given configuration.
    pub fn with_config(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// Get the encoder configuration.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Encode `data` into a complete container.
    pub fn encode(&self, data: &[u8]) -> Result<(Vec<u8>, CodecReport)> {
        self.config.check_size(data.len() as u64)?;

        let frequencies = FrequencyTable::count(data);
        let Some(tree) = HuffmanTree::build(&frequencies) else {
            let header = ContainerHeader::empty();
            let container = write_container(&header, &[]);
            let report = CodecReport {
                input_len: 0,
                output_len: container.len() as u64,
                payload_len: 0,
                header_len: header.encoded_len() as u64,
            };
            return Ok((container, report));
        };

        let codes = CodeTable::derive(&tree);
        let (bit_count, payload) = pack(data, &codes);
        debug_assert_eq!(bit_count, codes.encoded_bits(&frequencies));

        let header = ContainerHeader::new(frequencies, bit_count);
        let container = write_container(&header, &payload);
        let report = CodecReport {
            input_len: data.len() as u64,
            output_len: container.len() as u64,
            payload_len: payload.len() as u64,
            header_len: header.encoded_len() as u64,
        };

        Ok((container, report))
    }
}

impl Compressor for HuffmanEncoder {
    fn compress_stream<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CodecReport> {
        let data = read_source_limited(input, self.config.max_input_size)?;
        let (container, report) = self.encode(&data)?;
        write_sink(output, &container)?;
        Ok(report)
    }
}

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanEncoder::new().encode(data).map(|(container, _)| container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxihuff_core::OxiHuffError;

    #[test]
    fn test_pack_aaabbc() {
        let data = b"AAABBC";
        let tree = HuffmanTree::build(&FrequencyTable::count(data)).unwrap();
        let codes = CodeTable::derive(&tree);

        // A=0 A=0 A=0 B=11 B=11 C=10 -> 0001_1111 | 0000_0000
        let (bits, payload) = pack(data, &codes);
        assert_eq!(bits, 9);
        assert_eq!(payload, vec![0b0001_1111, 0b0000_0000]);
    }

    #[test]
    fn test_pack_long_code() {
        let mut writer = BitWriter::new();
        write_code(&mut writer, Code::new(u128::MAX >> 88, 40));
        let (bits, payload) = writer.finish();
        assert_eq!(bits, 40);
        assert_eq!(payload, vec![0xFF; 5]);
    }

    #[test]
    fn test_encode_empty() {
        let (container, report) = HuffmanEncoder::new().encode(&[]).unwrap();
        assert_eq!(container, 0u64.to_le_bytes().to_vec());
        assert_eq!(report.header_len, 8);
        assert_eq!(report.payload_len, 0);
        assert_eq!(report.output_len, 8);
    }

    #[test]
    fn test_encode_single_symbol() {
        let data = vec![0x42u8; 20];
        let (container, report) = HuffmanEncoder::new().encode(&data).unwrap();

        let mut expected = 1u64.to_le_bytes().to_vec();
        expected.push(0x42);
        expected.extend_from_slice(&20u64.to_le_bytes());
        expected.extend_from_slice(&20u64.to_le_bytes());
        expected.extend_from_slice(&[0, 0, 0]);
        assert_eq!(container, expected);
        assert_eq!(report.payload_len, 3);
        assert_eq!(report.header_len, 25);
    }

    #[test]
    fn test_encode_report() {
        let data = b"hello huffman world";
        let (container, report) = HuffmanEncoder::new().encode(data).unwrap();
        assert_eq!(report.input_len, data.len() as u64);
        assert_eq!(report.output_len, container.len() as u64);
        assert_eq!(report.header_len + report.payload_len, report.output_len);
    }

    #[test]
    fn test_encode_size_limit() {
        let encoder =
            HuffmanEncoder::with_config(HuffmanConfig::default().with_max_input_size(Some(4)));
        assert!(encoder.encode(b"abcd").is_ok());
        assert!(matches!(
            encoder.encode(b"abcde"),
            Err(OxiHuffError::InputTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_compress_stream() {
        let data = b"stream me through the encoder".to_vec();
        let mut output = Vec::new();
        let report = HuffmanEncoder::new()
            .compress_stream(&mut &data[..], &mut output)
            .unwrap();
        assert_eq!(report.output_len, output.len() as u64);
        assert_eq!(output, compress(&data).unwrap());
    }

    #[test]
    fn test_compress_stream_size_limit() {
        let data = vec![1u8; 1000];
        let mut source = &data[..];
        let mut output = Vec::new();
        let encoder =
            HuffmanEncoder::with_config(HuffmanConfig::default().with_max_input_size(Some(64)));

        let err = encoder
            .compress_stream(&mut source, &mut output)
            .unwrap_err();
        assert!(matches!(
            err,
            OxiHuffError::InputTooLarge { size: 65, limit: 64 }
        ));
        // Only limit + 1 bytes were pulled from the source.
        assert_eq!(source.len(), 1000 - 65);
        assert!(output.is_empty());
    }
}
