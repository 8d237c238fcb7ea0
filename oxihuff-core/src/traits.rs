//! Core traits for compression and decompression.
//!
//! Codecs in OxiHuff are whole-input codecs: they read their entire source
//! before producing any output. The traits here therefore work on a reader
//! and a writer rather than on incremental input/output slices.

use crate::error::{OxiHuffError, Result};
use std::io::{Read, Write};

/// Byte counts reported by a successful compress or decompress call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecReport {
    /// Bytes read from the source.
    pub input_len: u64,
    /// Bytes written to the sink.
    pub output_len: u64,
    /// Bytes of packed code payload in the container.
    pub payload_len: u64,
    /// Bytes of container metadata (symbol count, frequency records, bit count).
    pub header_len: u64,
}

impl CodecReport {
    /// Output size as a percentage of input size.
    ///
    /// Returns 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        self.output_len as f64 / self.input_len as f64 * 100.0
    }
}

/// A whole-input compressor (encoder).
pub trait Compressor {
    /// Compress everything `input` yields into `output`.
    ///
    /// # Returns
    ///
    /// A [`CodecReport`] where `input_len` is the number of uncompressed bytes
    /// and `output_len` the size of the container written.
    fn compress_stream<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CodecReport>;

    /// Compress an in-memory buffer (convenience method).
    fn compress_all(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut source = input;
        let mut output = Vec::new();
        self.compress_stream(&mut source, &mut output)?;
        Ok(output)
    }
}

/// A whole-input decompressor (decoder).
pub trait Decompressor {
    /// Decode the container `input` yields into `output`.
    ///
    /// # Returns
    ///
    /// A [`CodecReport`] where `input_len` is the container size and
    /// `output_len` the number of reconstructed bytes.
    fn decompress_stream<R: Read, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CodecReport>;

    /// Decompress an in-memory container (convenience method).
    fn decompress_all(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut source = input;
        let mut output = Vec::new();
        self.decompress_stream(&mut source, &mut output)?;
        Ok(output)
    }
}

/// Read a source to its end, classifying failures as source errors.
pub fn read_source<R: Read>(input: &mut R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(OxiHuffError::source_unavailable)?;
    Ok(data)
}

/// Read a source to its end, stopping once it is known to exceed `limit` bytes.
///
/// At most `limit + 1` bytes are buffered. An oversized source fails with
/// [`OxiHuffError::InputTooLarge`] carrying the number of bytes read so far.
pub fn read_source_limited<R: Read>(input: &mut R, limit: Option<u64>) -> Result<Vec<u8>> {
    let Some(limit) = limit else {
        return read_source(input);
    };

    let mut data = Vec::new();
    input
        .by_ref()
        .take(limit.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(OxiHuffError::source_unavailable)?;

    if data.len() as u64 > limit {
        return Err(OxiHuffError::input_too_large(data.len() as u64, limit));
    }
    Ok(data)
}

/// Write a whole buffer to a sink and flush it, classifying failures as sink errors.
pub fn write_sink<W: Write>(output: &mut W, data: &[u8]) -> Result<()> {
    output
        .write_all(data)
        .and_then(|()| output.flush())
        .map_err(OxiHuffError::sink_unavailable)
}
