//! Bit-level I/O for Huffman code streams.
//!
//! This module provides [`BitWriter`] and [`BitReader`] for packing code bits
//! into bytes and reading them back.
//!
//! # Bit Ordering
//!
//! OxiHuff uses MSB-first (Most Significant Bit first) ordering within bytes:
//! the first bit of the stream is bit 7 of byte 0, the ninth bit is bit 7 of
//! byte 1, and so on. Bit `n` of the stream therefore lives at
//! `byte[n / 8] >> (7 - n % 8)`.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let (bits, data) = writer.finish();
//! assert_eq!(bits, 7);
//! assert_eq!(data, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&data);
//! let first: Vec<bool> = (0..3).map(|_| reader.read_bit().unwrap()).collect();
//! assert_eq!(first, [true, false, true]);
//! assert_eq!(reader.bit_position(), 3);
//! ```

use crate::error::{OxiHuffError, Result};

/// MSB-first bit writer backed by a growable byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, right-aligned.
    buffer: u64,
    /// Number of pending bits in `buffer` (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    #[inline]
    fn flush_bytes(&mut self) {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
    }

    /// Write a single bit.
    #[inline(always)]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | bit as u64;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer == 8 {
            self.flush_bytes();
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    ///
    /// # Arguments
    ///
    /// * `value` - The bits to write (right-aligned)
    /// * `count` - Number of bits to write (0-32)
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return;
        }

        let mask = (1u64 << count) - 1;
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes();
    }

    /// Pad with zero bits to the next byte boundary.
    pub fn align_to_byte(&mut self) {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer = 8;
            self.flush_bytes();
        }
    }

    /// Finish the stream.
    ///
    /// Returns the number of meaningful bits and the byte buffer, zero-padded
    /// to a whole number of bytes (`ceil(bits / 8)` bytes long).
    pub fn finish(mut self) -> (u64, Vec<u8>) {
        self.align_to_byte();
        (self.total_bits_written, self.output)
    }
}

/// MSB-first bit reader over a byte slice.
///
/// The reader never reads past the end of its slice: any such attempt is
/// reported as a truncated payload.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the next bit to read.
    cursor: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Get the current bit position.
    pub fn bit_position(&self) -> u64 {
        self.cursor
    }

    /// Total number of bits in the underlying slice.
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte_index = (self.cursor / 8) as usize;
        let Some(&byte) = self.data.get(byte_index) else {
            return Err(OxiHuffError::truncated(
                "payload",
                byte_index + 1,
                self.data.len(),
            ));
        };

        let bit = (byte >> (7 - (self.cursor % 8) as u8)) & 1;
        self.cursor += 1;
        Ok(bit != 0)
    }

    /// Advance the cursor without inspecting the bits.
    pub fn skip_bits(&mut self, count: u64) -> Result<()> {
        let target = self.cursor.saturating_add(count);
        if target > self.bit_len() {
            return Err(OxiHuffError::truncated(
                "payload",
                target.div_ceil(8) as usize,
                self.data.len(),
            ));
        }
        self.cursor = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_value(reader: &mut BitReader<'_>, count: u8) -> u32 {
        (0..count).fold(0, |value, _| (value << 1) | reader.read_bit().unwrap() as u32)
    }

    #[test]
    fn test_bitwriter_basic() {
        let mut writer = BitWriter::new();
        // 0b10110101 bit by bit, MSB first
        for bit in [true, false, true, true, false, true, false, true] {
            writer.write_bit(bit);
        }
        let (bits, data) = writer.finish();
        assert_eq!(bits, 8);
        assert_eq!(data, vec![0xB5]);
    }

    #[test]
    fn test_bitwriter_multi_bits() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b11001, 5);
        writer.write_bits(0b1, 1);
        let (bits, data) = writer.finish();
        assert_eq!(bits, 9);
        // 101_11001 | 1_0000000
        assert_eq!(data, vec![0xB9, 0x80]);
    }

    #[test]
    fn test_finish_aligned_adds_no_padding() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xABCD, 16);
        let (bits, data) = writer.finish();
        assert_eq!(bits, 16);
        assert_eq!(data, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_finish_empty() {
        let (bits, data) = BitWriter::new().finish();
        assert_eq!(bits, 0);
        assert!(data.is_empty());
    }

    #[test]
    fn test_bitreader_basic() {
        let data = [0xB5];
        let mut reader = BitReader::new(&data);

        let mut bits = Vec::new();
        for _ in 0..8 {
            bits.push(reader.read_bit().unwrap());
        }
        assert_eq!(
            bits,
            vec![true, false, true, true, false, true, false, true]
        );
        assert_eq!(reader.bit_position(), 8);
    }

    #[test]
    fn test_bitreader_past_end() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data);
        reader.skip_bits(8).unwrap();

        let err = reader.read_bit().unwrap_err();
        assert!(err.is_format_error());
        assert!(reader.skip_bits(1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1111, 4);
        writer.write_bits(0b10, 2);
        writer.write_bits(0b110011, 6);
        writer.write_bits(0xDEAD_BEEF, 32);
        let (bits, data) = writer.finish();
        assert_eq!(bits, 47);
        assert_eq!(data.len(), 6);

        let mut reader = BitReader::new(&data);
        assert_eq!(read_value(&mut reader, 3), 0b101);
        assert_eq!(read_value(&mut reader, 4), 0b1111);
        assert_eq!(read_value(&mut reader, 2), 0b10);
        assert_eq!(read_value(&mut reader, 6), 0b110011);
        assert_eq!(read_value(&mut reader, 32), 0xDEAD_BEEF);
        // Padding bits are zero.
        assert!(!reader.read_bit().unwrap());
    }
}
