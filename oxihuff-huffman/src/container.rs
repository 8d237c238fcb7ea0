//! Container format.
//!
//! A compressed file is laid out as follows (integers little-endian):
//!
//! ```text
//! Offset      Size     Field
//! 0           8        symbol count n (0..=256)
//! 8           9 * n    records: byte value (1) + frequency (8), ascending byte value
//! 8 + 9n      8        bit count            (only if n > 0)
//! 16 + 9n     ceil(bit count / 8)  payload  (only if n > 0)
//! ```
//!
//! The code table itself is never stored: the decoder rebuilds the tree from
//! the frequency records.

use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use oxihuff_core::error::{OxiHuffError, Result};

/// Size of the symbol count field.
pub const COUNT_FIELD_LEN: usize = 8;

/// Size of one `(byte value, frequency)` record.
pub const RECORD_LEN: usize = 9;

/// Size of the bit count field.
pub const BIT_COUNT_LEN: usize = 8;

/// Container metadata: everything except the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Occurrence count of each byte value in the original data.
    pub frequencies: FrequencyTable,
    /// Number of meaningful bits in the payload.
    pub bit_count: u64,
}

impl ContainerHeader {
    /// Create a header.
    pub fn new(frequencies: FrequencyTable, bit_count: u64) -> Self {
        Self {
            frequencies,
            bit_count,
        }
    }

    /// Header for an empty input.
    pub fn empty() -> Self {
        Self::new(FrequencyTable::new(), 0)
    }

    /// Number of frequency records (distinct byte values).
    pub fn symbol_count(&self) -> usize {
        self.frequencies.distinct()
    }

    /// Whether the header describes an empty input.
    pub fn is_empty(&self) -> bool {
        self.symbol_count() == 0
    }

    /// Length of the original data.
    pub fn original_len(&self) -> u64 {
        self.frequencies.total()
    }

    /// Serialized size of the header in bytes.
    pub fn encoded_len(&self) -> usize {
        match self.symbol_count() {
            0 => COUNT_FIELD_LEN,
            n => COUNT_FIELD_LEN + n * RECORD_LEN + BIT_COUNT_LEN,
        }
    }

    /// Size of the payload this header announces.
    pub fn payload_len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.bit_count.div_ceil(8)
        }
    }

    /// Append the serialized header to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let count = self.symbol_count();
        out.reserve(self.encoded_len());
        out.extend_from_slice(&(count as u64).to_le_bytes());

        if count == 0 {
            return;
        }

        for (symbol, frequency) in self.frequencies.iter() {
            out.push(symbol);
            out.extend_from_slice(&frequency.to_le_bytes());
        }
        out.extend_from_slice(&self.bit_count.to_le_bytes());
    }

    /// Parse a header from the start of `data`.
    ///
    /// Returns the header and the number of bytes it occupies.
    pub fn parse(data: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = ByteCursor::new(data);

        let count = cursor.read_u64("symbol count")?;
        if count > SYMBOL_COUNT as u64 {
            return Err(OxiHuffError::invalid_header(format!(
                "symbol count {count} exceeds {SYMBOL_COUNT}"
            )));
        }
        if count == 0 {
            return Ok((Self::empty(), cursor.position()));
        }

        let records = cursor.take(count as usize * RECORD_LEN, "frequency records")?;
        let mut frequencies = FrequencyTable::new();
        let mut previous: Option<u8> = None;

        for (index, record) in records.chunks_exact(RECORD_LEN).enumerate() {
            let symbol = record[0];
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&record[1..]);
            let frequency = u64::from_le_bytes(raw);

            if let Some(prev) = previous {
                if symbol <= prev {
                    return Err(OxiHuffError::invalid_header(format!(
                        "record {index}: byte {symbol:#04x} does not follow {prev:#04x} in ascending order"
                    )));
                }
            }
            if frequency == 0 {
                return Err(OxiHuffError::invalid_header(format!(
                    "record {index}: byte {symbol:#04x} has zero frequency"
                )));
            }

            frequencies.set(symbol, frequency);
            previous = Some(symbol);
        }

        if frequencies.checked_total().is_none() {
            return Err(OxiHuffError::invalid_header(
                "frequency total does not fit in 64 bits",
            ));
        }

        let bit_count = cursor.read_u64("bit count")?;

        Ok((Self::new(frequencies, bit_count), cursor.position()))
    }
}

/// A parsed container borrowing its payload from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    /// Container metadata.
    pub header: ContainerHeader,
    /// Exactly `header.payload_len()` bytes of packed codes.
    pub payload: &'a [u8],
    /// Bytes following the payload, if any.
    pub trailing: &'a [u8],
}

impl<'a> Container<'a> {
    /// Split a serialized container into header, payload and trailing bytes.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let (header, header_len) = ContainerHeader::parse(data)?;

        let payload_len = usize::try_from(header.payload_len()).map_err(|_| {
            OxiHuffError::invalid_header(format!(
                "bit count {} exceeds addressable memory",
                header.bit_count
            ))
        })?;

        let mut cursor = ByteCursor::new(data);
        cursor.skip(header_len);
        let payload = cursor.take(payload_len, "payload")?;
        let trailing = cursor.rest();

        Ok(Self {
            header,
            payload,
            trailing,
        })
    }

    /// Serialized size of the header and payload (excluding trailing bytes).
    pub fn encoded_len(&self) -> usize {
        self.header.encoded_len() + self.payload.len()
    }
}

/// Serialize a header followed by its payload.
pub fn write_container(header: &ContainerHeader, payload: &[u8]) -> Vec<u8> {
    debug_assert_eq!(payload.len() as u64, header.payload_len());

    let mut out = Vec::with_capacity(header.encoded_len() + payload.len());
    header.write_to(&mut out);
    if !header.is_empty() {
        out.extend_from_slice(payload);
    }
    out
}

/// Bounds-checked little-endian reader over a byte slice.
struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.data.len());
    }

    fn take(&mut self, n: usize, section: &'static str) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(OxiHuffError::truncated(section, n, self.remaining()));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u64(&mut self, section: &'static str) -> Result<u64> {
        let bytes = self.take(8, section)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    fn rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }
}
