//! Error types for OxiHuff operations.
//!
//! Every failure of a compress or decompress call is reported through
//! [`OxiHuffError`]. The variants fall into three broad kinds (see
//! [`ErrorKind`]): the input could not be read, the container is malformed,
//! or the output could not be written.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// The input byte source could not be read.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(#[source] io::Error),

    /// The output byte sink could not be written.
    #[error("Sink unavailable: {0}")]
    SinkUnavailable(#[source] io::Error),

    /// Input exceeds the configured size limit.
    #[error("Input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Size of the offending input.
        size: u64,
        /// Configured limit.
        limit: u64,
    },

    /// Invalid container header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// The container ended before a field could be read in full.
    #[error("Truncated {section}: need {needed} bytes, have {available}")]
    Truncated {
        /// The container section being read.
        section: &'static str,
        /// Number of bytes the section requires.
        needed: usize,
        /// Number of bytes left in the container.
        available: usize,
    },

    /// The bit stream selects a branch the tree does not have.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidHuffmanCode {
        /// Bit position where the invalid code was found.
        bit_position: u64,
    },

    /// Decoded data disagrees with the container metadata.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },
}

/// Broad classification of an [`OxiHuffError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input stream cannot be opened or read, or is over the size limit.
    SourceUnavailable,
    /// The encoded container is structurally invalid.
    Format,
    /// The output sink cannot be written.
    SinkUnavailable,
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Wrap a read failure on the input source.
    pub fn source_unavailable(err: io::Error) -> Self {
        Self::SourceUnavailable(err)
    }

    /// Wrap a write failure on the output sink.
    pub fn sink_unavailable(err: io::Error) -> Self {
        Self::SinkUnavailable(err)
    }

    /// Create an input too large error.
    pub fn input_too_large(size: u64, limit: u64) -> Self {
        Self::InputTooLarge { size, limit }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a truncation error.
    pub fn truncated(section: &'static str, needed: usize, available: usize) -> Self {
        Self::Truncated {
            section,
            needed,
            available,
        }
    }

    /// Create an invalid Huffman code error.
    pub fn invalid_huffman(bit_position: u64) -> Self {
        Self::InvalidHuffmanCode { bit_position }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnavailable(_) | Self::InputTooLarge { .. } => {
                ErrorKind::SourceUnavailable
            }
            Self::SinkUnavailable(_) => ErrorKind::SinkUnavailable,
            Self::InvalidHeader { .. }
            | Self::Truncated { .. }
            | Self::InvalidHuffmanCode { .. }
            | Self::CorruptedData { .. } => ErrorKind::Format,
        }
    }

    /// Whether this error reports a malformed container.
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiHuffError::truncated("payload", 4, 1);
        assert_eq!(err.to_string(), "Truncated payload: need 4 bytes, have 1");

        let err = OxiHuffError::invalid_huffman(17);
        assert!(err.to_string().contains("bit position 17"));

        let err = OxiHuffError::input_too_large(10, 5);
        assert!(err.to_string().contains("limit of 5"));
    }

    #[test]
    fn test_error_kind() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        assert_eq!(
            OxiHuffError::source_unavailable(io_err).kind(),
            ErrorKind::SourceUnavailable
        );

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(
            OxiHuffError::sink_unavailable(io_err).kind(),
            ErrorKind::SinkUnavailable
        );

        assert!(OxiHuffError::invalid_header("bad count").is_format_error());
        assert!(OxiHuffError::corrupted(0, "mismatch").is_format_error());
        assert!(!OxiHuffError::input_too_large(2, 1).is_format_error());
    }

    #[test]
    fn test_io_source_preserved() {
        use std::error::Error as _;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = OxiHuffError::source_unavailable(io_err);
        assert!(err.source().is_some());
    }
}
