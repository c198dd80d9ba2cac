//! Wire-level error types.

use thiserror::Error;

/// Errors that can occur while reading or writing primitive wire values.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid string tag: {tag:#04x}")]
    MalformedString { tag: u8 },

    #[error("invalid ULEB128 length prefix")]
    InvalidVarint,

    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("gzip stream is corrupt: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
