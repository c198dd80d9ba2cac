//! # bancho-wire
//!
//! Primitive wire encoding for the Bancho protocol.
//!
//! This crate provides:
//! - Bounds-checked little-endian scalar reads and writes over `bytes` buffers
//! - The tagged, ULEB128-length-prefixed string format
//! - Bit-packed boolean lists and length-prefixed integer lists
//! - Gzip payload compression with empty-input passthrough

pub mod compression;
pub mod error;
pub mod read;
pub mod write;

pub use compression::{compress, decompress};
pub use error::WireError;
pub use read::WireRead;
pub use write::WireWrite;

/// Tag byte announcing an empty string.
pub const STRING_TAG_EMPTY: u8 = 0x00;

/// Tag byte announcing a ULEB128 length prefix followed by UTF-8 bytes.
pub const STRING_TAG_PRESENT: u8 = 0x0b;
