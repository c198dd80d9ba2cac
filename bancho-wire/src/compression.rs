//! Gzip payload compression.
//!
//! Bancho packet payloads travel gzipped. An empty payload is passed through
//! untouched in both directions, without a gzip header.

use crate::error::WireError;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Gzips `data` with the default compression level. Empty input yields empty
/// output.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, WireError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Gunzips `data` fully into a buffer. Empty input yields empty output;
/// anything else that is not a valid gzip stream is a
/// [`WireError::Decompress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, WireError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(WireError::Decompress)?;
    Ok(out)
}
