//! Frame envelope and varint helpers.
//!
//! ```text
//! [payload: payload_len bytes][varint(payload_len): n bytes][n: u8]
//! ```
//!
//! The varint is unsigned LEB128: seven data bits per byte, least significant
//! group first, high bit set on every byte except the last. A `u64` needs at
//! most [`MAX_VARINT_BYTES`] bytes, so the trailer byte is always in `1..=10`.

use crate::{Entry, LogError};

/// Maximum encoded size of a `u64` varint.
pub const MAX_VARINT_BYTES: usize = 10;

/// Size of the trailer holding the varint length.
pub const TRAILER_BYTES: usize = 1;

/// File extension of yearly log files.
pub const SUN_EXTENSION: &str = ".sun";

/// Appends the LEB128 encoding of `value` to `buf`, returning the number of
/// bytes written.
pub fn encode_varint(buf: &mut Vec<u8>, mut value: u64) -> usize {
    let start = buf.len();
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
    buf.len() - start
}

/// Decodes a LEB128 varint from the start of `bytes`.
///
/// Returns the value and the number of bytes it occupied.
///
/// # Errors
///
/// [`LogError::Corrupt`] if the continuation bits run past the end of
/// `bytes` or the value overflows 64 bits.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), LogError> {
    let mut result = 0u64;
    let mut shift = 0u32;

    for (i, &b) in bytes.iter().enumerate() {
        if shift >= 64 {
            return Err(LogError::Corrupt("varint overflows 64 bits"));
        }

        // At shift 63 only the lowest data bit still fits.
        let value = u64::from(b & 0x7F);
        if shift == 63 && value > 1 {
            return Err(LogError::Corrupt("varint overflows 64 bits"));
        }

        result |= value << shift;

        if b & 0x80 == 0 {
            return Ok((result, i + 1));
        }
        shift += 7;
    }

    Err(LogError::Corrupt("unterminated varint"))
}

/// Number of bytes [`encode_varint`] uses for `value`.
#[must_use]
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Serializes `entry` and appends one complete frame to `buf`.
///
/// Returns the frame length in bytes.
///
/// # Errors
///
/// [`LogError::Encode`] if the payload cannot be serialized.
pub fn encode_frame_into(buf: &mut Vec<u8>, entry: &Entry) -> Result<usize, LogError> {
    let start = buf.len();

    let payload = postcard::to_allocvec(entry).map_err(LogError::Encode)?;
    buf.extend_from_slice(&payload);

    let n = encode_varint(buf, payload.len() as u64);
    buf.push(n as u8); // trailer: varint length

    Ok(buf.len() - start)
}

/// Encodes `entry` as a standalone frame.
pub fn encode_frame(entry: &Entry) -> Result<Vec<u8>, LogError> {
    let mut buf = Vec::with_capacity(128);
    encode_frame_into(&mut buf, entry)?;
    Ok(buf)
}

/// Decodes an entry from a payload slice (envelope already stripped).
///
/// # Errors
///
/// [`LogError::Decode`] if the bytes are not a valid entry, and
/// [`LogError::Corrupt`] if the entry does not consume the whole slice.
pub fn decode_payload(payload: &[u8]) -> Result<Entry, LogError> {
    let (entry, rest) = postcard::take_from_bytes::<Entry>(payload).map_err(LogError::Decode)?;
    if !rest.is_empty() {
        return Err(LogError::Corrupt("trailing bytes after payload"));
    }
    Ok(entry)
}
