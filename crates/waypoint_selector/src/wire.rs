//! Proxy transfer wire format
//!
//! The transfer request is a two-field frame sent over a dedicated
//! plugin-message channel: a literal `"Connect"` tag followed by the
//! destination server name. Each field is framed the way Java's
//! `DataOutputStream.writeUTF` frames strings, because that is what the
//! proxy parses on the other end: a big-endian `u16` byte length followed by
//! modified UTF-8.
//!
//! Modified UTF-8 differs from real UTF-8 in two ways: `NUL` is written as
//! the two-byte sequence `C0 80`, and characters outside the basic
//! multilingual plane are written as an encoded UTF-16 surrogate pair (six
//! bytes, three per surrogate) instead of a four-byte sequence. Both
//! directions are implemented here so frames can be checked in tests and by
//! simulated hosts.

use thiserror::Error;

/// Plugin-message channel the proxy listens on.
pub const TRANSFER_CHANNEL: &str = "BungeeCord";

/// Literal tag of a transfer frame.
pub const CONNECT_TAG: &str = "Connect";

/// Errors raised while encoding or decoding transfer frames.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// The encoded string does not fit the 16-bit length prefix.
    #[error("String too long for frame: {len} encoded bytes")]
    StringTooLong { len: usize },

    /// The frame ends before the announced data does.
    #[error("Frame truncated")]
    Truncated,

    /// A byte sequence is not valid modified UTF-8.
    #[error("Malformed modified UTF-8 at offset {offset}")]
    Malformed { offset: usize },

    /// The frame's tag field is not [`CONNECT_TAG`].
    #[error("Unexpected frame tag: {0}")]
    UnexpectedTag(String),

    /// Data continues past the end of the frame.
    #[error("Trailing bytes after frame")]
    TrailingBytes,
}

// ============================================================================
// Frames
// ============================================================================

/// Encodes a transfer frame for the given destination server.
///
/// # Errors
///
/// Returns [`WireError::StringTooLong`] if the destination name encodes to
/// more than 65535 bytes.
pub fn encode_connect(server: &str) -> Result<Vec<u8>, WireError> {
    let mut frame = Vec::with_capacity(2 + CONNECT_TAG.len() + 2 + server.len());
    write_utf(&mut frame, CONNECT_TAG)?;
    write_utf(&mut frame, server)?;
    Ok(frame)
}

/// Decodes a transfer frame, returning the destination server.
///
/// # Errors
///
/// Fails if the frame is truncated, carries a tag other than
/// [`CONNECT_TAG`], contains malformed modified UTF-8, or has bytes past the
/// second field.
pub fn decode_connect(frame: &[u8]) -> Result<String, WireError> {
    let (tag, tag_len) = read_utf(frame)?;
    if tag != CONNECT_TAG {
        return Err(WireError::UnexpectedTag(tag));
    }
    let (server, server_len) = read_utf(&frame[tag_len..])?;
    if tag_len + server_len != frame.len() {
        return Err(WireError::TrailingBytes);
    }
    Ok(server)
}

// ============================================================================
// writeUTF Strings
// ============================================================================

/// Appends one length-prefixed modified-UTF-8 string to a buffer.
///
/// # Errors
///
/// Returns [`WireError::StringTooLong`] if the encoded body exceeds 65535
/// bytes; nothing is appended in that case.
pub fn write_utf(out: &mut Vec<u8>, value: &str) -> Result<(), WireError> {
    let mut encoded = Vec::with_capacity(value.len());
    for c in value.chars() {
        let cp = c as u32;
        if cp < 0x1_0000 {
            push_code_unit(&mut encoded, cp as u16);
        } else {
            // Encoded as a surrogate pair, three bytes each.
            let v = cp - 0x1_0000;
            push_code_unit(&mut encoded, (0xD800 + (v >> 10)) as u16);
            push_code_unit(&mut encoded, (0xDC00 + (v & 0x3FF)) as u16);
        }
    }
    if encoded.len() > u16::MAX as usize {
        return Err(WireError::StringTooLong { len: encoded.len() });
    }

    out.extend_from_slice(&(encoded.len() as u16).to_be_bytes());
    out.extend_from_slice(&encoded);
    Ok(())
}

/// Reads one length-prefixed modified-UTF-8 string from the front of a
/// buffer, returning the string and the number of bytes consumed.
pub fn read_utf(data: &[u8]) -> Result<(String, usize), WireError> {
    if data.len() < 2 {
        return Err(WireError::Truncated);
    }
    let len = u16::from_be_bytes([data[0], data[1]]) as usize;
    if data.len() < 2 + len {
        return Err(WireError::Truncated);
    }
    let body = &data[2..2 + len];

    let mut units: Vec<u16> = Vec::with_capacity(len);
    let mut i = 0;
    while i < len {
        let b = body[i];
        if b & 0x80 == 0 {
            units.push(b as u16);
            i += 1;
        } else if b & 0xE0 == 0xC0 {
            if i + 1 >= len || body[i + 1] & 0xC0 != 0x80 {
                return Err(WireError::Malformed { offset: 2 + i });
            }
            units.push((((b & 0x1F) as u16) << 6) | ((body[i + 1] & 0x3F) as u16));
            i += 2;
        } else if b & 0xF0 == 0xE0 {
            if i + 2 >= len || body[i + 1] & 0xC0 != 0x80 || body[i + 2] & 0xC0 != 0x80 {
                return Err(WireError::Malformed { offset: 2 + i });
            }
            units.push(
                (((b & 0x0F) as u16) << 12)
                    | (((body[i + 1] & 0x3F) as u16) << 6)
                    | ((body[i + 2] & 0x3F) as u16),
            );
            i += 3;
        } else {
            return Err(WireError::Malformed { offset: 2 + i });
        }
    }

    // Combines surrogate pairs; rejects unpaired surrogates.
    let decoded =
        String::from_utf16(&units).map_err(|_| WireError::Malformed { offset: 2 })?;
    Ok((decoded, 2 + len))
}

/// Appends one UTF-16 code unit in modified UTF-8.
fn push_code_unit(out: &mut Vec<u8>, unit: u16) {
    match unit {
        0x0001..=0x007F => out.push(unit as u8),
        // NUL and the two-byte range share this arm; NUL becomes C0 80.
        0x0000 | 0x0080..=0x07FF => {
            out.push(0xC0 | ((unit >> 6) as u8 & 0x1F));
            out.push(0x80 | (unit as u8 & 0x3F));
        }
        _ => {
            out.push(0xE0 | ((unit >> 12) as u8 & 0x0F));
            out.push(0x80 | ((unit >> 6) as u8 & 0x3F));
            out.push(0x80 | (unit as u8 & 0x3F));
        }
    }
}
