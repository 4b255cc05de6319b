//! # Bounded String Codec
//!
//! A string field reserves `4 + 4 × capacity` bytes: a u32 little-endian
//! *byte* length prefix followed by the UTF-8 payload, zero-filled up to
//! the reservation. The capacity bounds the *character* count; the
//! four-bytes-per-character reservation makes any capacity-conforming
//! string fit regardless of its code points.
//!
//! Encoding a string whose character count exceeds the capacity fails with
//! `StringTooLong` before a single byte is written. Decode reads the
//! prefix, exactly that many payload bytes, validates UTF-8, and skips the
//! slack so the cursor lands on the next field boundary.

use eyre::{bail, ensure, Result};
use smallvec::SmallVec;

use crate::config::MAX_BYTES_PER_CHAR;
use crate::error::Error;
use crate::memory::{Cursor, CursorMut};
use crate::types::Value;

pub fn encode(capacity: u32, text: &str, cursor: &mut CursorMut<'_>) -> Result<()> {
    let chars = text.chars().count();
    if chars > capacity as usize {
        bail!(Error::StringTooLong { chars, capacity });
    }
    let payload = text.as_bytes();
    let reserved = MAX_BYTES_PER_CHAR * capacity as usize;
    cursor.write_all(&(payload.len() as u32).to_le_bytes())?;
    cursor.write_all(payload)?;
    cursor.write_zeros(reserved - payload.len())
}

pub fn decode(capacity: u32, cursor: &mut Cursor<'_>) -> Result<Value<'static>> {
    let mut prefix = [0u8; 4];
    cursor.read_exact(&mut prefix)?;
    let length = u32::from_le_bytes(prefix) as usize;
    let reserved = MAX_BYTES_PER_CHAR * capacity as usize;
    ensure!(
        length <= reserved,
        "string length {length} exceeds field reservation of {reserved} bytes"
    );

    let mut scratch: SmallVec<[u8; 64]> = SmallVec::new();
    scratch.resize(length, 0);
    cursor.read_exact(&mut scratch)?;
    let text = std::str::from_utf8(&scratch)?.to_owned();

    cursor.skip(reserved - length);
    Ok(Value::Text(text.into()))
}
