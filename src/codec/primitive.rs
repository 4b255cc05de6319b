//! # Fixed-Width Primitive Codecs
//!
//! Little-endian codecs for the numeric, boolean, and char field types.
//! The numeric pairs are generated by `primitive_codec!`; bool and char
//! need their own wire rules (0/1 byte with lenient decode, u32 scalar
//! with validity check) and are written out.

use eyre::{eyre, Result};

use crate::memory::{Cursor, CursorMut};

primitive_codec!(i8, i16, i32, i64, f32, f64);

pub fn encode_bool(value: bool, cursor: &mut CursorMut<'_>) -> Result<()> {
    cursor.write_byte(u8::from(value))
}

/// Decodes one byte as a boolean; any nonzero byte is true.
pub fn decode_bool(cursor: &mut Cursor<'_>) -> Result<bool> {
    let mut byte = [0u8; 1];
    cursor.read_exact(&mut byte)?;
    Ok(byte[0] != 0)
}

pub fn encode_char(value: char, cursor: &mut CursorMut<'_>) -> Result<()> {
    cursor.write_all(&(value as u32).to_le_bytes())
}

/// Decodes a u32 code point; fails on values that are not Unicode scalars.
pub fn decode_char(cursor: &mut Cursor<'_>) -> Result<char> {
    let mut bytes = [0u8; 4];
    cursor.read_exact(&mut bytes)?;
    let scalar = u32::from_le_bytes(bytes);
    char::from_u32(scalar).ok_or_else(|| eyre!("invalid char scalar value {scalar:#x}"))
}
