//! # Per-Type Binary Codecs
//!
//! Fixed-contract encode/decode for every [`FieldType`], operating over
//! cursors. Each codec owns a fixed serialized width and advances the
//! cursor by exactly that width on both encode and decode, so multi-field
//! operations can seek once and stream.
//!
//! ## Field Layouts
//!
//! | Field | Layout |
//! |-------|--------|
//! | Bool | 1 byte, 0 or 1 (decode treats nonzero as true) |
//! | Int1/Int2/Int4/Int8 | little-endian two's complement |
//! | Float4/Float8 | little-endian IEEE 754 bit pattern |
//! | Char | Unicode scalar value as u32 LE |
//! | `Str { capacity }` | u32 LE byte length + UTF-8 payload + zeroed slack |
//! | `Nullable(base)` | 1 tag byte (0 = null, 1 = present) + base payload |
//!
//! A null still reserves (and zero-fills) its base payload, so rewriting
//! the same offset between null and non-null never disturbs neighboring
//! fields.
//!
//! ## Scratch Discipline
//!
//! Codecs are stateless free functions; scratch lives on the stack per
//! call (plus a `SmallVec` for string decode). There is no shared mutable
//! codec state, so concurrent decoding over independent cursors is safe by
//! construction.
//!
//! ## Module Structure
//!
//! - `primitive`: fixed-width numerics, bool, char
//! - `nullable`: the tag-byte wrapper over any base codec
//! - `string`: the bounded-capacity string codec

pub mod nullable;
pub mod primitive;
pub mod string;


use eyre::Result;

use crate::error::Error;
use crate::memory::{Cursor, CursorMut};
use crate::types::{FieldType, Value};

/// Encodes `value` as `field` at the cursor position.
///
/// Fails with `ValueTypeMismatch` when the value's kind does not fit the
/// field; `Value::Null` only fits nullable fields.
pub fn encode(field: &FieldType, value: &Value<'_>, cursor: &mut CursorMut<'_>) -> Result<()> {
    match (field, value) {
        (FieldType::Nullable(base), _) => nullable::encode(base, value, cursor),
        (_, Value::Null) => Err(mismatch(field, value)),
        (FieldType::Bool, Value::Bool(v)) => primitive::encode_bool(*v, cursor),
        (FieldType::Int1, Value::Int1(v)) => primitive::encode_i8(*v, cursor),
        (FieldType::Int2, Value::Int2(v)) => primitive::encode_i16(*v, cursor),
        (FieldType::Int4, Value::Int4(v)) => primitive::encode_i32(*v, cursor),
        (FieldType::Int8, Value::Int8(v)) => primitive::encode_i64(*v, cursor),
        (FieldType::Float4, Value::Float4(v)) => primitive::encode_f32(*v, cursor),
        (FieldType::Float8, Value::Float8(v)) => primitive::encode_f64(*v, cursor),
        (FieldType::Char, Value::Char(v)) => primitive::encode_char(*v, cursor),
        (FieldType::Str { capacity }, Value::Text(text)) => string::encode(*capacity, text, cursor),
        _ => Err(mismatch(field, value)),
    }
}

/// Decodes one `field` at the cursor position.
pub fn decode(field: &FieldType, cursor: &mut Cursor<'_>) -> Result<Value<'static>> {
    match field {
        FieldType::Bool => Ok(Value::Bool(primitive::decode_bool(cursor)?)),
        FieldType::Int1 => Ok(Value::Int1(primitive::decode_i8(cursor)?)),
        FieldType::Int2 => Ok(Value::Int2(primitive::decode_i16(cursor)?)),
        FieldType::Int4 => Ok(Value::Int4(primitive::decode_i32(cursor)?)),
        FieldType::Int8 => Ok(Value::Int8(primitive::decode_i64(cursor)?)),
        FieldType::Float4 => Ok(Value::Float4(primitive::decode_f32(cursor)?)),
        FieldType::Float8 => Ok(Value::Float8(primitive::decode_f64(cursor)?)),
        FieldType::Char => Ok(Value::Char(primitive::decode_char(cursor)?)),
        FieldType::Str { capacity } => string::decode(*capacity, cursor),
        FieldType::Nullable(base) => nullable::decode(base, cursor),
    }
}

fn mismatch(field: &FieldType, value: &Value<'_>) -> eyre::Report {
    Error::ValueTypeMismatch {
        expected: field.value_kind(),
        found: value.kind_label(),
    }
    .into()
}
