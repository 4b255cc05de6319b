//! # Nullable Codec
//!
//! Wraps any base codec with one leading tag byte. The canonical tri-state
//! is: tag 0 = null, tag 1 = present; decode accepts any nonzero tag as
//! present. The value itself always lives in the base payload — nothing is
//! packed into the tag, including booleans.
//!
//! A null write still zero-fills the full base payload, keeping the field
//! at its fixed width and leaving no residue from earlier values:
//! overwriting null with a value, or a value with null, is always a clean
//! in-place rewrite.

use eyre::Result;

use crate::config::{NULL_TAG, PRESENT_TAG};
use crate::memory::{Cursor, CursorMut};
use crate::types::{FieldType, Value};

pub fn encode(base: &FieldType, value: &Value<'_>, cursor: &mut CursorMut<'_>) -> Result<()> {
    match value {
        Value::Null => {
            cursor.write_byte(NULL_TAG)?;
            cursor.write_zeros(base.width())
        }
        present => {
            cursor.write_byte(PRESENT_TAG)?;
            super::encode(base, present, cursor)
        }
    }
}

pub fn decode(base: &FieldType, cursor: &mut Cursor<'_>) -> Result<Value<'static>> {
    let mut tag = [0u8; 1];
    cursor.read_exact(&mut tag)?;
    if tag[0] == NULL_TAG {
        cursor.skip(base.width());
        return Ok(Value::Null);
    }
    super::decode(base, cursor)
}
