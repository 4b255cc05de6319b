//! # Error Taxonomy
//!
//! All failures in rowbuf are precondition violations: they are raised
//! synchronously to the immediate caller, never logged, never swallowed,
//! never retried. Recovery policy belongs entirely to the caller.
//!
//! ## Variants
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `InvalidOffset` | buffer read/write/copy with an out-of-bounds offset |
//! | `StringTooLong` | encoding a string past its field's character capacity |
//! | `FieldNotFound` | out-of-range field index on schema or store access |
//! | `AttributeNotFound` | unknown attribute name on descriptor or mapping |
//! | `AccessorMissing` | reading a write-only or writing a read-only attribute |
//! | `TypeMismatch` | paired read/write accessors disagreeing on declared kind |
//! | `ValueTypeMismatch` | encoding a value whose kind does not fit the field |
//! | `Misaligned` | hot-swapping buffer/schema that breaks row alignment |
//!
//! Short buffer writes are *not* errors: `ByteBuffer::write` truncates
//! silently and reports the actual byte count, which the caller must
//! inspect.
//!
//! ## Usage
//!
//! Fallible APIs return [`eyre::Result`]; the typed variant is recoverable
//! through `downcast_ref`:
//!
//! ```ignore
//! let err = store.read_field(0, 99).unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<Error>(),
//!     Some(Error::FieldNotFound { .. })
//! ));
//! ```

use crate::types::ValueKind;

/// Precondition-violation errors raised by the codec core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("offset {offset} out of bounds for {bound} byte {region}")]
    InvalidOffset {
        offset: usize,
        bound: usize,
        region: &'static str,
    },

    #[error("string of {chars} characters exceeds field capacity of {capacity}")]
    StringTooLong { chars: usize, capacity: u32 },

    #[error("field {field} not found in schema of {count} fields")]
    FieldNotFound { field: usize, count: usize },

    #[error("attribute `{name}` not found")]
    AttributeNotFound { name: String },

    #[error("attribute `{name}` has no {access} accessor")]
    AccessorMissing {
        name: String,
        access: &'static str,
    },

    #[error("attribute `{name}` declares {getter:?} for reads but {setter:?} for writes")]
    TypeMismatch {
        name: String,
        getter: ValueKind,
        setter: ValueKind,
    },

    #[error("{found} value cannot be encoded into a {expected:?} field")]
    ValueTypeMismatch {
        expected: ValueKind,
        found: &'static str,
    },

    #[error("buffer size {size} is not a multiple of row width {width}")]
    Misaligned { size: usize, width: usize },
}
