//! # Schema Definition
//!
//! A `Schema` is an immutable ordered field list with pre-computed byte
//! offsets describing one fixed-width row layout.
//!
//! ## Schema Internals
//!
//! - `fields`: ordered field types
//! - `offsets`: pre-computed byte offset of each field within a row
//! - `width`: total row width in bytes
//!
//! Offsets are the prefix sums of the field widths: `offsets[0] = 0`,
//! `offsets[i] = offsets[i-1] + fields[i-1].width()`, and the row width is
//! `offsets[last] + fields[last].width()` (0 for an empty schema). Field
//! and offset lists are exposed as slices — the minimal ordered-view
//! contract consumed by the layers above.
//!
//! Schemas are built once and never mutated; combining layouts goes
//! through [`Schema::concatenate`], which flattens several schemas into a
//! new one.

use crate::types::FieldType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldType>,
    offsets: Vec<usize>,
    width: usize,
}

impl Schema {
    pub fn new(fields: Vec<FieldType>) -> Self {
        let mut offsets = Vec::with_capacity(fields.len());
        let mut offset = 0;

        for field in &fields {
            offsets.push(offset);
            offset += field.width();
        }

        Self {
            fields,
            offsets,
            width: offset,
        }
    }

    /// Builds a schema holding every field of `schemas`, in order.
    pub fn concatenate(schemas: &[&Schema]) -> Self {
        let mut fields = Vec::with_capacity(Self::count_fields_of(schemas));
        for schema in schemas {
            fields.extend(schema.fields.iter().cloned());
        }
        Self::new(fields)
    }

    /// Total field count across `schemas`.
    pub fn count_fields_of(schemas: &[&Schema]) -> usize {
        schemas.iter().map(|s| s.fields.len()).sum()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, idx: usize) -> Option<&FieldType> {
        self.fields.get(idx)
    }

    /// Byte offset of field `idx` within a row.
    pub fn offset(&self, idx: usize) -> usize {
        self.offsets[idx]
    }

    /// Total row width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn fields(&self) -> &[FieldType] {
        &self.fields
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}
