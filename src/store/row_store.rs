//! # RowStore - Schema-Aware Row Access
//!
//! `RowStore` composes a schema and a buffer into a row/field-addressed
//! read/write surface. Reads decode through a shared-borrow cursor;
//! writes first grow the row count to cover the target row (zero-filling
//! intervening rows), then encode in place through a unique-borrow
//! cursor.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = RowStore::new(schema);
//! store.write_row(0, &[Value::Int4(42), Value::Bool(true)])?;
//! let value = store.read_field(0, 0)?;
//! ```
//!
//! ## Growth
//!
//! Writing to a row at or past the current count materializes every row
//! up to and including it: capacity is raised by reallocation with the
//! configured growth factor, and new rows decode as all-zero fields.
//! `reallocate` and `fit` remain the manual capacity controls.
//!
//! ## Failure Atomicity
//!
//! A failure partway through a multi-field operation leaves the buffer
//! exactly as far as it progressed; there is no rollback.

use eyre::{bail, Result};

use crate::codec;
use crate::config::{BUFFER_GROWTH_FACTOR, DEFAULT_ROW_CAPACITY};
use crate::error::Error;
use crate::memory::{ByteBuffer, Cursor, CursorMut};
use crate::object::{AttributeMapping, Attributed};
use crate::schema::Schema;
use crate::types::Value;

#[derive(Debug)]
pub struct RowStore {
    schema: Schema,
    data: ByteBuffer,
}

impl RowStore {
    /// Creates a store with the default initial row capacity.
    pub fn new(schema: Schema) -> Self {
        Self::with_capacity(schema, DEFAULT_ROW_CAPACITY)
    }

    /// Creates a store with room for `rows` rows before the first
    /// reallocation.
    pub fn with_capacity(schema: Schema, rows: usize) -> Self {
        let capacity = rows * schema.width();
        Self {
            schema,
            data: ByteBuffer::new(capacity),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn data(&self) -> &ByteBuffer {
        &self.data
    }

    /// Current row count: `buffer.size / schema.width`.
    pub fn len(&self) -> usize {
        match self.schema.width() {
            0 => 0,
            width => self.data.size() / width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of `row`. Pure arithmetic, no bounds check.
    pub fn offset_of(&self, row: usize) -> usize {
        row * self.schema.width()
    }

    /// Byte offset of `field` within `row`. Pure arithmetic on the row
    /// side; the field must exist in the schema.
    pub fn offset_of_field(&self, row: usize, field: usize) -> usize {
        self.offset_of(row) + self.schema.offset(field)
    }

    /// Decodes consecutive fields of `row` into `out`, starting at field
    /// 0. Returns the number of fields decoded.
    pub fn read_row(&self, row: usize, out: &mut [Value<'static>]) -> Result<usize> {
        self.read_row_at(row, 0, out)
    }

    /// Decodes consecutive fields of `row` into `out`, starting at
    /// `field_offset`. Decodes `min(out.len(), field_count -
    /// field_offset)` fields; fails with `FieldNotFound` if
    /// `field_offset` lies past the schema.
    pub fn read_row_at(
        &self,
        row: usize,
        field_offset: usize,
        out: &mut [Value<'static>],
    ) -> Result<usize> {
        let field_count = self.schema.field_count();
        if field_offset > field_count {
            bail!(Error::FieldNotFound {
                field: field_offset,
                count: field_count,
            });
        }
        let count = out.len().min(field_count - field_offset);
        if count == 0 {
            return Ok(0);
        }

        let mut cursor = Cursor::new(&self.data);
        cursor.set_offset(self.offset_of_field(row, field_offset));
        for (idx, slot) in out.iter_mut().enumerate().take(count) {
            let field = &self.schema.fields()[field_offset + idx];
            *slot = codec::decode(field, &mut cursor)?;
        }
        Ok(count)
    }

    /// Decodes a single field of `row`.
    pub fn read_field(&self, row: usize, field: usize) -> Result<Value<'static>> {
        let Some(field_type) = self.schema.field(field) else {
            bail!(Error::FieldNotFound {
                field,
                count: self.schema.field_count(),
            });
        };
        let mut cursor = Cursor::new(&self.data);
        cursor.set_offset(self.offset_of_field(row, field));
        codec::decode(field_type, &mut cursor)
    }

    /// Decodes mapped fields of `row` into `object` through the mapping's
    /// descriptor: every attribute that is writable on the object and
    /// mapped to a field is assigned. Returns the attributes assigned.
    pub fn read_into<T: Attributed>(
        &self,
        row: usize,
        object: &mut T,
        mapping: &AttributeMapping,
    ) -> Result<usize> {
        let descriptor = mapping.descriptor();
        let mut assigned = 0;
        for (attr_idx, attribute) in descriptor.attributes().iter().enumerate() {
            if !attribute.writable() {
                continue;
            }
            let Some(field) = mapping.field_of(attr_idx) else {
                continue;
            };
            let value = self.read_field(row, field)?;
            descriptor.set(object, attribute.name(), value)?;
            assigned += 1;
        }
        Ok(assigned)
    }

    /// Encodes `values` into `row` starting at field 0, growing the row
    /// count first. Returns the number of fields written.
    pub fn write_row(&mut self, row: usize, values: &[Value<'_>]) -> Result<usize> {
        self.write_row_at(row, 0, values)
    }

    /// Encodes `values` into `row` starting at `field_offset`. Grows the
    /// row count to `row + 1` first (intervening rows decode as zero);
    /// encodes `min(values.len(), field_count - field_offset)` fields.
    pub fn write_row_at(
        &mut self,
        row: usize,
        field_offset: usize,
        values: &[Value<'_>],
    ) -> Result<usize> {
        let field_count = self.schema.field_count();
        if field_offset > field_count {
            bail!(Error::FieldNotFound {
                field: field_offset,
                count: field_count,
            });
        }
        self.ensure_len(row + 1)?;

        let count = values.len().min(field_count - field_offset);
        if count == 0 {
            return Ok(0);
        }
        let start = self.offset_of_field(row, field_offset);
        let mut cursor = CursorMut::new(&mut self.data);
        cursor.set_offset(start);
        for (idx, value) in values.iter().enumerate().take(count) {
            let field = &self.schema.fields()[field_offset + idx];
            codec::encode(field, value, &mut cursor)?;
        }
        Ok(count)
    }

    /// Encodes a single field of `row`, with the same growth rule as
    /// [`write_row`](Self::write_row).
    pub fn write_field(&mut self, row: usize, field: usize, value: &Value<'_>) -> Result<()> {
        if field >= self.schema.field_count() {
            bail!(Error::FieldNotFound {
                field,
                count: self.schema.field_count(),
            });
        }
        self.ensure_len(row + 1)?;
        let start = self.offset_of_field(row, field);
        let field_type = &self.schema.fields()[field];
        let mut cursor = CursorMut::new(&mut self.data);
        cursor.set_offset(start);
        codec::encode(field_type, value, &mut cursor)
    }

    /// Encodes mapped attributes of `object` into `row`: every attribute
    /// that is readable on the object and mapped to a field is written.
    /// Grows the row count like any write. Returns the fields written.
    pub fn write_from<T: Attributed>(
        &mut self,
        row: usize,
        object: &T,
        mapping: &AttributeMapping,
    ) -> Result<usize> {
        self.ensure_len(row + 1)?;
        let descriptor = mapping.descriptor();
        let mut written = 0;
        for (attr_idx, attribute) in descriptor.attributes().iter().enumerate() {
            if !attribute.readable() {
                continue;
            }
            let Some(field) = mapping.field_of(attr_idx) else {
                continue;
            };
            let value = descriptor.get(object, attribute.name())?;
            self.write_field(row, field, &value)?;
            written += 1;
        }
        Ok(written)
    }

    /// Appends a row at the current row count.
    pub fn append(&mut self, values: &[Value<'_>]) -> Result<usize> {
        self.write_row(self.len(), values)
    }

    /// Copies `rows` whole rows from `source_row` to `dest_row`,
    /// delegating to the buffer's overlap-safe move. Returns the rows
    /// actually copied (clamped like the underlying byte copy).
    pub fn copy_rows(&mut self, source_row: usize, dest_row: usize, rows: usize) -> Result<usize> {
        let width = self.schema.width();
        if width == 0 {
            return Ok(0);
        }
        let copied = self
            .data
            .copy(source_row * width, dest_row * width, rows * width)?;
        Ok(copied / width)
    }

    /// Sets the row count directly: grows with zero-filled rows or
    /// truncates the used region.
    pub fn set_len(&mut self, rows: usize) -> Result<()> {
        let required = rows * self.schema.width();
        if required > self.data.size() {
            self.ensure_len(rows)?;
        } else {
            self.data.set_size(required)?;
        }
        Ok(())
    }

    /// Reallocates the buffer to hold exactly `row_capacity` rows,
    /// truncating the row count if it no longer fits.
    pub fn reallocate(&mut self, row_capacity: usize) {
        self.data.reallocate(row_capacity * self.schema.width());
    }

    /// Shrinks the buffer capacity to the used size.
    pub fn fit(&mut self) {
        self.data.fit();
    }

    /// Swaps in a new schema. The current buffer size must be an exact
    /// multiple of the new row width.
    pub fn set_structure(&mut self, schema: Schema) -> Result<()> {
        Self::check_aligned(self.data.size(), schema.width())?;
        self.schema = schema;
        Ok(())
    }

    /// Swaps in a new buffer. Its size must be an exact multiple of the
    /// current row width.
    pub fn set_data(&mut self, data: ByteBuffer) -> Result<()> {
        Self::check_aligned(data.size(), self.schema.width())?;
        self.data = data;
        Ok(())
    }

    fn check_aligned(size: usize, width: usize) -> Result<()> {
        let aligned = match width {
            0 => size == 0,
            width => size % width == 0,
        };
        if !aligned {
            bail!(Error::Misaligned { size, width });
        }
        Ok(())
    }

    /// Grows the row count to at least `rows`, reallocating with the
    /// growth factor when capacity runs out. Shrinking never happens
    /// here.
    fn ensure_len(&mut self, rows: usize) -> Result<()> {
        let required = rows * self.schema.width();
        if required <= self.data.size() {
            return Ok(());
        }
        if required > self.data.capacity() {
            let target = required.max(self.data.capacity() * BUFFER_GROWTH_FACTOR);
            tracing::debug!(
                rows,
                required,
                capacity = self.data.capacity(),
                target,
                "growing row store"
            );
            self.data.reallocate(target);
        }
        self.data.set_size(required)
    }
}
