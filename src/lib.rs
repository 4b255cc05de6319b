//! # rowbuf - Schema-Driven Fixed-Layout Row Encoding
//!
//! rowbuf encodes fixed-layout binary rows over growable byte buffers and
//! maps those rows onto externally defined business objects. It is the codec
//! core beneath higher-level schema and metadata tooling: the layers above
//! (table/graph descriptors, expression compilers) consume `Schema`,
//! `RowStore`, and the codecs, but live elsewhere.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │   Object Mapping (Descriptor + Mapping)      │
//! ├─────────────────────────────────────────────┤
//! │   Row Store (row/field-indexed access)       │
//! ├──────────────────────┬──────────────────────┤
//! │   Schema (offsets)   │   Codecs (per type)  │
//! ├──────────────────────┴──────────────────────┤
//! │   Memory (ByteBuffer + Cursor)               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowbuf::{FieldType, RowStore, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     FieldType::Int4,
//!     FieldType::Bool,
//!     FieldType::Str { capacity: 5 },
//! ]);
//!
//! let mut store = RowStore::new(schema);
//! store.write_row(0, &[Value::Int4(42), Value::Bool(true), Value::text("hello")])?;
//!
//! let mut row = vec![Value::Null; 3];
//! store.read_row(0, &mut row)?;
//! ```
//!
//! ## Design Constraints
//!
//! - **Bit-exact layouts**: every field codec has a fixed byte width and
//!   advances the cursor by exactly that width on encode and decode.
//! - **Allocation discipline**: codecs use per-call stack scratch; the only
//!   steady-state allocations are buffer growth and decoded text.
//! - **Single-threaded**: all components are mutable shared state with no
//!   internal synchronization. Cursors are per-operation borrows, so the
//!   borrow checker enforces the single-active-caller contract.
//!
//! ## Module Overview
//!
//! - [`memory`]: growable byte buffer and read/write cursors
//! - [`codec`]: per-type binary encode/decode over cursors
//! - [`schema`]: ordered field lists with prefix-sum offsets
//! - [`store`]: row/field-indexed access over buffer + schema
//! - [`object`]: attribute descriptors and positional field mappings
//! - [`types`]: runtime values and field type tags
//! - [`config`]: centralized constants
//! - [`error`]: the error taxonomy

#[macro_use]
mod macros;

pub mod codec;
pub mod config;
pub mod error;
pub mod memory;
pub mod object;
pub mod schema;
pub mod store;
pub mod types;

pub use error::Error;
pub use memory::{ByteBuffer, Cursor, CursorMut};
pub use object::{
    Access, Accessor, Attribute, AttributeMapping, Attributed, Descriptor, DescriptorCache,
    MappingBuilder,
};
pub use schema::Schema;
pub use store::RowStore;
pub use types::{FieldType, Value, ValueKind};
