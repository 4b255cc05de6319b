//! # Row Store
//!
//! Row/field-indexed access over one [`Schema`](crate::Schema) and one
//! [`ByteBuffer`](crate::ByteBuffer). Row `r` occupies the `width`-byte
//! slice at `r * width`; the row count is `buffer.size / width` and is
//! kept an exact multiple by construction (writes grow whole rows, and
//! hot swaps of the schema or buffer are validated eagerly).
//!
//! Cursors are created per operation, so a `RowStore` is freely usable
//! from one caller at a time and the compiler rejects anything else.

pub mod row_store;


pub use row_store::RowStore;
