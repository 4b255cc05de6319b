//! # Memory Module
//!
//! Raw byte storage and position cursors. [`ByteBuffer`] owns growable
//! zero-initialized storage with a size/capacity split; [`Cursor`] and
//! [`CursorMut`] are short-lived position handles that borrow one buffer
//! and advance as bytes are transferred.
//!
//! The cursor split (shared borrow for reads, unique borrow for writes)
//! makes the "single active caller per buffer" contract a compile-time
//! property instead of a documented hazard: two mutating cursors over the
//! same buffer do not type-check.

pub mod buffer;
pub mod cursor;

pub use buffer::ByteBuffer;
pub use cursor::{Cursor, CursorMut};
