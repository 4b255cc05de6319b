//! # Configuration Constants
//!
//! Layout constants are load-bearing: a change to any of them changes the
//! wire layout of every row, so they are grouped here rather than scattered
//! across the codec modules.
//!
//! ## Dependency Graph
//!
//! ```text
//! STR_LENGTH_PREFIX_SIZE (4 bytes)
//!       │
//!       └─> FieldType::Str width = prefix + MAX_BYTES_PER_CHAR × capacity
//!             The prefix stores the encoded *byte* length as u32 LE, so it
//!             must stay at 4 for the full u32 range.
//!
//! MAX_BYTES_PER_CHAR (4)
//!       │
//!       └─> UTF-8 worst case. Lowering this makes StringTooLong checks
//!           insufficient: a capacity-N field could overflow its slot.
//!
//! NULLABLE_TAG_SIZE (1 byte) / NULL_TAG (0) / PRESENT_TAG (1)
//!       │
//!       └─> FieldType::Nullable width = tag + base width. Decode treats
//!           any nonzero tag as present; encode only ever writes 0 or 1.
//!
//! DEFAULT_ROW_CAPACITY (16 rows)
//!       │
//!       └─> Initial buffer capacity of RowStore::new, in rows.
//!
//! BUFFER_GROWTH_FACTOR (2)
//!       │
//!       └─> On overflow the store reallocates to
//!           max(required, capacity × factor), amortizing appends.
//! ```

/// Byte width of the string codec's little-endian length prefix.
pub const STR_LENGTH_PREFIX_SIZE: usize = 4;

/// Worst-case encoded bytes per character (UTF-8).
pub const MAX_BYTES_PER_CHAR: usize = 4;

/// Byte width of the nullable codec's tag.
pub const NULLABLE_TAG_SIZE: usize = 1;

/// Tag byte marking an absent value.
pub const NULL_TAG: u8 = 0;

/// Tag byte written for a present value.
pub const PRESENT_TAG: u8 = 1;

/// Initial row capacity of a freshly created row store.
pub const DEFAULT_ROW_CAPACITY: usize = 16;

/// Capacity multiplier applied when a write outgrows the buffer.
pub const BUFFER_GROWTH_FACTOR: usize = 2;

const _: () = assert!(STR_LENGTH_PREFIX_SIZE == std::mem::size_of::<u32>());
const _: () = assert!(NULL_TAG != PRESENT_TAG);
const _: () = assert!(BUFFER_GROWTH_FACTOR >= 2);
