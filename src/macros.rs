//! # Internal Macros
//!
//! This module provides macros for reducing boilerplate in rowbuf.
//!
//! ## primitive_codec!
//!
//! Generates the little-endian encode/decode function pair for each
//! fixed-width numeric type.
//!
//! ### Usage
//!
//! ```ignore
//! primitive_codec!(i16, i32);
//!
//! // Generates:
//! // pub fn encode_i16(value: i16, cursor: &mut CursorMut<'_>) -> Result<()> { ... }
//! // pub fn decode_i16(cursor: &mut Cursor<'_>) -> Result<i16> { ... }
//! // pub fn encode_i32(value: i32, cursor: &mut CursorMut<'_>) -> Result<()> { ... }
//! // pub fn decode_i32(cursor: &mut Cursor<'_>) -> Result<i32> { ... }
//! ```
//!
//! ## attributed!
//!
//! Implements [`Attributed`](crate::object::Attributed) for a plain struct
//! from one declaration per attribute. Access modes are `rw` (read and
//! write), `get` (read-only), and `set` (write-only); kinds are
//! [`ValueKind`](crate::types::ValueKind) variant names. The expansion
//! references `eyre`, so the calling crate needs it as a dependency.
//!
//! ### Usage
//!
//! ```ignore
//! struct Person {
//!     id: i64,
//!     name: String,
//!     age: i32,
//! }
//!
//! attributed! {
//!     Person {
//!         rw id: Int8,
//!         rw name: Text,
//!         get age: Int4,
//!     }
//! }
//!
//! // Generates an `impl Attributed for Person` whose accessor table has a
//! // read and a write entry for `id` and `name`, a read entry for `age`,
//! // and whose read_attr/write_attr dispatch on the attribute name.
//! ```

/// Generates a little-endian encode/decode function pair per numeric type.
#[macro_export]
macro_rules! primitive_codec {
    ($($ty:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                pub fn [<encode_ $ty>](
                    value: $ty,
                    cursor: &mut $crate::memory::CursorMut<'_>,
                ) -> ::eyre::Result<()> {
                    cursor.write_all(&value.to_le_bytes())
                }

                pub fn [<decode_ $ty>](
                    cursor: &mut $crate::memory::Cursor<'_>,
                ) -> ::eyre::Result<$ty> {
                    let mut bytes = [0u8; ::std::mem::size_of::<$ty>()];
                    cursor.read_exact(&mut bytes)?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }
            )*
        }
    };
}

/// Implements `Attributed` for a struct from per-attribute declarations.
#[macro_export]
macro_rules! attributed {
    ($ty:ty { $($mode:ident $name:ident : $kind:ident),* $(,)? }) => {
        impl $crate::object::Attributed for $ty {
            fn accessors() -> &'static [$crate::object::Accessor] {
                $crate::attributed!(@table [] $($mode $name $kind,)*)
            }

            fn read_attr(&self, name: &str) -> ::eyre::Result<$crate::types::Value<'_>> {
                $(
                    if name == stringify!($name) {
                        $crate::attributed!(@read $mode $kind, self, $name)
                    }
                )*
                ::eyre::bail!($crate::error::Error::AttributeNotFound {
                    name: name.to_string(),
                })
            }

            fn write_attr(
                &mut self,
                name: &str,
                value: $crate::types::Value<'_>,
            ) -> ::eyre::Result<()> {
                $(
                    if name == stringify!($name) {
                        $crate::attributed!(@write $mode $kind, self, $name, value)
                    }
                )*
                ::eyre::bail!($crate::error::Error::AttributeNotFound {
                    name: name.to_string(),
                })
            }
        }
    };

    // Accessor-table muncher: one entry per accessor, so `rw` contributes
    // a read entry and a write entry under the same name.
    (@table [$($done:tt)*] rw $name:ident $kind:ident, $($rest:tt)*) => {
        $crate::attributed!(@table [$($done)* ($name $kind Read) ($name $kind Write)] $($rest)*)
    };
    (@table [$($done:tt)*] get $name:ident $kind:ident, $($rest:tt)*) => {
        $crate::attributed!(@table [$($done)* ($name $kind Read)] $($rest)*)
    };
    (@table [$($done:tt)*] set $name:ident $kind:ident, $($rest:tt)*) => {
        $crate::attributed!(@table [$($done)* ($name $kind Write)] $($rest)*)
    };
    (@table [$(($name:ident $kind:ident $access:ident))*]) => {{
        const ACCESSORS: &[$crate::object::Accessor] = &[
            $(
                $crate::object::Accessor {
                    name: stringify!($name),
                    kind: $crate::types::ValueKind::$kind,
                    access: $crate::object::Access::$access,
                },
            )*
        ];
        ACCESSORS
    }};

    // Read dispatch: write-only attributes fail, everything else wraps the
    // field into a Value.
    (@read set $kind:ident, $self:expr, $name:ident) => {
        ::eyre::bail!($crate::error::Error::AccessorMissing {
            name: stringify!($name).to_string(),
            access: "read",
        })
    };
    (@read $mode:ident Text, $self:expr, $name:ident) => {
        return Ok($crate::types::Value::Text(::std::borrow::Cow::Borrowed(
            &$self.$name,
        )))
    };
    (@read $mode:ident $kind:ident, $self:expr, $name:ident) => {
        return Ok($crate::types::Value::$kind($self.$name))
    };

    // Write dispatch: read-only attributes fail, null is never assignable
    // through a generated setter, and the value kind must match exactly.
    (@write get $kind:ident, $self:expr, $name:ident, $value:expr) => {
        ::eyre::bail!($crate::error::Error::AccessorMissing {
            name: stringify!($name).to_string(),
            access: "write",
        })
    };
    (@write $mode:ident Text, $self:expr, $name:ident, $value:expr) => {
        match $value {
            $crate::types::Value::Text(text) => {
                $self.$name = text.into_owned();
                return Ok(());
            }
            other => ::eyre::bail!($crate::error::Error::ValueTypeMismatch {
                expected: $crate::types::ValueKind::Text,
                found: other.kind_label(),
            }),
        }
    };
    (@write $mode:ident $kind:ident, $self:expr, $name:ident, $value:expr) => {
        match $value {
            $crate::types::Value::$kind(inner) => {
                $self.$name = inner;
                return Ok(());
            }
            other => ::eyre::bail!($crate::error::Error::ValueTypeMismatch {
                expected: $crate::types::ValueKind::$kind,
                found: other.kind_label(),
            }),
        }
    };
}
