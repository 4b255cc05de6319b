//! # Object Mapping
//!
//! A capability view over externally defined business objects, and the
//! positional correspondence between their attributes and schema fields.
//!
//! Attribute discovery is compile-time: a type implements [`Attributed`]
//! (usually through the [`attributed!`](crate::attributed) macro), which
//! exposes a static accessor table — one entry per read or write accessor,
//! the Rust stand-in for getter/setter scanning. [`Descriptor`] pairs
//! those entries by name into sorted, de-duplicated attributes with
//! independent read/write capabilities; [`AttributeMapping`] then assigns
//! field indices to attributes, either by the forward/backward defaults or
//! through an explicit builder.
//!
//! ## Module Structure
//!
//! - `descriptor`: accessor trait, attribute descriptor, per-type cache
//! - `mapping`: attribute-to-field index mapping and its builder

pub mod descriptor;
pub mod mapping;

#[cfg(test)]
mod tests;

pub use descriptor::{Access, Accessor, Attribute, Attributed, Descriptor, DescriptorCache};
pub use mapping::{AttributeMapping, MappingBuilder};
