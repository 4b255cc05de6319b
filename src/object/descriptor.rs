//! # Descriptor - Capability View over Business Objects
//!
//! A [`Descriptor`] is built once per object type from its static
//! accessor table: read and write accessors are paired by attribute name,
//! their declared kinds must agree, and the result is a sorted,
//! binary-searchable attribute list where each attribute carries
//! independent read and write capabilities.
//!
//! `get`/`set` check the capability before invoking the object's own
//! accessor, so reading a write-only attribute (or writing a read-only
//! one) fails with `AccessorMissing` without touching the object;
//! accessor invocation failures propagate unchanged.
//!
//! [`DescriptorCache`] memoizes one descriptor per object type. Handles
//! are `Rc` because the whole core is single-threaded shared state.

use std::any::TypeId;
use std::rc::Rc;

use eyre::{bail, Result};
use hashbrown::HashMap;

use crate::error::Error;
use crate::types::{Value, ValueKind};

/// Direction of one accessor table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// One entry of a type's static accessor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor {
    pub name: &'static str,
    pub kind: ValueKind,
    pub access: Access,
}

/// A named, typed attribute with independent read/write capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    name: &'static str,
    kind: ValueKind,
    readable: bool,
    writable: bool,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn readable(&self) -> bool {
        self.readable
    }

    pub fn writable(&self) -> bool {
        self.writable
    }
}

/// Exposes named, typed attributes with get/set capability.
///
/// Implemented per business-object type, normally through the
/// [`attributed!`](crate::attributed) macro. `accessors` is the static
/// declaration; `read_attr`/`write_attr` are the invokable handles.
pub trait Attributed {
    fn accessors() -> &'static [Accessor]
    where
        Self: Sized;

    fn read_attr(&self, name: &str) -> Result<Value<'_>>;

    fn write_attr(&mut self, name: &str, value: Value<'_>) -> Result<()>;
}

/// Sorted, de-duplicated attribute list for one object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    attributes: Vec<Attribute>,
}

impl Descriptor {
    /// Builds the descriptor for `T`, pairing read and write accessors by
    /// name. Fails with `TypeMismatch` when a pair disagrees on kind.
    pub fn of<T: Attributed>() -> Result<Self> {
        let mut attributes: Vec<Attribute> = Vec::new();

        for accessor in T::accessors() {
            match attributes.iter_mut().find(|a| a.name == accessor.name) {
                Some(existing) => {
                    if existing.kind != accessor.kind {
                        let (getter, setter) = match accessor.access {
                            Access::Write => (existing.kind, accessor.kind),
                            Access::Read => (accessor.kind, existing.kind),
                        };
                        bail!(Error::TypeMismatch {
                            name: accessor.name.to_string(),
                            getter,
                            setter,
                        });
                    }
                    match accessor.access {
                        Access::Read => existing.readable = true,
                        Access::Write => existing.writable = true,
                    }
                }
                None => attributes.push(Attribute {
                    name: accessor.name,
                    kind: accessor.kind,
                    readable: accessor.access == Access::Read,
                    writable: accessor.access == Access::Write,
                }),
            }
        }

        attributes.sort_by(|a, b| a.name.cmp(b.name));
        Ok(Self { attributes })
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn get_attribute(&self, idx: usize) -> Option<&Attribute> {
        self.attributes.get(idx)
    }

    /// Binary-searches the sorted attribute list.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.attributes
            .binary_search_by(|a| a.name.cmp(name))
            .ok()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.index_of(name).map(|idx| &self.attributes[idx])
    }

    /// Attributes with a read capability.
    pub fn getter_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.readable).count()
    }

    /// Attributes with a write capability.
    pub fn setter_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.writable).count()
    }

    /// Reads `name` from `object` after checking the read capability.
    pub fn get<'a, T: Attributed>(&self, object: &'a T, name: &str) -> Result<Value<'a>> {
        let Some(attribute) = self.attribute(name) else {
            bail!(Error::AttributeNotFound {
                name: name.to_string(),
            });
        };
        if !attribute.readable {
            bail!(Error::AccessorMissing {
                name: name.to_string(),
                access: "read",
            });
        }
        object.read_attr(name)
    }

    /// Writes `value` to `name` on `object` after checking the write
    /// capability.
    pub fn set<T: Attributed>(&self, object: &mut T, name: &str, value: Value<'_>) -> Result<()> {
        let Some(attribute) = self.attribute(name) else {
            bail!(Error::AttributeNotFound {
                name: name.to_string(),
            });
        };
        if !attribute.writable {
            bail!(Error::AccessorMissing {
                name: name.to_string(),
                access: "write",
            });
        }
        object.write_attr(name, value)
    }
}

/// Memoizes one descriptor per object type.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    cache: HashMap<TypeId, Rc<Descriptor>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the cached descriptor for `T`, building it on first use.
    pub fn descriptor<T: Attributed + 'static>(&mut self) -> Result<Rc<Descriptor>> {
        if let Some(descriptor) = self.cache.get(&TypeId::of::<T>()) {
            return Ok(Rc::clone(descriptor));
        }
        let descriptor = Rc::new(Descriptor::of::<T>()?);
        self.cache.insert(TypeId::of::<T>(), Rc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
