//! # AttributeMapping - Attributes to Schema Fields
//!
//! An `AttributeMapping` fixes, once per (descriptor, ordering) pair, which
//! schema field each attribute corresponds to. Both directions are
//! precomputed: `field_of` goes attribute index to field index,
//! `attribute_of` goes back.
//!
//! The two default orderings cover the common layouts:
//!
//! - [`forward`](AttributeMapping::forward): readable attributes get field
//!   indices 0, 1, 2, … in descriptor order.
//! - [`backward`](AttributeMapping::backward): the same attributes get
//!   descending indices starting at `getter_count() - 1`.
//!
//! Write-only attributes receive no field under either ordering. Anything
//! else goes through [`MappingBuilder`], which starts empty and takes
//! explicit `map`/`unmap` calls.
//!
//! Field indices are not validated against any schema here: a mapping is
//! layout-agnostic, and a stale index surfaces as `FieldNotFound` at row
//! access time.

use std::rc::Rc;

use eyre::{bail, Result};

use crate::error::Error;
use crate::object::descriptor::Descriptor;

#[derive(Debug, Clone)]
pub struct AttributeMapping {
    descriptor: Rc<Descriptor>,
    attr_to_field: Vec<Option<usize>>,
    field_to_attr: Vec<Option<usize>>,
}

impl AttributeMapping {
    /// Maps readable attributes to ascending field indices 0, 1, 2, … in
    /// descriptor order.
    pub fn forward(descriptor: Rc<Descriptor>) -> Self {
        let mut next = 0;
        let table = descriptor
            .attributes()
            .iter()
            .map(|attribute| {
                if attribute.readable() {
                    let field = next;
                    next += 1;
                    Some(field)
                } else {
                    None
                }
            })
            .collect();
        Self::from_table(descriptor, table)
    }

    /// Maps readable attributes to descending field indices starting at
    /// `getter_count() - 1`, in descriptor order.
    pub fn backward(descriptor: Rc<Descriptor>) -> Self {
        let mut remaining = descriptor.getter_count();
        let table = descriptor
            .attributes()
            .iter()
            .map(|attribute| {
                if attribute.readable() {
                    remaining -= 1;
                    Some(remaining)
                } else {
                    None
                }
            })
            .collect();
        Self::from_table(descriptor, table)
    }

    /// Starts an explicit mapping with every attribute unmapped.
    pub fn builder(descriptor: Rc<Descriptor>) -> MappingBuilder {
        let table = vec![None; descriptor.len()];
        MappingBuilder {
            descriptor,
            attr_to_field: table,
        }
    }

    fn from_table(descriptor: Rc<Descriptor>, attr_to_field: Vec<Option<usize>>) -> Self {
        let fields = attr_to_field
            .iter()
            .flatten()
            .max()
            .map_or(0, |max| max + 1);
        let mut field_to_attr = vec![None; fields];
        for (attr, field) in attr_to_field.iter().enumerate() {
            if let Some(field) = *field {
                // On duplicate targets the lowest attribute index wins.
                if field_to_attr[field].is_none() {
                    field_to_attr[field] = Some(attr);
                }
            }
        }
        Self {
            descriptor,
            attr_to_field,
            field_to_attr,
        }
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// The field mapped to `attribute`, if any.
    pub fn field_of(&self, attribute: usize) -> Option<usize> {
        self.attr_to_field.get(attribute).copied().flatten()
    }

    /// The attribute mapped to `field`, if any.
    pub fn attribute_of(&self, field: usize) -> Option<usize> {
        self.field_to_attr.get(field).copied().flatten()
    }

    pub fn maps_attribute(&self, attribute: usize) -> bool {
        self.field_of(attribute).is_some()
    }

    pub fn maps_field(&self, field: usize) -> bool {
        self.attribute_of(field).is_some()
    }

    /// Count of mapped attribute/field pairs.
    pub fn len(&self) -> usize {
        self.attr_to_field.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds an [`AttributeMapping`] from explicit `map`/`unmap` calls.
#[derive(Debug)]
pub struct MappingBuilder {
    descriptor: Rc<Descriptor>,
    attr_to_field: Vec<Option<usize>>,
}

impl MappingBuilder {
    /// Maps the named attribute to `field`, replacing any earlier mapping
    /// for it. Fails if the descriptor has no such attribute.
    pub fn map(mut self, name: &str, field: usize) -> Result<Self> {
        let idx = self.index_of(name)?;
        self.attr_to_field[idx] = Some(field);
        Ok(self)
    }

    /// Removes the named attribute's mapping, if any.
    pub fn unmap(mut self, name: &str) -> Result<Self> {
        let idx = self.index_of(name)?;
        self.attr_to_field[idx] = None;
        Ok(self)
    }

    pub fn build(self) -> AttributeMapping {
        AttributeMapping::from_table(self.descriptor, self.attr_to_field)
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        match self.descriptor.index_of(name) {
            Some(idx) => Ok(idx),
            None => bail!(Error::AttributeNotFound {
                name: name.to_string(),
            }),
        }
    }
}
