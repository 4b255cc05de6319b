//! Tests for the object module

use std::rc::Rc;

use super::*;
use crate::error::Error;
use crate::types::{Value, ValueKind};

#[derive(Debug, Default, PartialEq)]
struct Person {
    id: i64,
    name: String,
    age: i32,
    secret: String,
}

crate::attributed! {
    Person {
        rw id: Int8,
        rw name: Text,
        get age: Int4,
        set secret: Text,
    }
}

fn person_descriptor() -> Descriptor {
    Descriptor::of::<Person>().unwrap()
}

#[test]
fn accessor_table_has_one_entry_per_accessor() {
    // rw contributes two entries, get and set one each.
    assert_eq!(Person::accessors().len(), 6);
}

#[test]
fn descriptor_sorts_and_pairs_attributes() {
    let descriptor = person_descriptor();
    let names: Vec<&str> = descriptor.attributes().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["age", "id", "name", "secret"]);

    let id = descriptor.attribute("id").unwrap();
    assert!(id.readable() && id.writable());
    assert_eq!(id.kind(), ValueKind::Int8);

    let age = descriptor.attribute("age").unwrap();
    assert!(age.readable() && !age.writable());

    let secret = descriptor.attribute("secret").unwrap();
    assert!(!secret.readable() && secret.writable());
}

#[test]
fn descriptor_counts_capabilities() {
    let descriptor = person_descriptor();
    assert_eq!(descriptor.len(), 4);
    assert_eq!(descriptor.getter_count(), 3);
    assert_eq!(descriptor.setter_count(), 3);
}

#[test]
fn index_of_binary_searches_names() {
    let descriptor = person_descriptor();
    assert_eq!(descriptor.index_of("age"), Some(0));
    assert_eq!(descriptor.index_of("secret"), Some(3));
    assert_eq!(descriptor.index_of("missing"), None);
}

#[test]
fn get_and_set_go_through_accessors() {
    let descriptor = person_descriptor();
    let mut person = Person {
        id: 7,
        name: "ada".into(),
        age: 36,
        secret: String::new(),
    };

    assert_eq!(descriptor.get(&person, "id").unwrap(), Value::Int8(7));
    assert_eq!(descriptor.get(&person, "age").unwrap(), Value::Int4(36));

    descriptor
        .set(&mut person, "name", Value::text("lovelace"))
        .unwrap();
    assert_eq!(person.name, "lovelace");

    descriptor
        .set(&mut person, "secret", Value::text("hush"))
        .unwrap();
    assert_eq!(person.secret, "hush");
}

#[test]
fn capability_violations_fail_without_touching_the_object() {
    let descriptor = person_descriptor();
    let mut person = Person::default();

    let err = descriptor.get(&person, "secret").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::AccessorMissing {
            name: "secret".into(),
            access: "read"
        })
    );

    let err = descriptor.set(&mut person, "age", Value::Int4(1)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::AccessorMissing {
            name: "age".into(),
            access: "write"
        })
    );
    assert_eq!(person, Person::default());
}

#[test]
fn unknown_attribute_fails_lookup() {
    let descriptor = person_descriptor();
    let person = Person::default();
    let err = descriptor.get(&person, "missing").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::AttributeNotFound { .. })
    ));
}

#[test]
fn generated_setter_rejects_wrong_kind_and_null() {
    let mut person = Person::default();
    let err = person.write_attr("id", Value::Bool(true)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::ValueTypeMismatch {
            expected: ValueKind::Int8,
            found: "bool"
        })
    );

    let err = person.write_attr("id", Value::Null).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::ValueTypeMismatch { found: "null", .. })
    ));
}

struct Broken {
    value: i64,
}

impl Attributed for Broken {
    fn accessors() -> &'static [Accessor] {
        // A getter/setter pair that disagrees on the declared kind.
        const ACCESSORS: &[Accessor] = &[
            Accessor {
                name: "value",
                kind: ValueKind::Int8,
                access: Access::Read,
            },
            Accessor {
                name: "value",
                kind: ValueKind::Int4,
                access: Access::Write,
            },
        ];
        ACCESSORS
    }

    fn read_attr(&self, _name: &str) -> eyre::Result<Value<'_>> {
        Ok(Value::Int8(self.value))
    }

    fn write_attr(&mut self, _name: &str, _value: Value<'_>) -> eyre::Result<()> {
        Ok(())
    }
}

#[test]
fn kind_disagreement_aborts_descriptor_construction() {
    let err = Descriptor::of::<Broken>().unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::TypeMismatch {
            name: "value".into(),
            getter: ValueKind::Int8,
            setter: ValueKind::Int4
        })
    );
}

#[test]
fn descriptor_cache_memoizes_per_type() {
    let mut cache = DescriptorCache::new();
    let first = cache.descriptor::<Person>().unwrap();
    let second = cache.descriptor::<Person>().unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn forward_maps_readable_attributes_ascending() {
    let descriptor = Rc::new(person_descriptor());
    let mapping = AttributeMapping::forward(descriptor);

    // Descriptor order: age, id, name, secret (write-only).
    assert_eq!(mapping.field_of(0), Some(0));
    assert_eq!(mapping.field_of(1), Some(1));
    assert_eq!(mapping.field_of(2), Some(2));
    assert_eq!(mapping.field_of(3), None);
    assert_eq!(mapping.len(), 3);

    assert_eq!(mapping.attribute_of(0), Some(0));
    assert_eq!(mapping.attribute_of(2), Some(2));
    assert!(!mapping.maps_field(3));
}

#[test]
fn backward_maps_readable_attributes_descending() {
    let descriptor = Rc::new(person_descriptor());
    let mapping = AttributeMapping::backward(descriptor);

    assert_eq!(mapping.field_of(0), Some(2));
    assert_eq!(mapping.field_of(1), Some(1));
    assert_eq!(mapping.field_of(2), Some(0));
    assert_eq!(mapping.field_of(3), None);
    assert_eq!(mapping.len(), 3);

    assert_eq!(mapping.attribute_of(2), Some(0));
    assert_eq!(mapping.attribute_of(0), Some(2));
}

#[test]
fn builder_maps_and_unmaps_explicitly() {
    let descriptor = Rc::new(person_descriptor());
    let mapping = AttributeMapping::builder(descriptor)
        .map("id", 4)
        .unwrap()
        .map("name", 0)
        .unwrap()
        .map("age", 1)
        .unwrap()
        .unmap("age")
        .unwrap()
        .build();

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.field_of(1), Some(4)); // id
    assert_eq!(mapping.field_of(2), Some(0)); // name
    assert_eq!(mapping.field_of(0), None); // age unmapped again
    assert_eq!(mapping.attribute_of(4), Some(1));
    assert!(!mapping.maps_field(1));
}

#[test]
fn builder_rejects_unknown_attributes() {
    let descriptor = Rc::new(person_descriptor());
    let err = AttributeMapping::builder(descriptor).map("missing", 0).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::AttributeNotFound { .. })
    ));
}

#[test]
fn empty_builder_maps_nothing() {
    let descriptor = Rc::new(person_descriptor());
    let mapping = AttributeMapping::builder(descriptor).build();
    assert!(mapping.is_empty());
    assert!(!mapping.maps_attribute(0));
}
