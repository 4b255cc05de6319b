//! Property tests for the buffer and codec invariants.

use proptest::prelude::*;

use rowbuf::{ByteBuffer, FieldType, RowStore, Schema, Value};

/// Reference model of the buffer: a plain byte vector for the used region
/// plus the fixed capacity.
struct Model {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
        }
    }

    fn write(&mut self, offset: usize, src: &[u8]) -> Option<usize> {
        if offset >= self.capacity {
            return None;
        }
        let written = src.len().min(self.capacity - offset);
        if written > 0 {
            if self.bytes.len() < offset + written {
                self.bytes.resize(offset + written, 0);
            }
            self.bytes[offset..offset + written].copy_from_slice(&src[..written]);
        }
        Some(written)
    }

    fn copy(&mut self, source: usize, destination: usize, length: usize) -> Option<usize> {
        if source >= self.bytes.len() || destination >= self.capacity {
            return None;
        }
        let copiable = (self.bytes.len() - source).min(length);
        // Through an independent scratch buffer, so overlap is trivially
        // correct in the model.
        let scratch: Vec<u8> = self.bytes[source..source + copiable].to_vec();
        self.write(destination, &scratch)
    }
}

fn write_ops() -> impl Strategy<Value = Vec<(usize, Vec<u8>)>> {
    prop::collection::vec(
        (0usize..80, prop::collection::vec(any::<u8>(), 0..24)),
        0..20,
    )
}

proptest! {
    #[test]
    fn writes_read_back_and_gaps_stay_zero(
        capacity in 1usize..64,
        ops in write_ops(),
    ) {
        let mut buf = ByteBuffer::new(capacity);
        let mut model = Model::new(capacity);

        for (offset, src) in &ops {
            match model.write(*offset, src) {
                Some(expected) => {
                    prop_assert_eq!(buf.write(*offset, src).unwrap(), expected);
                }
                None => prop_assert!(buf.write(*offset, src).is_err()),
            }
        }

        prop_assert_eq!(buf.size(), model.bytes.len());
        prop_assert_eq!(buf.as_slice(), &model.bytes[..]);
    }

    #[test]
    fn size_is_monotonic_under_writes(
        capacity in 1usize..64,
        ops in write_ops(),
    ) {
        let mut buf = ByteBuffer::new(capacity);
        for (offset, src) in &ops {
            let before = buf.size();
            if let Ok(written) = buf.write(*offset, src) {
                prop_assert_eq!(buf.size(), before.max(offset + written));
            } else {
                prop_assert_eq!(buf.size(), before);
            }
        }
    }

    #[test]
    fn overlapping_copy_matches_scratch_model(
        capacity in 1usize..64,
        seed in prop::collection::vec(any::<u8>(), 1..48),
        source in 0usize..48,
        destination in 0usize..64,
        length in 0usize..48,
    ) {
        let mut buf = ByteBuffer::new(capacity);
        let mut model = Model::new(capacity);
        buf.write(0, &seed).ok();
        model.write(0, &seed);

        match model.copy(source, destination, length) {
            Some(expected) => {
                prop_assert_eq!(buf.copy(source, destination, length).unwrap(), expected);
            }
            None => prop_assert!(buf.copy(source, destination, length).is_err()),
        }

        prop_assert_eq!(buf.as_slice(), &model.bytes[..]);
    }

    #[test]
    fn reallocate_keeps_the_prefix(
        capacity in 1usize..64,
        seed in prop::collection::vec(any::<u8>(), 0..64),
        new_capacity in 0usize..96,
    ) {
        let mut buf = ByteBuffer::new(capacity);
        buf.write(0, &seed).ok();
        let before: Vec<u8> = buf.as_slice().to_vec();

        buf.reallocate(new_capacity);
        let kept = before.len().min(new_capacity);
        prop_assert_eq!(buf.size(), kept);
        prop_assert_eq!(buf.as_slice(), &before[..kept]);
    }
}

fn scalar_field() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Bool),
        Just(FieldType::Int1),
        Just(FieldType::Int2),
        Just(FieldType::Int4),
        Just(FieldType::Int8),
        Just(FieldType::Float4),
        Just(FieldType::Float8),
        Just(FieldType::Char),
        (0u32..8).prop_map(|capacity| FieldType::Str { capacity }),
    ]
}

fn any_field() -> impl Strategy<Value = FieldType> {
    scalar_field().prop_flat_map(|base| {
        prop_oneof![
            Just(base.clone()),
            Just(FieldType::Nullable(Box::new(base))),
        ]
    })
}

fn value_for(field: &FieldType) -> BoxedStrategy<Value<'static>> {
    match field {
        FieldType::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        FieldType::Int1 => any::<i8>().prop_map(Value::Int1).boxed(),
        FieldType::Int2 => any::<i16>().prop_map(Value::Int2).boxed(),
        FieldType::Int4 => any::<i32>().prop_map(Value::Int4).boxed(),
        FieldType::Int8 => any::<i64>().prop_map(Value::Int8).boxed(),
        FieldType::Float4 => any::<f32>().prop_map(Value::Float4).boxed(),
        FieldType::Float8 => any::<f64>().prop_map(Value::Float8).boxed(),
        FieldType::Char => any::<char>().prop_map(Value::Char).boxed(),
        FieldType::Str { capacity } => {
            let capacity = *capacity as usize;
            prop::collection::vec(any::<char>(), 0..=capacity)
                .prop_map(|chars| Value::Text(chars.into_iter().collect::<String>().into()))
                .boxed()
        }
        FieldType::Nullable(base) => {
            let inner = value_for(base);
            prop_oneof![Just(Value::Null), inner].boxed()
        }
    }
}

fn field_with_value() -> impl Strategy<Value = (FieldType, Value<'static>)> {
    any_field().prop_flat_map(|field| {
        value_for(&field).prop_map(move |value| (field.clone(), value))
    })
}

fn row_strategy() -> impl Strategy<Value = (Vec<FieldType>, Vec<Value<'static>>)> {
    prop::collection::vec(field_with_value(), 0..6)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    #[test]
    fn schema_offsets_are_prefix_sums(fields in prop::collection::vec(any_field(), 0..10)) {
        let schema = Schema::new(fields.clone());
        let mut expected = 0;
        for (i, field) in fields.iter().enumerate() {
            prop_assert_eq!(schema.offset(i), expected);
            expected += field.width();
        }
        prop_assert_eq!(schema.width(), expected);
    }

    #[test]
    fn any_row_roundtrips_bit_for_bit((fields, values) in row_strategy()) {
        let count = fields.len();
        let mut store = RowStore::new(Schema::new(fields));
        prop_assert_eq!(store.write_row(0, &values).unwrap(), count);

        let mut out = vec![Value::Null; count];
        prop_assert_eq!(store.read_row(0, &mut out).unwrap(), count);

        for (decoded, original) in out.iter().zip(&values) {
            match (decoded, original) {
                // NaN compares unequal; compare bit patterns instead.
                (Value::Float4(a), Value::Float4(b)) => {
                    prop_assert_eq!(a.to_bits(), b.to_bits());
                }
                (Value::Float8(a), Value::Float8(b)) => {
                    prop_assert_eq!(a.to_bits(), b.to_bits());
                }
                (decoded, original) => prop_assert_eq!(decoded, original),
            }
        }
    }

    #[test]
    fn rows_created_by_growth_decode_as_zero(
        (fields, values) in row_strategy(),
        target_row in 1usize..6,
    ) {
        prop_assume!(!fields.is_empty());
        let count = fields.len();
        let mut store = RowStore::new(Schema::new(fields));
        store.write_row(target_row, &values).unwrap();
        prop_assert_eq!(store.len(), target_row + 1);

        let mut out = vec![Value::Null; count];
        for row in 0..target_row {
            store.read_row(row, &mut out).unwrap();
            for (field, value) in store.schema().fields().iter().zip(&out) {
                let expected: Value<'static> = match field {
                    FieldType::Nullable(_) => Value::Null,
                    FieldType::Bool => Value::Bool(false),
                    FieldType::Int1 => Value::Int1(0),
                    FieldType::Int2 => Value::Int2(0),
                    FieldType::Int4 => Value::Int4(0),
                    FieldType::Int8 => Value::Int8(0),
                    FieldType::Float4 => Value::Float4(0.0),
                    FieldType::Float8 => Value::Float8(0.0),
                    FieldType::Char => Value::Char('\0'),
                    FieldType::Str { .. } => Value::text(""),
                };
                prop_assert_eq!(value, &expected);
            }
        }
    }
}
