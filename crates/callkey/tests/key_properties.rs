use callkey::{Args, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

/// Numeric view of a scalar: booleans count as 0 and 1
fn numeric(values: &[Value]) -> Vec<Value> {
    values
        .iter()
        .map(|v| match v {
            Value::Bool(b) => Value::Int(i64::from(*b)),
            other => other.clone(),
        })
        .collect()
}

fn named_set() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[a-z]{1,4}", scalar(), 0..6)
}

proptest! {
    /// Property: supply order of named arguments never changes the key
    #[test]
    fn prop_named_order_irrelevant(
        positional in prop::collection::vec(scalar(), 0..4),
        named in named_set(),
        seed in any::<u64>(),
    ) {
        let forward = named.iter().fold(Args::positional(positional.clone()), |args, (k, v)| {
            args.kwarg(k.clone(), v.clone())
        });

        let mut shuffled: Vec<_> = named.iter().collect();
        let len = shuffled.len().max(1);
        shuffled.rotate_left((seed as usize) % len);
        if seed % 2 == 0 {
            shuffled.reverse();
        }
        let rotated = shuffled.into_iter().fold(Args::positional(positional), |args, (k, v)| {
            args.kwarg(k.clone(), v.clone())
        });

        prop_assert_eq!(forward.key().unwrap(), rotated.key().unwrap());
    }

    /// Property: keys match exactly when positional values are equal in value and order
    #[test]
    fn prop_positional_sequence_identity(
        a in prop::collection::vec(scalar(), 0..5),
        b in prop::collection::vec(scalar(), 0..5),
    ) {
        let key_a = Args::positional(a.clone()).key().unwrap();
        let key_b = Args::positional(b.clone()).key().unwrap();

        prop_assert_eq!(key_a == key_b, numeric(&a) == numeric(&b));
    }

    /// Property: a whole float keys the same as the matching integer
    #[test]
    fn prop_whole_float_matches_int(n in -1_000_000i64..1_000_000) {
        let as_int = Args::positional([Value::Int(n)]).key().unwrap();
        let as_float = Args::new().kwarg("x", n as f64).key().unwrap();
        let named_int = Args::new().kwarg("x", n).key().unwrap();

        prop_assert_eq!(as_float, named_int);
        prop_assert_eq!(as_int, Args::positional([n as f64]).key().unwrap());
    }

    /// Property: a list anywhere in the arguments blocks key construction
    #[test]
    fn prop_list_always_rejected(
        positional in prop::collection::vec(scalar(), 0..4),
        insert_at in 0usize..4,
    ) {
        let mut values = positional;
        let at = insert_at.min(values.len());
        values.insert(at, Value::list([1]));

        prop_assert!(Args::positional(values).key().is_err());
    }
}
