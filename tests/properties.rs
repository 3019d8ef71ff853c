use json_modelgen::{generate, Convention, DeclarationKind, GenerationConfig};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-zA-Z _-]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("k[a-z0-9_ -]{0,5}", inner), 0..4)
                .prop_map(|kvs| Value::Object(kvs.into_iter().collect())),
        ]
    })
}

/// A root object plus its keys in document order.
fn document() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec(("k[a-z0-9]{0,5}", value()), 1..8).prop_map(|kvs| {
        let mut map = Map::new();
        for (k, v) in kvs {
            map.insert(k, v);
        }
        let keys = map.keys().cloned().collect();
        (Value::Object(map).to_string(), keys)
    })
}

proptest! {
    #[test]
    fn generation_is_idempotent((src, _keys) in document()) {
        for convention in Convention::ALL {
            let config = GenerationConfig::new(convention, DeclarationKind::Struct);
            let first = generate(&src, "Root", &config);
            prop_assert!(first.is_ok(), "{convention:?} failed on {src}");
            let second = generate(&src, "Root", &config);
            prop_assert_eq!(first.ok(), second.ok());
        }
    }

    #[test]
    fn root_fields_keep_document_order((src, keys) in document()) {
        let out = generate(&src, "Root", &GenerationConfig::default()).unwrap();
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| out.find(&format!("    var {k}: ")).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}\n{out}");
    }

    #[test]
    fn dart_reads_every_source_key((src, keys) in document()) {
        let config = GenerationConfig::new(Convention::Dart, DeclarationKind::Class);
        let out = generate(&src, "Root", &config).unwrap();
        for k in &keys {
            let needle = format!("json['{k}']");
            prop_assert!(out.contains(&needle), "missing {}", needle);
        }
    }
}
