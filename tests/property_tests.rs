//! Property-based tests for round-trip guarantees across generated inputs.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use toon_rs::{from_str, to_string};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
struct Record {
    id: i32,
    name: String,
    active: bool,
    score: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Records {
    records: Vec<Record>,
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        any::<i32>(),
        "[a-zA-Z0-9 ]{0,16}",
        any::<bool>(),
        -1000.0f64..1000.0,
    )
        .prop_map(|(id, name, active, score)| Record {
            id,
            name,
            active,
            score,
        })
}

proptest! {
    // Bare-scalar round-trip.
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in "[a-zA-Z0-9 ,:\\[\\]{}\"]{0,32}") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    // Array-of-records round-trip: the grammar's actual native shape.
    #[test]
    fn prop_records_array(records in prop::collection::vec(arb_record(), 0..20)) {
        prop_assert!(roundtrip(&Records { records }));
    }

    // Uniform arity: every row emitted for a given document has the same
    // number of comma-separated fields as the header declares.
    #[test]
    fn prop_row_arity_matches_header(records in prop::collection::vec(arb_record(), 1..10)) {
        let doc = Records { records };
        let toon = to_string(&doc).unwrap();
        let mut lines = toon.lines();
        let header = lines.next().unwrap();
        let field_count = header
            .split('{')
            .nth(1)
            .unwrap()
            .split('}')
            .next()
            .unwrap()
            .split(',')
            .filter(|s| !s.is_empty())
            .count();
        for row in lines {
            let trimmed = row.trim_start();
            let token_count = toon_rs::framer::split_row_tokens(trimmed).len();
            prop_assert_eq!(token_count, field_count);
        }
    }
}
