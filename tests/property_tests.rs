//! Property-based tests - pragmatic approach testing core transcoding guarantees
//!
//! Plain JSON is a subset of the notation, so anything the serializer emits
//! must survive a parse round-trip; comments and underscores must be
//! transparent wherever tokens may be separated.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_zson::{from_str, parse, to_string};

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

/// Inserts an underscore between every pair of adjacent digits.
fn group_digits(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    let mut grouped = String::new();
    for (i, d) in digits.iter().enumerate() {
        if i > 0 {
            grouped.push('_');
        }
        grouped.push(*d);
    }
    grouped
}

proptest! {
    // Round-trip over plain values: stringify output is valid input.
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
    fn prop_string(s in ".*") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }

    // Comment transparency: comments at token boundaries never change the
    // parsed result.
    #[test]
    fn prop_comments_are_transparent(v in prop::collection::vec(any::<i32>(), 0..10)) {
        let plain = to_string(&v).unwrap();
        let expected = parse(&plain).unwrap();

        let decorated = format!("// header\n/* pre */{}/* post */\n// footer", plain);
        prop_assert_eq!(parse(&decorated).unwrap(), expected);
    }

    // Underscore stripping: grouping digits never changes the value.
    #[test]
    fn prop_underscores_strip_to_same_value(n in any::<u64>()) {
        prop_assert_eq!(parse(&group_digits(n)).unwrap(), json!(n));
    }

    #[test]
    fn prop_negative_underscores(n in any::<i32>()) {
        let magnitude = group_digits(n.unsigned_abs() as u64);
        let grouped = if n < 0 { format!("-{}", magnitude) } else { magnitude };
        prop_assert_eq!(parse(&grouped).unwrap(), json!(n as i64));
    }

    // Multi-line string folding: raw newlines become literal '\n' in the
    // parsed string.
    #[test]
    fn prop_multi_line_strings_fold(
        lines in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 1..6)
    ) {
        let fenced = format!("\"\"\"{}\"\"\"", lines.join("\n"));
        prop_assert_eq!(parse(&fenced).unwrap(), json!(lines.join("\n")));
    }
}
