//! Shape canonicalization for caller-supplied structured input.
//!
//! Collapses nested structures that mix pair sequences, plain lists, and
//! maps into the canonical nested-map form, so downstream code never
//! special-cases input shape. Total over every [`Input`]: there is no
//! failing branch.

use crate::value::{Input, Value, insert};

/// Normalize caller input into the canonical map/list/scalar tree.
///
/// - An empty sequence and an empty map both yield an empty map. The two
///   are indistinguishable afterwards; an intentionally empty list argument
///   normalizes the same as an absent optional map.
/// - A non-empty sequence where every element is a pair folds into a map,
///   values normalized recursively. Duplicate keys are last-write-wins.
/// - A non-empty sequence with any non-pair element stays a list, elements
///   normalized recursively in order. Mixed sequences are permitted, not
///   rejected; a stray pair element normalizes to a single-entry map.
/// - Map values are normalized recursively, keys kept as-is.
/// - Scalars pass through unchanged.
pub fn normalize(input: Input) -> Value {
    match input {
        Input::Null => Value::Null,
        Input::Bool(b) => Value::Bool(b),
        Input::Number(n) => Value::Number(n),
        Input::String(s) => Value::String(s),
        Input::Pair(key, value) => {
            let mut entries = Vec::with_capacity(1);
            insert(&mut entries, key, normalize(*value));
            Value::Map(entries)
        }
        Input::Seq(items) => {
            if items.is_empty() {
                return Value::empty_map();
            }
            if items.iter().all(|item| matches!(item, Input::Pair(..))) {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    let Input::Pair(key, value) = item else {
                        unreachable!("pair sequence checked above")
                    };
                    insert(&mut entries, key, normalize(*value));
                }
                Value::Map(entries)
            } else {
                Value::List(items.into_iter().map(normalize).collect())
            }
        }
        Input::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                insert(&mut out, key, normalize(value));
            }
            Value::Map(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Key;

    #[test]
    fn scalars_pass_through() {
        assert_eq!(normalize(Input::Null), Value::Null);
        assert_eq!(normalize(Input::from(true)), Value::Bool(true));
        assert_eq!(normalize(Input::from("x")), Value::String("x".to_string()));
    }

    #[test]
    fn bare_pair_becomes_single_entry_map() {
        let v = normalize(Input::pair("name", "x"));
        assert_eq!(
            v,
            Value::Map(vec![(Key::ident("name"), Value::String("x".to_string()))])
        );
    }

    #[test]
    fn mixed_sequence_stays_a_list() {
        let v = normalize(Input::Seq(vec![
            Input::pair("name", "x"),
            Input::from("loose"),
        ]));
        let Value::List(items) = v else {
            panic!("expected list, got map")
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], Value::String("loose".to_string()));
    }
}
