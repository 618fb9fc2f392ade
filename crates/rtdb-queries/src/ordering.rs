//! Ordering rules of the database service.
//!
//! Results fetched over REST come back as JSON objects in no particular
//! order; these comparisons reproduce the order the service applies when
//! evaluating `orderBy`.

use std::cmp::Ordering;

use serde_json::Value;

/// Compare two child keys.
///
/// Keys that parse as 32-bit integers sort first, numerically; all other keys
/// follow in lexicographic order.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (integer_key(a), integer_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Compare two values: null, false, true, numbers, strings, then objects.
///
/// Objects and arrays compare equal to each other; callers break the tie by key.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(false) => 1,
        Value::Bool(true) => 2,
        Value::Number(_) => 3,
        Value::String(_) => 4,
        Value::Array(_) | Value::Object(_) => 5,
    }
}

/// Integer keys use the canonical form only: `"7"` is an integer key, `"07"` is not
fn integer_key(key: &str) -> Option<i32> {
    let n = key.parse::<i32>().ok()?;
    (n.to_string() == key).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorted_keys(mut keys: Vec<&str>) -> Vec<&str> {
        keys.sort_by(|a, b| compare_keys(a, b));
        keys
    }

    #[test]
    fn test_integer_keys_first() {
        assert_eq!(
            sorted_keys(vec!["b", "10", "a", "9", "-3"]),
            vec!["-3", "9", "10", "a", "b"]
        );
    }

    #[test]
    fn test_non_canonical_integers_are_strings() {
        assert_eq!(sorted_keys(vec!["07", "8", "+1"]), vec!["8", "+1", "07"]);
        assert_eq!(sorted_keys(vec!["2147483648", "1"]), vec!["1", "2147483648"]);
    }

    #[test]
    fn test_value_ranks() {
        let mut values = vec![
            json!({"a": 1}),
            json!("b"),
            json!(3),
            json!(true),
            json!(false),
            json!(null),
            json!(-1.5),
            json!("a"),
        ];
        values.sort_by(compare_values);
        assert_eq!(
            values,
            vec![
                json!(null),
                json!(false),
                json!(true),
                json!(-1.5),
                json!(3),
                json!("a"),
                json!("b"),
                json!({"a": 1}),
            ]
        );
    }

    #[test]
    fn test_mixed_number_representations() {
        assert_eq!(compare_values(&json!(2), &json!(2.0)), Ordering::Equal);
        assert_eq!(compare_values(&json!(1), &json!(1.5)), Ordering::Less);
    }
}
