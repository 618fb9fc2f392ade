//! Query Sort Orders
//!
//! A query is ordered by at most one [`Sorter`]. The sorter is sent to the
//! service as the `orderBy` parameter and re-applied to the returned object,
//! whose key order the REST API does not preserve.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use rtdb_core::reference::validate_path;
use rtdb_core::RtdbResult;

use crate::ordering::{compare_keys, compare_values};

/// Member holding a child's priority
pub const PRIORITY_KEY: &str = ".priority";

/// Sort directive of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sorter {
    /// Order by child key
    Key,
    /// Order by child value
    Value,
    /// Order by child priority
    Priority,
    /// Order by the value at a (possibly nested) child path
    Child(String),
}

impl Sorter {
    /// Order by the value at `path`, normalized to `a/b` form
    pub fn child(path: &str) -> RtdbResult<Self> {
        Ok(Self::Child(validate_path(path)?.join("/")))
    }

    /// Value of the `orderBy` parameter (a JSON string)
    pub fn to_param(&self) -> String {
        let field = match self {
            Self::Key => "$key",
            Self::Value => "$value",
            Self::Priority => "$priority",
            Self::Child(path) => path.as_str(),
        };
        Value::from(field).to_string()
    }

    /// Name of the builder method that sets this sorter
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Key => "orderByKey",
            Self::Value => "orderByValue",
            Self::Priority => "orderByPriority",
            Self::Child(_) => "orderByChild",
        }
    }

    /// Reorder the children of an object result; other values pass through
    pub fn sort(&self, value: Value) -> Value {
        let map = match value {
            Value::Object(map) => map,
            other => return other,
        };

        let mut entries: Vec<(String, Value)> = map.into_iter().collect();
        entries.sort_by(|(a_key, a), (b_key, b)| {
            self.compare(a, b).then_with(|| compare_keys(a_key, b_key))
        });

        Value::Object(entries.into_iter().collect::<Map<String, Value>>())
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match self {
            Self::Key => Ordering::Equal,
            Self::Value => compare_values(a, b),
            Self::Priority => compare_values(priority(a), priority(b)),
            Self::Child(path) => compare_values(child(a, path), child(b, path)),
        }
    }
}

static NULL: Value = Value::Null;

fn priority(value: &Value) -> &Value {
    value.get(PRIORITY_KEY).unwrap_or(&NULL)
}

fn child<'v>(value: &'v Value, path: &str) -> &'v Value {
    let pointer: String = path
        .split('/')
        .map(|key| format!("/{}", key.replace('~', "~0")))
        .collect();
    value.pointer(&pointer).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtdb_core::RtdbError;
    use serde_json::json;

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_order_by_param() {
        assert_eq!(Sorter::Key.to_param(), r#""$key""#);
        assert_eq!(Sorter::Value.to_param(), r#""$value""#);
        assert_eq!(Sorter::Priority.to_param(), r#""$priority""#);
        assert_eq!(Sorter::child("height").unwrap().to_param(), r#""height""#);
    }

    #[test]
    fn test_child_path_is_normalized() {
        assert_eq!(
            Sorter::child("/dimensions/height/").unwrap(),
            Sorter::Child("dimensions/height".to_string())
        );
        assert!(matches!(
            Sorter::child("a.b"),
            Err(RtdbError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sort_by_key() {
        let sorted = Sorter::Key.sort(json!({"b": 1, "10": 2, "a": 3, "2": 4}));
        assert_eq!(keys(&sorted), vec!["2", "10", "a", "b"]);
    }

    #[test]
    fn test_sort_by_value() {
        let sorted = Sorter::Value.sort(json!({
            "x": "text",
            "y": 3,
            "z": null,
            "w": 3,
            "v": true
        }));
        assert_eq!(keys(&sorted), vec!["z", "v", "w", "y", "x"]);
    }

    #[test]
    fn test_sort_by_child() {
        let sorted = Sorter::child("dimensions/height").unwrap().sort(json!({
            "stegosaurus": {"dimensions": {"height": 4}},
            "lambeosaurus": {"dimensions": {"height": 2.1}},
            "linhenykus": {"dimensions": {}},
            "bruhathkayosaurus": {"dimensions": {"height": 25}}
        }));
        assert_eq!(
            keys(&sorted),
            vec!["linhenykus", "lambeosaurus", "stegosaurus", "bruhathkayosaurus"]
        );
    }

    #[test]
    fn test_sort_by_priority() {
        let sorted = Sorter::Priority.sort(json!({
            "c": {".priority": "b", "v": 1},
            "a": {".priority": 2, "v": 2},
            "b": {"v": 3},
            "d": {".priority": 1, "v": 4}
        }));
        assert_eq!(keys(&sorted), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_non_objects_pass_through() {
        assert_eq!(Sorter::Key.sort(json!("value")), json!("value"));
        assert_eq!(Sorter::Value.sort(json!([3, 1, 2])), json!([3, 1, 2]));
        assert_eq!(Sorter::Value.sort(Value::Null), Value::Null);
    }
}
