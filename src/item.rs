//! Items and their keys.
//!
//! An item is an arbitrary JSON object. When a list is configured with a
//! `key_by` field, that field identifies the item within the list.

use serde_json::{Map, Value};
use std::sync::Arc;

/// A structured record stored in a list.
pub type Item = Map<String, Value>;

/// The value found at an item's `key_by` field.
pub type ItemKey = Value;

/// Read-only snapshot of a list.
pub type Items = Arc<[Item]>;

/// Convert a JSON value into an item. Returns `None` for non-objects.
///
/// ```
/// use serde_json::json;
/// use tinlist::item_from;
///
/// let item = item_from(json!({ "id": 1, "title": "milk" })).unwrap();
/// assert_eq!(item["title"], "milk");
/// assert!(item_from(json!([1, 2])).is_none());
/// ```
pub fn item_from(value: Value) -> Option<Item> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Read the key field of an item.
pub fn key_of<'a>(item: &'a Item, key_by: &str) -> Option<&'a ItemKey> {
    item.get(key_by)
}

/// Whether two keys identify the same item.
///
/// Numbers compare by numeric value, so `1` and `1.0` are the same key.
/// Every other value compares strictly; `1` and `"1"` differ.
pub fn keys_equal(a: &ItemKey, b: &ItemKey) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Whether a key value can identify an item.
///
/// `null`, `false`, zero and the empty string are treated like a missing key.
pub fn is_usable_key(key: &ItemKey) -> bool {
    match key {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_keys_are_unusable() {
        assert!(!is_usable_key(&json!(null)));
        assert!(!is_usable_key(&json!(false)));
        assert!(!is_usable_key(&json!(0)));
        assert!(!is_usable_key(&json!(0.0)));
        assert!(!is_usable_key(&json!("")));
    }

    #[test]
    fn ordinary_keys_are_usable() {
        assert!(is_usable_key(&json!(1)));
        assert!(is_usable_key(&json!(-3)));
        assert!(is_usable_key(&json!("a")));
        assert!(is_usable_key(&json!(true)));
        assert!(is_usable_key(&json!([])));
    }

    #[test]
    fn numeric_keys_compare_by_value() {
        assert!(keys_equal(&json!(1), &json!(1.0)));
        assert!(keys_equal(&json!(-2), &json!(-2.0)));
        assert!(!keys_equal(&json!(1), &json!(1.5)));
        assert!(!keys_equal(&json!(1), &json!("1")));
        assert!(keys_equal(&json!("a"), &json!("a")));
        assert!(!keys_equal(&json!(true), &json!(1)));
    }

    #[test]
    fn key_of_reads_field() {
        let item = item_from(json!({ "key": 7, "x": "y" })).unwrap();
        assert_eq!(key_of(&item, "key"), Some(&json!(7)));
        assert_eq!(key_of(&item, "id"), None);
    }
}
