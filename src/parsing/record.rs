//! Shape-tolerant access to raw export records.
//!
//! Export formats drift between versions: a list becomes an object, a string
//! becomes a number, a key disappears. [`RecordExt`] reads a field only when
//! it has the expected shape and treats anything else as absent, so
//! extraction never fails on a single odd record.

use serde_json::Value;

/// Optional, typed field lookups over a JSON value.
///
/// Every accessor returns "absent" (`None` or an empty slice) when the value
/// isn't an object, the key is missing, or the field has another shape.
///
/// # Example
///
/// ```
/// use postpack::parsing::RecordExt;
/// use serde_json::json;
///
/// let record = json!({"timestamp": 10, "data": [{"post": "hi"}], "title": 5});
/// assert_eq!(record.int_field("timestamp"), Some(10));
/// assert_eq!(record.list_field("data").len(), 1);
/// assert_eq!(record.str_field("title"), None);
/// assert!(record.list_field("attachments").is_empty());
/// ```
pub trait RecordExt {
    /// Returns the field if it is a string.
    fn str_field(&self, key: &str) -> Option<&str>;

    /// Returns the field if it is a non-empty string.
    fn non_empty_str_field(&self, key: &str) -> Option<&str> {
        self.str_field(key).filter(|s| !s.is_empty())
    }

    /// Returns the field's items if it is a list, an empty slice otherwise.
    fn list_field(&self, key: &str) -> &[Value];

    /// Returns the field if it is an object.
    fn object_field(&self, key: &str) -> Option<&Value>;

    /// Returns the field as an integer.
    ///
    /// Floats are truncated toward zero; other shapes are absent.
    fn int_field(&self, key: &str) -> Option<i64>;
}

impl RecordExt for Value {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn list_field(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn object_field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| v.is_object())
    }

    fn int_field(&self, key: &str) -> Option<i64> {
        let value = self.get(key)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))
    }
}
