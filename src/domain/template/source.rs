// Value sources supplying placeholder values for rendering

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Anything that can look up a named field's string value
pub trait ValueSource {
    /// Return the field's value, or `None` when the source has no such field
    fn get_string(&self, field: &str) -> Option<String>;
}

impl ValueSource for HashMap<String, String> {
    fn get_string(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl ValueSource for BTreeMap<String, String> {
    fn get_string(&self, field: &str) -> Option<String> {
        self.get(field).cloned()
    }
}

impl ValueSource for Map<String, Value> {
    fn get_string(&self, field: &str) -> Option<String> {
        self.get(field).and_then(scalar_to_string)
    }
}

impl ValueSource for Value {
    fn get_string(&self, field: &str) -> Option<String> {
        self.as_object().and_then(|map| map.get_string(field))
    }
}

/// Adapts a lookup closure into a [`ValueSource`]
pub struct FnSource<F>(pub F);

impl<F> ValueSource for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get_string(&self, field: &str) -> Option<String> {
        (self.0)(field)
    }
}

// Strings verbatim, numbers and booleans stringified, anything else is absent
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hashmap_source() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), "foo".to_string());
        assert_eq!(values.get_string("name"), Some("foo".to_string()));
        assert_eq!(values.get_string("missing"), None);
    }

    #[test]
    fn test_json_source_scalars() {
        let values = json!({
            "name": "foo",
            "version": 3,
            "exportable": true,
            "tags": ["a", "b"],
            "nothing": null,
        });
        assert_eq!(values.get_string("name"), Some("foo".to_string()));
        assert_eq!(values.get_string("version"), Some("3".to_string()));
        assert_eq!(values.get_string("exportable"), Some("true".to_string()));
        assert_eq!(values.get_string("tags"), None);
        assert_eq!(values.get_string("nothing"), None);
    }

    #[test]
    fn test_json_non_object_source_is_empty() {
        assert_eq!(json!("name").get_string("name"), None);
    }

    #[test]
    fn test_fn_source() {
        let source = FnSource(|field: &str| (field == "name").then(|| "foo".to_string()));
        assert_eq!(source.get_string("name"), Some("foo".to_string()));
        assert_eq!(source.get_string("other"), None);
    }
}
