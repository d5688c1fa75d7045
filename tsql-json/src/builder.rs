//! A small fluent helper over `serde_json::Map` that applies the
//! projection's field-omission rules in one place: a field is dropped when
//! its value is absent or its collection is empty, and kept verbatim
//! otherwise.

use serde_json::{Map, Value};

pub(crate) struct ObjectBuilder {
    map: Map<String, Value>,
}

impl ObjectBuilder {
    /// Starts a new object with `$type` as its first member.
    pub(crate) fn new(type_name: &str) -> Self {
        let mut map = Map::new();
        map.insert("$type".to_string(), Value::String(type_name.to_string()));
        Self { map }
    }

    /// An always-present field: booleans, enum tags, and "not specified"
    /// style strings that are part of the canonical schema even when they
    /// carry a default value.
    pub(crate) fn field(mut self, key: &str, value: Value) -> Self {
        self.map.insert(key.to_string(), value);
        self
    }

    /// A field that is dropped entirely when `value` is `None`.
    pub(crate) fn opt(mut self, key: &str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.to_string(), value);
        }
        self
    }

    /// A field that is dropped entirely when `values` is empty.
    pub(crate) fn arr(mut self, key: &str, values: Vec<Value>) -> Self {
        if !values.is_empty() {
            self.map.insert(key.to_string(), Value::Array(values));
        }
        self
    }

    pub(crate) fn build(self) -> Value {
        Value::Object(self.map)
    }
}
