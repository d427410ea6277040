use serde_json::{Map, Value};
use std::fmt;

/// Renders an optional field inside a wrapper's `Display` output; an
/// absent value prints as `none` instead of faulting.
pub(crate) struct OptField<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OptField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("none"),
        }
    }
}

/// Raw field map backing every resource wrapper.
///
/// Wrapping never fails: `None`, `null`, or a non-object payload all
/// produce an empty map, and every lookup returns `None` for a missing
/// key or a value of the wrong JSON type. No validation, no coercion.
#[derive(Clone, Debug, Default)]
pub struct Fields(Map<String, Value>);

impl Fields {
    pub fn wrap(raw: Option<Value>) -> Self {
        match raw {
            Some(Value::Object(map)) => Fields(map),
            _ => Fields(Map::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn int_field(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    pub fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// Looks up a string one level inside a nested object, e.g. the
    /// `login` of an `owner`. Absent object or key is `None`, not a fault.
    pub fn nested_str(&self, object: &str, key: &str) -> Option<&str> {
        self.object_field(object)
            .and_then(|obj| obj.get(key))
            .and_then(Value::as_str)
    }

    pub fn as_inner(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Value> for Fields {
    fn from(value: Value) -> Self {
        Fields::wrap(Some(value))
    }
}
