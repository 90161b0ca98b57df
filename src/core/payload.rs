//! Request payload access
//!
//! Mutating requests carry their fields under a `data` key. The payload is
//! kept as loose JSON until it has passed the validation pipeline, because the
//! validators deliberately reason about truthiness rather than types.

use serde_json::{Map, Number, Value};

/// The `data` object of a request body
///
/// An absent body, an absent `data` key or a `data` value that is not an
/// object all behave like `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Build a payload from a full request body (`{ "data": { ... } }`)
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self::from_data(map.remove("data").unwrap_or(Value::Null)),
            _ => Self::default(),
        }
    }

    /// Build a payload from the `data` value itself
    pub fn from_data(data: Value) -> Self {
        match data {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Get the raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the field is present with a truthy value
    pub fn is_truthy(&self, field: &str) -> bool {
        self.get(field).is_some_and(is_truthy)
    }

    /// Read a field as text
    ///
    /// Strings are returned as-is; other non-null scalars are rendered as
    /// their JSON text.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Read a field as a JSON number
    pub fn number(&self, field: &str) -> Option<Number> {
        match self.get(field)? {
            Value::Number(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Read a field as an array
    pub fn array(&self, field: &str) -> Option<&Vec<Value>> {
        self.get(field)?.as_array()
    }

    /// Consume the payload, returning the underlying object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render an id-like value for messages: strings without quotes, anything
/// else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
