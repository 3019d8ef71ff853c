//! Owned JSON value tree handed to the inference engine.
//!
//! Parsing is delegated to `serde_json` (built with `preserve_order`, so object
//! keys keep document order). The only thing this layer adds is an explicit
//! storage hint on every number, so numeric classification never has to inspect
//! a value at runtime.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// How a number was stored by whoever produced the tree.
///
/// `serde_json` only ever produces `Int`, `Int64`, `Float64` and `Other`
/// (unsigned integers beyond `i64::MAX`). The narrower kinds exist for callers
/// that build trees from sources with richer numeric typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberStorage {
    /// Single byte / character width.
    Char,
    Short,
    Int,
    Int64,
    Float32,
    Float64,
    /// Wider than 64-bit floating point.
    Extended,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonNumber {
    pub storage: NumberStorage,
    /// Literal text of the number as it should be printed back.
    pub literal: String,
}

impl JsonNumber {
    pub fn new(storage: NumberStorage, literal: impl Into<String>) -> Self {
        Self { storage, literal: literal.into() }
    }

    /// True when the token was written with a decimal point or exponent.
    pub fn is_floating(&self) -> bool {
        matches!(
            self.storage,
            NumberStorage::Float32 | NumberStorage::Float64 | NumberStorage::Extended
        )
    }

    /// Integer value of the literal, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.literal.parse().ok()
    }
}

impl From<&Number> for JsonNumber {
    fn from(n: &Number) -> Self {
        let storage = if let Some(i) = n.as_i64() {
            if i32::try_from(i).is_ok() { NumberStorage::Int } else { NumberStorage::Int64 }
        } else if n.is_u64() {
            NumberStorage::Other
        } else {
            NumberStorage::Float64
        };
        JsonNumber { storage, literal: n.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(JsonNumber),
    String(String),
    Array(Vec<JsonValue>),
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }
}

// Conversion recurses; depth is bounded by serde_json's own recursion limit.
impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(n.into()),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(xs) => JsonValue::Array(xs.iter().map(JsonValue::from).collect()),
            Value::Object(m) => JsonValue::Object(
                m.iter().map(|(k, v)| (k.clone(), JsonValue::from(v))).collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            // a literal that isn't valid JSON number syntax has nothing faithful to print
            JsonValue::Number(n) => n
                .literal
                .parse::<Number>()
                .map(Value::Number)
                .unwrap_or(Value::Null),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(xs) => Value::Array(xs.iter().map(Value::from).collect()),
            JsonValue::Object(m) => {
                let mut out = Map::new();
                for (k, v) in m {
                    out.insert(k.clone(), Value::from(v));
                }
                Value::Object(out)
            }
        }
    }
}

/// Parse one JSON document.
pub fn parse(src: &str) -> Result<JsonValue, serde_json::Error> {
    let value = serde_json::from_str::<Value>(src)?;
    Ok(JsonValue::from(&value))
}

/// Pretty-print a value for redisplay. Key order is preserved.
pub fn pretty(value: &JsonValue) -> String {
    let value = Value::from(value);
    // serializing an in-memory `Value` into a String cannot fail
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
