//! Adapter from `serde_json` values, for hosts that carry template data as JSON.

use crate::RuntimeValue;
use serde_json::Value as Json;

impl From<Json> for RuntimeValue {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => RuntimeValue::absent(),
            Json::Bool(b) => RuntimeValue::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RuntimeValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    RuntimeValue::Uint(u)
                } else {
                    n.as_f64().map_or(RuntimeValue::Invalid, RuntimeValue::Float)
                }
            }
            Json::String(s) => RuntimeValue::String(s),
            Json::Array(items) => {
                RuntimeValue::Sequence(items.into_iter().map(RuntimeValue::from).collect())
            }
            Json::Object(fields) => RuntimeValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, RuntimeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Json> for RuntimeValue {
    fn from(json: &Json) -> Self {
        RuntimeValue::from(json.clone())
    }
}
