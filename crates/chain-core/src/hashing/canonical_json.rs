//! Canonical JSON minimal: claves de objeto ordenadas, sin espacios.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap_or_default(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            let inner: Vec<String> = ordered.into_iter()
                                            .map(|(k, v)| {
                                                format!("{}:{}",
                                                        serde_json::to_string(k).unwrap_or_default(),
                                                        to_canonical_json(v))
                                            })
                                            .collect();
            format!("{{{}}}", inner.join(","))
        }
    }
}
