use serde_json::{Map, Value};

/// Unwraps typed store values (`{"stringValue": "x"}`) into plain JSON.
pub fn decode_value(v: &Value) -> Value {
    let Some(obj) = v.as_object() else {
        return v.clone();
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return v.clone();
    };
    match kind.as_str() {
        "nullValue" => Value::Null,
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "stringValue" | "booleanValue" | "doubleValue" | "timestampValue" | "referenceValue"
        | "bytesValue" | "geoPointValue" => inner.clone(),
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => Value::Object(decode_fields(fields)),
            None => Value::Object(Map::new()),
        },
        "arrayValue" => match inner.get("values").and_then(Value::as_array) {
            Some(values) => Value::Array(values.iter().map(decode_value).collect()),
            None => Value::Array(Vec::new()),
        },
        _ => v.clone(),
    }
}

pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), decode_value(v)))
        .collect()
}

#[cfg(test)]
#[path = "../tests/store/values_tests.rs"]
mod tests;
