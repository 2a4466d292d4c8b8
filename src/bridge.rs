//! JSON <-> Value conversion and the public encode/decode entry points

use crate::error::*;
use crate::tags::*;
use crate::types::*;
use serde_json::{Map, Number, Value as JsonValue};

/// Convert a parsed JSON tree to a Value, reconstructing tagged objects.
///
/// Objects are handled innermost-first: the fields of an object are converted
/// before the object itself is inspected, so nested tagged objects resolve
/// before their parent.
pub fn from_json(json: &JsonValue, registry: &TagRegistry) -> Result<Value> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Ok(Value::Float(0.0))
            }
        }
        JsonValue::String(s) => Ok(Value::Str(s.clone())),
        JsonValue::Array(arr) => {
            let items = arr
                .iter()
                .map(|v| from_json(v, registry))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::List(items))
        }
        JsonValue::Object(obj) => decode_object(obj, registry),
    }
}

/// Decoder hook, invoked once per JSON object.
///
/// A recognized discriminator hands the remaining fields to the registered
/// reconstruction function; a failure there propagates and fails the whole
/// decode. An unrecognized discriminator (including a non-string one) is
/// stripped and the rest of the object kept as a plain map.
fn decode_object(obj: &Map<String, JsonValue>, registry: &TagRegistry) -> Result<Value> {
    let revive = obj
        .get(TYPE_TAG)
        .and_then(JsonValue::as_str)
        .and_then(|tag| registry.get(tag));

    if let Some(revive) = revive {
        let mut fields = obj.clone();
        fields.remove(TYPE_TAG);
        return revive(&fields);
    }

    let mut entries = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        if key == TYPE_TAG {
            continue;
        }
        entries.push(MapEntry::new(key.clone(), from_json(value, registry)?));
    }
    Ok(Value::Map(entries))
}

/// Convert a Value to a JSON tree, rendering temporal values as tagged
/// objects.
///
/// Fails on values JSON cannot represent: non-finite floats, and durations
/// whose total microsecond count overflows.
pub fn to_json(value: &Value) -> Result<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Int(n) => Ok(JsonValue::Number(Number::from(*n))),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or_else(|| TagError::Unserializable(format!("non-finite float: {f}"))),
        Value::Str(s) => Ok(JsonValue::String(s.clone())),
        Value::List(items) => {
            let arr = items.iter().map(to_json).collect::<Result<Vec<_>>>()?;
            Ok(JsonValue::Array(arr))
        }
        Value::Map(entries) => {
            let mut map = Map::new();
            for entry in entries {
                map.insert(entry.key.clone(), to_json(&entry.value)?);
            }
            Ok(JsonValue::Object(map))
        }
        Value::Timestamp(t) => Ok(timestamp_to_tagged(t)),
        Value::Duration(d) => duration_to_tagged(d),
    }
}

/// Encode a value as compact JSON text.
pub fn encode(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&to_json(value)?)?)
}

/// Encode a value as indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json(value)?)?)
}

/// Decode JSON text with the built-in tag registry.
pub fn decode(text: &str) -> Result<Value> {
    decode_with(text, &TagRegistry::builtin())
}

/// Decode JSON text, reconstructing tagged objects through `registry`.
pub fn decode_with(text: &str, registry: &TagRegistry) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(text)?;
    from_json(&json, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builtin() -> TagRegistry {
        TagRegistry::builtin()
    }

    #[test]
    fn test_from_json_null() {
        let v = from_json(&json!(null), &builtin()).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn test_from_json_bool() {
        let v = from_json(&json!(true), &builtin()).unwrap();
        assert_eq!(v.as_bool(), Some(true));
    }

    #[test]
    fn test_from_json_int() {
        let v = from_json(&json!(42), &builtin()).unwrap();
        assert_eq!(v.as_int(), Some(42));
    }

    #[test]
    fn test_from_json_float() {
        let v = from_json(&json!(3.14), &builtin()).unwrap();
        assert_eq!(v.as_float(), Some(3.14));
    }

    #[test]
    fn test_from_json_string() {
        let v = from_json(&json!("hello"), &builtin()).unwrap();
        assert_eq!(v.as_str(), Some("hello"));
    }

    #[test]
    fn test_from_json_array() {
        let v = from_json(&json!([1, 2, 3]), &builtin()).unwrap();
        assert!(v.is_list());
        assert_eq!(v.as_list().unwrap().len(), 3);
    }

    #[test]
    fn test_from_json_object() {
        let v = from_json(&json!({"a": 1, "b": 2}), &builtin()).unwrap();
        assert!(v.is_map());
        assert_eq!(v.get("a").and_then(|v| v.as_int()), Some(1));
    }

    #[test]
    fn test_plain_roundtrip() {
        let original = json!({
            "name": "Alice",
            "age": 30,
            "active": true,
            "scores": [95, 87, 92]
        });

        let v = from_json(&original, &builtin()).unwrap();
        let restored = to_json(&v).unwrap();

        assert_eq!(original, restored);
    }

    #[test]
    fn test_nan_is_not_serializable() {
        let err = to_json(&Value::float(f64::NAN)).unwrap_err();
        assert!(matches!(err, TagError::Unserializable(_)));
    }
}
