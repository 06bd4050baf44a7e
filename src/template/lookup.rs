use serde_json::Value;

/// Walks a dotted path (`listingInfo.Author.name`) through nested objects.
///
/// Any segment that is missing, or that would index into something other than
/// an object, is a miss.
pub fn resolve<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.trim()
        .split('.')
        .try_fold(data, |current, key| current.as_object()?.get(key))
}

/// Falsy values are `null`, `false`, zero, and empty strings, arrays or objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Text substituted for a value. `null` has no text.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Resolves and stringifies in one step, keeping hit/miss visible.
pub fn interpolate(data: &Value, path: &str) -> Option<String> {
    resolve(data, path).and_then(stringify)
}
