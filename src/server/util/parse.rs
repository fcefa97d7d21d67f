use serde_json::Value;

/// Reports whether a JSON value counts as present for a required field.
///
/// `null`, `false`, zero, the empty string and empty arrays or objects are all
/// treated as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Converts a JSON value to an integer the way a lenient form field would be read.
///
/// - Integers are taken as-is
/// - Floats are truncated toward zero
/// - Strings must hold an optionally signed run of ASCII digits, surrounding
///   whitespace ignored; single underscores may separate digits (`"1_000"`)
/// - `true` and `false` become `1` and `0`
///
/// # Returns
/// - `Some(i64)` - The converted integer
/// - `None` - The value is not convertible or does not fit in an `i64`
pub fn coerce_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?.trunc();
            (f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => parse_integer_literal(s.trim()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_integer_literal(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }

    s.replace('_', "").parse::<i64>().ok()
}
