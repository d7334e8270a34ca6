//! Typing of bind values given as text on the command line.

use rusqlite::types::Value;

/// `NULL` (any case) → Null, integers → Integer, decimals → Real,
/// anything else → Text. Single quotes force text: `'1979'` binds "1979".
pub fn parse_bind(raw: &str) -> Value {
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return Value::Text(raw[1..raw.len() - 1].to_string());
    }

    if raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }

    // f64::from_str also takes "inf" and "NaN"; keep those as text.
    let numeric = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && raw.chars().any(|c| c.is_ascii_digit());

    if numeric && let Ok(f) = raw.parse::<f64>() {
        return Value::Real(f);
    }

    Value::Text(raw.to_string())
}

pub fn parse_binds<S: AsRef<str>>(raw: &[S]) -> Vec<Value> {
    raw.iter().map(|r| parse_bind(r.as_ref())).collect()
}
