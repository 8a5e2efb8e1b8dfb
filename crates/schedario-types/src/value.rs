use serde::{Deserialize, Serialize};

/// Scalar value of a feature property as found in the source document.
///
/// Variant order matters for `untagged` deserialization: integers are tried before
/// floats so identifiers such as `gid` keep their exact textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Nested(serde_json::Value),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        is_empty(self)
    }
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::Null
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropertyValue::Null)
    }
}

/// Canonicalize a raw property value into its display string.
///
/// - `null` becomes the empty string
/// - finite numbers become their decimal form, non-finite numbers become empty
/// - strings are trimmed, and the literal tokens `null`/`undefined` (any case) become empty
///
/// This function and [`is_empty`] are the only emptiness authority in the workspace;
/// every output target goes through them.
pub fn normalize(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Null => String::new(),
        PropertyValue::Bool(flag) => flag.to_string(),
        PropertyValue::Integer(number) => number.to_string(),
        PropertyValue::Float(number) => format_number(*number),
        PropertyValue::Text(text) => normalize_str(text),
        PropertyValue::Nested(serde_json::Value::String(text)) => normalize_str(text),
        PropertyValue::Nested(serde_json::Value::Null) => String::new(),
        PropertyValue::Nested(other) => other.to_string(),
    }
}

/// String flavour of [`normalize`], used when a value has already been extracted.
pub fn normalize_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("null") || trimmed.eq_ignore_ascii_case("undefined") {
        return String::new();
    }
    trimmed.to_string()
}

/// True iff the value normalizes to the empty string.
pub fn is_empty(value: &PropertyValue) -> bool {
    normalize(value).is_empty()
}

fn format_number(number: f64) -> String {
    if !number.is_finite() {
        return String::new();
    }
    // Integral values print without a fractional part; -0 prints as 0.
    if number.fract() == 0.0 && number.abs() < 1e15 {
        return format!("{}", number as i64);
    }
    format!("{}", number)
}
