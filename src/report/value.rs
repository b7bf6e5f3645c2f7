use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// JSON-shaped report tree whose numbers may be non-finite.
///
/// Objects keep insertion order. Serializing through serde rejects NaN and
/// infinities; run [`Value::replace_nan_with_null`] first for strict output, or
/// use [`Value::to_lenient_json`] to emit `NaN` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Marker for a missing table cell
    pub fn missing() -> Self {
        Value::Number(f64::NAN)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Replace every NaN number, at any depth, with `Null`
    pub fn replace_nan_with_null(self) -> Self {
        match self {
            Value::Number(n) if n.is_nan() => Value::Null,
            Value::Array(items) => Value::Array(
                items.into_iter().map(Value::replace_nan_with_null).collect(),
            ),
            Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.replace_nan_with_null()))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Look up an object member by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Indented JSON that writes non-finite numbers as `NaN`, `Infinity` and
    /// `-Infinity` the way tabular exporters do
    pub fn to_lenient_json(&self, indent: usize) -> String {
        LenientJson {
            value: self,
            indent,
        }
        .to_string()
    }

    fn render<W: fmt::Write>(&self, out: &mut W, indent: usize, depth: usize) -> fmt::Result {
        match self {
            Value::Null => out.write_str("null"),
            Value::Bool(b) => write!(out, "{b}"),
            Value::Number(n) => out.write_str(&format_number(*n)),
            Value::String(s) => out.write_str(&quote(s)),
            Value::Array(items) if items.is_empty() => out.write_str("[]"),
            Value::Array(items) => {
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    newline(out, indent, depth + 1)?;
                    item.render(out, indent, depth + 1)?;
                }
                newline(out, indent, depth)?;
                out.write_char(']')
            }
            Value::Object(entries) if entries.is_empty() => out.write_str("{}"),
            Value::Object(entries) => {
                out.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.write_char(',')?;
                    }
                    newline(out, indent, depth + 1)?;
                    write!(out, "{}: ", quote(key))?;
                    value.render(out, indent, depth + 1)?;
                }
                newline(out, indent, depth)?;
                out.write_char('}')
            }
        }
    }
}

struct LenientJson<'a> {
    value: &'a Value,
    indent: usize,
}

impl fmt::Display for LenientJson<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.render(f, self.indent, 0)
    }
}

fn newline<W: fmt::Write>(out: &mut W, indent: usize, depth: usize) -> fmt::Result {
    write!(out, "\n{:width$}", "", width = indent * depth)
}

fn quote(s: &str) -> String {
    // serializing a str through serde_json never fails
    serde_json::to_string(s).unwrap_or_default()
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        serde_json::Number::from_f64(n)
            .map(|num| num.to_string())
            .unwrap_or_else(|| "null".to_string())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => {
                Err(S::Error::custom(format!("non-finite number {n} in report")))
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
