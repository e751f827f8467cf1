//! A minimal model of SurrealQL values, sufficient for composing statements
//! and round-tripping results over the JSON rpc protocol.

use std::collections::BTreeMap;
use std::time::Duration;

use bigdecimal::BigDecimal;
use chrono::{DateTime, SecondsFormat, Utc};

/// Named bind variables of a query.
pub type Vars = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SurrealQL NONE: the field is absent.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(BigDecimal),
    Strand(String),
    Datetime(DateTime<Utc>),
    Duration(Duration),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Encodes this value for the JSON rpc wire. Datetimes travel as RFC 3339
    /// strings, durations as SurrealQL duration strings, bytes as base64.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::None => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Decimal(d) => serde_json::Value::String(d.to_string()),
            Value::Strand(s) => serde_json::Value::String(s.clone()),
            Value::Datetime(dt) => {
                serde_json::Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Duration(d) => serde_json::Value::String(render_duration(d)),
            Value::Bytes(b) => serde_json::Value::String(base64::encode(b)),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    /// Decodes a JSON rpc result into a value. Strings stay strings: the
    /// caller knows which fields it expects to be temporal and re-parses.
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Strand(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Renders this value as a SurrealQL literal, for the places where a bind
    /// variable cannot appear (DEFINE FIELD defaults, computed id
    /// expressions).
    pub fn to_surql(&self) -> String {
        match self {
            Value::None => "NONE".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{:.1}", f)
                } else {
                    format!("{}", f)
                }
            }
            Value::Decimal(d) => format!("{}dec", d),
            Value::Strand(s) => quote_strand(s),
            Value::Datetime(dt) => {
                format!("d'{}'", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Duration(d) => render_duration(d),
            Value::Bytes(b) => {
                format!("encoding::base64::decode({})", quote_strand(&base64::encode(b)))
            }
            Value::Array(items) => {
                let inner: Vec<String> = items.iter().map(Value::to_surql).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Object(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("{}: {}", quote_key(k), v.to_surql()))
                    .collect();
                format!("{{ {} }}", inner.join(", "))
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Strand(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_array(self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<BTreeMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Re-parses a wire string into a datetime, accepting what `to_json`
    /// emits.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Datetime(dt) => Some(*dt),
            Value::Strand(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Strand(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Strand(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Value {
        Value::Datetime(dt)
    }
}

// SurrealQL s'…' strings escape the backslash and the quote character.
fn quote_strand(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    out.push_str("s'");
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn quote_key(k: &str) -> String {
    let plain = !k.is_empty()
        && k.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        k.to_string()
    } else {
        quote_strand(k)
    }
}

fn render_duration(d: &Duration) -> String {
    const UNITS: &[(u128, &str)] = &[
        (3_600_000_000_000, "h"),
        (60_000_000_000, "m"),
        (1_000_000_000, "s"),
        (1_000_000, "ms"),
        (1_000, "us"),
        (1, "ns"),
    ];
    let mut nanos = d.as_nanos();
    if nanos == 0 {
        return "0ns".to_string();
    }
    let mut out = String::new();
    for (unit, suffix) in UNITS {
        let n = nanos / unit;
        if n > 0 {
            out.push_str(&format!("{}{}", n, suffix));
            nanos -= n * unit;
        }
    }
    out
}
