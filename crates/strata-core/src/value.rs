//! Runtime value model and type inference

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

/// Built-in type tags produced by [`infer_type`]
pub mod tags {
    pub const NULL: &str = "null";
    pub const UNDEFINED: &str = "undefined";
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
    pub const ARRAY: &str = "array";
    pub const OBJECT: &str = "object";

    /// All structural tags, in registration order
    pub const ALL: [&str; 8] = [NULL, UNDEFINED, STRING, NUMBER, BOOLEAN, DATE, ARRAY, OBJECT];
}

/// JSON key marking a tagged value: `{"$type": "money", "value": 12.5}`
pub const TYPE_KEY: &str = "$type";
const VALUE_KEY: &str = "value";

/// Data to be rendered
///
/// Objects keep their entries in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    /// A value carrying an explicit type tag, preferred by dispatch over its structure
    Tagged { tag: String, value: Box<Value> },
}

impl Value {
    /// Wrap a value with an explicit type tag
    pub fn tagged(tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Tagged {
            tag: tag.into(),
            value: Box::new(value.into()),
        }
    }

    /// Build an object from ordered entries
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// True for tagged values
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Tagged { .. })
    }

    /// The value with any explicit type tags stripped
    pub fn untagged(&self) -> &Value {
        let mut current = self;
        while let Self::Tagged { value, .. } = current {
            current = value;
        }
        current
    }

    /// Look up an object entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Convert from JSON. With `detect_dates`, RFC 3339 strings become [`Value::Date`].
    pub fn from_json(json: serde_json::Value, detect_dates: bool) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => {
                if detect_dates {
                    if let Ok(date) = DateTime::parse_from_rfc3339(&s) {
                        return Self::Date(date.with_timezone(&Utc));
                    }
                }
                Self::String(s)
            }
            serde_json::Value::Array(items) => Self::Array(
                items
                    .into_iter()
                    .map(|item| Self::from_json(item, detect_dates))
                    .collect(),
            ),
            serde_json::Value::Object(map) => Self::from_json_object(map, detect_dates),
        }
    }

    fn from_json_object(mut map: Map<String, serde_json::Value>, detect_dates: bool) -> Self {
        let is_tagged = map.len() == 2
            && map.get(TYPE_KEY).is_some_and(|t| t.is_string())
            && map.contains_key(VALUE_KEY);

        if is_tagged {
            if let (Some(serde_json::Value::String(tag)), Some(inner)) =
                (map.remove(TYPE_KEY), map.remove(VALUE_KEY))
            {
                return Self::Tagged {
                    tag,
                    value: Box::new(Self::from_json(inner, detect_dates)),
                };
            }
        }

        Self::Object(
            map.into_iter()
                .map(|(k, v)| (k, Self::from_json(v, detect_dates)))
                .collect(),
        )
    }

    /// Convert to JSON. Dates become ISO-8601 strings, `undefined` and
    /// non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null | Self::Undefined => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => serde_json::Value::String(format_date(d)),
            Self::Array(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Tagged { tag, value } => {
                let mut map = Map::new();
                map.insert(TYPE_KEY.to_string(), serde_json::Value::String(tag.clone()));
                map.insert(VALUE_KEY.to_string(), value.to_json());
                serde_json::Value::Object(map)
            }
        }
    }
}

/// Classify a value to its type tag
///
/// Tagged values report their explicit tag.
pub fn infer_type(data: &Value) -> &str {
    match data {
        Value::Null => tags::NULL,
        Value::Undefined => tags::UNDEFINED,
        Value::Bool(_) => tags::BOOLEAN,
        Value::Number(_) => tags::NUMBER,
        Value::String(_) => tags::STRING,
        Value::Date(_) => tags::DATE,
        Value::Array(_) => tags::ARRAY,
        Value::Object(_) => tags::OBJECT,
        Value::Tagged { tag, .. } => tag,
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Largest magnitude at which every integer is exactly representable in an `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// JSON number, or `null` when not finite.
///
/// Integral values within the safe integer range are written without a
/// fractional part, so `2.0` goes out as `2`.
pub fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(|json| Self::from_json(json, false))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json, false)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
