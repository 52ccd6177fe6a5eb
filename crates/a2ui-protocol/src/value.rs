//! Dynamic payload values
//!
//! [`Value`] is the closed universe of data a producer may hand over in a
//! component tree. Seven variants form the JSON-serializable subset; the other
//! three model runtime content a dynamic host can leak into a payload and that
//! must be rejected before rendering.

use crate::path::NodePath;
use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

/// Ordered string-keyed mapping of values
pub type Map = IndexMap<String, Value>;

/// A JSON-like value, possibly carrying non-serializable runtime content
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integral number, exact over the whole `i64` and `u64` range
    Integer(i128),
    /// Floating-point number; only finite numbers are serializable
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered sequence
    Array(Vec<Value>),
    /// String-keyed mapping, insertion ordered
    Object(Map),
    /// Explicit "absent" sentinel
    Undefined,
    /// Executable content, identified by name
    Function(String),
    /// Host handle with no data representation
    Opaque(String),
}

/// Why a value cannot be serialized, and where
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at {path}")]
pub struct NonSerializable {
    /// Location relative to the value that was checked
    pub path: NodePath,
    /// Short description of the offending value
    pub reason: String,
}

impl Value {
    /// Name of the variant, as used in diagnostics
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) | Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Undefined => "undefined",
            Self::Function(_) => "function",
            Self::Opaque(_) => "opaque handle",
        }
    }

    /// Check for `null`
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as mapping
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow as array
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key if this is a mapping
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Locate the first non-serializable value, depth first
    ///
    /// The returned path is relative to `self` (empty when `self` itself is
    /// the offender).
    #[must_use]
    pub fn find_non_serializable(&self) -> Option<NonSerializable> {
        self.scan(&NodePath::empty())
    }

    /// Check that the whole value belongs to the serializable universe
    #[inline]
    #[must_use]
    pub fn is_serializable(&self) -> bool {
        self.find_non_serializable().is_none()
    }

    fn scan(&self, at: &NodePath) -> Option<NonSerializable> {
        let reason = match self {
            Self::Null | Self::Bool(_) | Self::String(_) => return None,
            Self::Integer(n) if json_integer(*n).is_some() => return None,
            Self::Integer(n) => format!("integer {n} outside the JSON range"),
            Self::Number(n) if n.is_finite() => return None,
            Self::Number(n) => format!("non-finite number {n}"),
            Self::Array(items) => {
                return items
                    .iter()
                    .enumerate()
                    .find_map(|(i, item)| item.scan(&at.index(i)));
            }
            Self::Object(map) => {
                return map.iter().find_map(|(k, v)| v.scan(&at.key(k.as_str())));
            }
            Self::Undefined => "undefined value".to_string(),
            Self::Function(name) => format!("function '{name}'"),
            Self::Opaque(what) => format!("opaque handle '{what}'"),
        };
        Some(NonSerializable {
            path: at.clone(),
            reason,
        })
    }

    /// Convert to a `serde_json::Value`
    ///
    /// # Errors
    /// Returns the first non-serializable location.
    pub fn to_json(&self) -> Result<serde_json::Value, NonSerializable> {
        if let Some(err) = self.find_non_serializable() {
            return Err(err);
        }
        Ok(self.to_json_unchecked())
    }

    fn to_json_unchecked(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Integer(n) => {
                json_integer(*n).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json_unchecked).collect())
            }
            Self::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_unchecked()))
                    .collect(),
            ),
            Self::Null | Self::Undefined | Self::Function(_) | Self::Opaque(_) => {
                serde_json::Value::Null
            }
        }
    }
}

/// JSON number for an integer within `i64` or `u64`
fn json_integer(n: i128) -> Option<serde_json::Number> {
    i64::try_from(n)
        .map(serde_json::Number::from)
        .or_else(|_| u64::try_from(n).map(serde_json::Number::from))
        .ok()
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Integer(i.into()),
                (None, Some(u)) => Self::Integer(u.into()),
                (None, None) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
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
        Self::Integer(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Integer(n.into())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => json_integer(*n)
                .ok_or_else(|| S::Error::custom(format!("integer {n} outside the JSON range")))?
                .serialize(serializer),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(map) => serializer.collect_map(map),
            other => Err(S::Error::custom(format!(
                "cannot serialize {}",
                other.kind_name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_values_are_serializable() {
        let value = Value::from(json!({
            "title": "AI Market",
            "value": 196,
            "tags": ["a", "b", null],
            "nested": { "ok": true, "ratio": 0.25 }
        }));
        assert!(value.is_serializable());
    }

    #[test]
    fn finds_nested_function() {
        let mut inner = Map::new();
        inner.insert("label".into(), Value::from("x"));
        inner.insert("onClick".into(), Value::Function("handleClick".into()));
        let value = Value::Array(vec![Value::Null, Value::Object(inner)]);

        let err = value.find_non_serializable().unwrap();
        assert_eq!(err.path.to_string(), "[1].onClick");
        assert!(err.reason.contains("handleClick"));
    }

    #[test]
    fn rejects_undefined_opaque_and_non_finite() {
        assert!(!Value::Undefined.is_serializable());
        assert!(!Value::Opaque("socket".into()).is_serializable());
        assert!(!Value::Number(f64::NAN).is_serializable());
        assert!(!Value::Number(f64::INFINITY).is_serializable());
        assert!(Value::Number(-0.5).is_serializable());
    }

    #[test]
    fn to_json_keeps_integers_integral() {
        let value = Value::from(json!({"count": 3, "ratio": 1.5}));
        assert_eq!(value.to_json().unwrap(), json!({"count": 3, "ratio": 1.5}));
    }

    #[test]
    fn to_json_keeps_large_integers_exact() {
        let source = json!({
            "n": 9_007_199_254_740_993_u64,
            "max": u64::MAX,
            "min": i64::MIN,
            "ratio": 1.0
        });
        let value = Value::from(source.clone());
        assert_eq!(value.get("n"), Some(&Value::Integer(9_007_199_254_740_993)));
        assert_eq!(value.to_json().unwrap(), source);
        assert_eq!(serde_json::to_value(&value).unwrap(), source);
    }

    #[test]
    fn integers_beyond_json_are_rejected() {
        let value = Value::Array(vec![Value::from(1_i64), Value::Integer(i128::MAX)]);
        let err = value.find_non_serializable().unwrap();
        assert_eq!(err.path.to_string(), "[1]");
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn serialize_fails_on_function() {
        let value = Value::Array(vec![Value::Function("f".into())]);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn deserializes_from_json_text() {
        let value: Value = serde_json::from_str(r#"{"a":[1,2],"b":null}"#).unwrap();
        assert_eq!(value.get("a").and_then(Value::as_array).map(<[_]>::len), Some(2));
        assert!(value.get("b").unwrap().is_null());
    }
}
