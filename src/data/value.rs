use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::{Date, PrimitiveDateTime, Time};

use crate::data::Key;

/// A typed field value as held by an entity instance.
///
/// `Key` and `KeyList` carry reference fields (single and repeated); `List`
/// carries every other repeated kind; `Json` is an opaque payload kept
/// exactly as decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(PrimitiveDateTime),
    Date(Date),
    Time(Time),
    Json(JsonValue),
    Key(Key),
    KeyList(Vec<Key>),
    List(Vec<Value>),
}

impl Value {
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_date_time(&self) -> bool {
        matches!(self, Value::DateTime(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Value::Time(_))
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Value::Json(_))
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Value::Key(_))
    }

    pub fn is_key_list(&self) -> bool {
        matches!(self, Value::KeyList(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(f) = self {
            Some(*f)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn as_date_time(&self) -> Option<PrimitiveDateTime> {
        if let Value::DateTime(dt) = self {
            Some(*dt)
        } else {
            None
        }
    }

    pub fn as_date(&self) -> Option<Date> {
        if let Value::Date(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    pub fn as_time(&self) -> Option<Time> {
        if let Value::Time(t) = self {
            Some(*t)
        } else {
            None
        }
    }

    pub fn as_json(&self) -> Option<&JsonValue> {
        if let Value::Json(j) = self {
            Some(j)
        } else {
            None
        }
    }

    pub fn as_key(&self) -> Option<&Key> {
        if let Value::Key(k) = self {
            Some(k)
        } else {
            None
        }
    }

    pub fn as_key_list(&self) -> Option<&Vec<Key>> {
        if let Value::KeyList(k) = self {
            Some(k)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Value::List(v) = self {
            Some(v)
        } else {
            None
        }
    }
}
