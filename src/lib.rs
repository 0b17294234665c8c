pub mod data;
mod error;
pub mod fixture;

pub use data::{
    Entity, EntityKind, EntitySchema, FieldSchema, FieldType, Id, IdSequence, Key, MapStore,
    PathElement, StoreTrait, Value,
};
pub use error::{Error, Result};
pub use fixture::{coerce, load_fixture, load_fixture_flat, reserved, KindRef, PostProcessor};

/// Build a [`Key`] from alternating kind and id literals, ancestors first.
///
/// # Example
///
/// ```
/// use qseed_rs::skey;
///
/// let key = skey!("Person", "jdoe", "Purchase", 1);
/// assert_eq!(key.parent(), Some(skey!("Person", "jdoe")));
/// ```
#[macro_export]
macro_rules! skey {
    ($kind:expr, $id:expr $(,)?) => {
        $crate::Key::new($kind, $id)
    };
    ($kind:expr, $id:expr, $($rest:tt)+) => {
        $crate::skey!($($rest)+).with_ancestor(&$crate::Key::new($kind, $id))
    };
}

/// Create a `Some(Value::Bool)` for direct use in field assignments
#[macro_export]
macro_rules! sbool {
    ($value:expr) => {
        Some($crate::Value::Bool($value))
    };
}

/// Create a `Some(Value::Int)` for direct use in field assignments
#[macro_export]
macro_rules! sint {
    ($value:expr) => {
        Some($crate::Value::Int($value))
    };
}

/// Create a `Some(Value::Float)` for direct use in field assignments
#[macro_export]
macro_rules! sfloat {
    ($value:expr) => {
        Some($crate::Value::Float($value))
    };
}

/// Create a `Some(Value::String)` for direct use in field assignments
///
/// # Example
///
/// ```
/// use qseed_rs::{sstr, Value};
///
/// assert_eq!(sstr!("John"), Some(Value::String("John".to_string())));
/// ```
#[macro_export]
macro_rules! sstr {
    ($value:expr) => {
        Some($crate::Value::String($value.to_string()))
    };
}

/// Create a `Some(Value::Json)` from an already-built `serde_json::Value`
#[macro_export]
macro_rules! sjson {
    ($value:expr) => {
        Some($crate::Value::Json($value))
    };
}

/// Create a `Some(Value::Key)` for direct use in reference assignments
#[macro_export]
macro_rules! sref {
    ($value:expr) => {
        Some($crate::Value::Key($value))
    };
}

/// Create a `Some(Value::KeyList)` for direct use in repeated reference
/// assignments
#[macro_export]
macro_rules! sreflist {
    [] => {
        Some($crate::Value::KeyList(Vec::new()))
    };
    [$($value:expr),* $(,)?] => {
        Some($crate::Value::KeyList(vec![$($value),*]))
    };
}

#[cfg(test)]
mod test;
