mod entity;
mod entity_schema;
mod field_schema;
mod key;
mod sequence;
mod store;
mod value;

pub use entity::Entity;
pub use entity_schema::EntitySchema;
pub use field_schema::FieldSchema;
pub use key::{Id, Key, PathElement};
pub use sequence::IdSequence;
pub use store::{MapStore, StoreTrait};
pub use value::Value;

use serde::{Deserialize, Serialize};

/// Name of an entity type in the datastore's key space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKind(String);

impl EntityKind {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityKind {
    fn from(name: &str) -> Self {
        EntityKind(name.to_string())
    }
}

impl From<String> for EntityKind {
    fn from(name: String) -> Self {
        EntityKind(name)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Name of a declared field on an entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldType(String);

impl FieldType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType(name.to_string())
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        FieldType(name)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
