use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use smallvec::SmallVec;

use crate::data::EntityKind;
use crate::{Error, Result};

/// Identifier of an entity within its kind: either assigned by the caller
/// (string or integer) or allocated by the datastore (integer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Id {
    Int(i64),
    Name(String),
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Id::Int(id)
    }
}

impl From<i32> for Id {
    fn from(id: i32) -> Self {
        Id::Int(id as i64)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Name(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id::Name(id)
    }
}

impl TryFrom<&JsonValue> for Id {
    type Error = Error;

    fn try_from(raw: &JsonValue) -> Result<Self> {
        if let Some(name) = raw.as_str() {
            Ok(Id::Name(name.to_string()))
        } else if let Some(id) = raw.as_i64() {
            Ok(Id::Int(id))
        } else {
            Err(Error::MalformedFixture(format!(
                "expected a string or integer id, got {raw}"
            )))
        }
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Int(id) => id.fmt(f),
            Id::Name(name) => name.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathElement {
    pub kind: EntityKind,
    pub id: Id,
}

/// Durable address of an entity: a non-empty path of kind/id pairs where
/// every leading pair names an ancestor of the leaf entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    path: SmallVec<[PathElement; 2]>,
}

impl Key {
    pub fn new(kind: impl Into<EntityKind>, id: impl Into<Id>) -> Self {
        let mut path = SmallVec::new();
        path.push(PathElement {
            kind: kind.into(),
            id: id.into(),
        });
        Key { path }
    }

    /// Parse a JSON key tuple of alternating kind and id scalars, e.g.
    /// `["Person", "jdoe", "Purchase", 1]`.
    pub fn from_tuple(raw: &JsonValue) -> Result<Self> {
        let parts = raw
            .as_array()
            .ok_or_else(|| Error::MalformedFixture(format!("expected a key tuple, got {raw}")))?;
        if parts.is_empty() || parts.len() % 2 != 0 {
            return Err(Error::MalformedFixture(format!(
                "a key tuple holds kind/id pairs, got {} elements",
                parts.len()
            )));
        }

        let mut path = SmallVec::new();
        for pair in parts.chunks(2) {
            let kind = pair[0].as_str().ok_or_else(|| {
                Error::MalformedFixture(format!("key tuple kind must be a string, got {}", pair[0]))
            })?;
            path.push(PathElement {
                kind: EntityKind::from(kind),
                id: Id::try_from(&pair[1])?,
            });
        }
        Ok(Key { path })
    }

    /// Prefix this key's path with an ancestor's path.
    pub fn with_ancestor(self, ancestor: &Key) -> Self {
        let mut path = ancestor.path.clone();
        path.extend(self.path);
        Key { path }
    }

    /// The key one level up the ancestor chain, `None` for root keys.
    pub fn parent(&self) -> Option<Key> {
        if self.path.len() < 2 {
            return None;
        }
        Some(Key {
            path: self.path[..self.path.len() - 1].iter().cloned().collect(),
        })
    }

    pub fn kind(&self) -> &EntityKind {
        &self.path[self.path.len() - 1].kind
    }

    pub fn id(&self) -> &Id {
        &self.path[self.path.len() - 1].id
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.path
    }

    /// Whether `other` lives strictly below this key in the key space.
    pub fn is_ancestor_of(&self, other: &Key) -> bool {
        other.path.len() > self.path.len() && other.path[..self.path.len()] == self.path[..]
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, element) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}:{}", element.kind, element.id)?;
        }
        Ok(())
    }
}
