use std::collections::HashMap;

use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::data::EntityKind;
use crate::fixture::reserved;
use crate::{Error, Result};

/// Which entity kind(s) a fixture file materializes into: a single kind
/// applied to every node, or a map consulted through each node's
/// `__kind__` discriminator.
#[derive(Debug, Clone)]
pub enum KindRef {
    Single(EntityKind),
    Map(HashMap<String, EntityKind>),
}

impl KindRef {
    pub fn single(kind: impl Into<EntityKind>) -> Self {
        KindRef::Single(kind.into())
    }

    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<EntityKind>,
    {
        KindRef::Map(
            pairs
                .into_iter()
                .map(|(name, kind)| (name.into(), kind.into()))
                .collect(),
        )
    }

    /// Concrete kind for one node. A single-kind reference ignores any
    /// discriminator the node carries; a map requires one.
    pub fn resolve(&self, node: &JsonMap<String, JsonValue>) -> Result<&EntityKind> {
        match self {
            KindRef::Single(kind) => Ok(kind),
            KindRef::Map(kinds) => {
                let name = node
                    .get(reserved::KIND)
                    .and_then(JsonValue::as_str)
                    .ok_or(Error::MissingKind)?;
                kinds
                    .get(name)
                    .ok_or_else(|| Error::UnresolvedKind(name.to_string()))
            }
        }
    }
}

impl From<&str> for KindRef {
    fn from(kind: &str) -> Self {
        KindRef::Single(EntityKind::from(kind))
    }
}

impl From<EntityKind> for KindRef {
    fn from(kind: EntityKind) -> Self {
        KindRef::Single(kind)
    }
}

impl From<HashMap<String, EntityKind>> for KindRef {
    fn from(kinds: HashMap<String, EntityKind>) -> Self {
        KindRef::Map(kinds)
    }
}
