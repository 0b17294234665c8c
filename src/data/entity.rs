use std::collections::HashMap;

use crate::data::{EntityKind, FieldType, Id, Key, Value};

/// An in-memory record instance. Before `save` the key may be incomplete
/// (id pending allocation); after `save` the instance carries its durable
/// key and is the caller's handle onto the persisted record.
///
/// Field slots hold `Option<Value>`: a fixture may assign an explicit null,
/// which is kept distinct from the field never being set at all.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub id: Option<Id>,
    pub parent: Option<Key>,
    pub key: Option<Key>,
    pub fields: HashMap<FieldType, Option<Value>>,
}

impl Entity {
    pub fn new(kind: EntityKind, id: Option<Id>, parent: Option<Key>) -> Self {
        Entity {
            kind,
            id,
            parent,
            key: None,
            fields: HashMap::new(),
        }
    }

    /// Construct with a fully specified key (kind, id and ancestry).
    pub fn with_key(key: Key) -> Self {
        Entity {
            kind: key.kind().clone(),
            id: Some(key.id().clone()),
            parent: key.parent(),
            key: Some(key),
            fields: HashMap::new(),
        }
    }

    pub fn set(&mut self, field_type: impl Into<FieldType>, value: Option<Value>) {
        self.fields.insert(field_type.into(), value);
    }

    /// The field's value, flattening never-set and set-to-null to `None`.
    pub fn field(&self, field_type: &FieldType) -> Option<&Value> {
        self.fields.get(field_type).and_then(|slot| slot.as_ref())
    }
}
