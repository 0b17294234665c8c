use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{EntityKind, FieldSchema, FieldType};

/// The declared fields of one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub fields: HashMap<FieldType, FieldSchema>,
}

impl EntitySchema {
    pub fn new(kind: impl Into<EntityKind>) -> Self {
        EntitySchema {
            kind: kind.into(),
            fields: HashMap::new(),
        }
    }

    pub fn field(&self, field_type: &FieldType) -> Option<&FieldSchema> {
        self.fields.get(field_type)
    }
}
