use serde::{Deserialize, Serialize};

use crate::data::{EntityKind, FieldType};

/// Declared shape of a single field: its semantic kind and whether it holds
/// a list of values. `Reference` fields additionally name the entity kind
/// their keys point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldSchema {
    Bool {
        field_type: FieldType,
        repeated: bool,
    },
    Int {
        field_type: FieldType,
        repeated: bool,
    },
    Float {
        field_type: FieldType,
        repeated: bool,
    },
    String {
        field_type: FieldType,
        repeated: bool,
    },
    DateTime {
        field_type: FieldType,
        repeated: bool,
    },
    Date {
        field_type: FieldType,
        repeated: bool,
    },
    Time {
        field_type: FieldType,
        repeated: bool,
    },
    Json {
        field_type: FieldType,
        repeated: bool,
    },
    Reference {
        field_type: FieldType,
        kind: EntityKind,
        repeated: bool,
    },
}

impl FieldSchema {
    pub fn field_type(&self) -> &FieldType {
        match self {
            FieldSchema::Bool { field_type, .. }
            | FieldSchema::Int { field_type, .. }
            | FieldSchema::Float { field_type, .. }
            | FieldSchema::String { field_type, .. }
            | FieldSchema::DateTime { field_type, .. }
            | FieldSchema::Date { field_type, .. }
            | FieldSchema::Time { field_type, .. }
            | FieldSchema::Json { field_type, .. }
            | FieldSchema::Reference { field_type, .. } => field_type,
        }
    }

    pub fn is_repeated(&self) -> bool {
        match self {
            FieldSchema::Bool { repeated, .. }
            | FieldSchema::Int { repeated, .. }
            | FieldSchema::Float { repeated, .. }
            | FieldSchema::String { repeated, .. }
            | FieldSchema::DateTime { repeated, .. }
            | FieldSchema::Date { repeated, .. }
            | FieldSchema::Time { repeated, .. }
            | FieldSchema::Json { repeated, .. }
            | FieldSchema::Reference { repeated, .. } => *repeated,
        }
    }

    /// Target kind for reference fields, `None` otherwise.
    pub fn reference_kind(&self) -> Option<&EntityKind> {
        match self {
            FieldSchema::Reference { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
