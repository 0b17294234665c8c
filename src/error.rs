use thiserror::Error;

use crate::data::{EntityKind, FieldType};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("malformed fixture: {0}")]
    MalformedFixture(String),

    #[error("fixture node is missing __kind__")]
    MissingKind,

    #[error("no entity kind registered for __kind__ {0:?}")]
    UnresolvedKind(String),

    #[error("unknown entity kind: {0}")]
    UnknownKind(EntityKind),

    #[error("unknown field {1} on entity kind {0}")]
    UnknownField(EntityKind, FieldType),

    #[error("invalid value for field {field}: {reason}")]
    InvalidFieldValue { field: FieldType, reason: String },

    #[error("field {0} is not a reference field")]
    NotAReference(FieldType),

    #[error("invalid reserved key {0:?}")]
    InvalidReservedKey(String),
}
