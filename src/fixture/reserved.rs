//! Reserved fixture-node keys. Everything else in a node is a field
//! assignment; field names never start or end with the `__` delimiter.

/// Kind discriminator, read when loading against a kind map.
pub const KIND: &str = "__kind__";
/// Explicit identifier for the record.
pub const ID: &str = "__id__";
/// Explicit full key (kind, id and ancestry), flat fixtures only.
pub const KEY: &str = "__key__";
/// Explicit parent key tuple, flat fixtures only.
pub const PARENT: &str = "__parent__";
/// Default children collection: nodes materialized under this record's key.
pub const CHILDREN: &str = "__children__";

/// Suffix marking a field assignment whose raw value is a key tuple.
pub const KEY_SUFFIX: &str = "__key__";
/// Suffix marking a field assignment whose raw value is a bare id of the
/// field's declared reference kind.
pub const ID_SUFFIX: &str = "__id__";

/// How a suffixed reference assignment spells its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefForm {
    Key,
    Id,
}

/// Whether `key` is an ordinary field assignment.
pub fn is_plain_field(key: &str) -> bool {
    !key.starts_with("__") && !key.ends_with("__")
}

/// Target field of a `__children__<field>__` collection. `None` for the
/// default collection and for anything that is not a children key.
pub fn children_field(key: &str) -> Option<&str> {
    key.strip_prefix(CHILDREN)?.strip_suffix("__")
}

/// Split a `<field>__key__` / `<field>__id__` reference assignment.
pub fn reference_field(key: &str) -> Option<(&str, RefForm)> {
    if key.starts_with("__") {
        return None;
    }
    if let Some(field) = key.strip_suffix(KEY_SUFFIX) {
        return Some((field, RefForm::Key));
    }
    if let Some(field) = key.strip_suffix(ID_SUFFIX) {
        return Some((field, RefForm::Id));
    }
    None
}
