use std::path::Path;

use log::{debug, trace};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::data::{Entity, FieldType, Id, Key, StoreTrait, Value};
use crate::fixture::reserved::RefForm;
use crate::fixture::{coerce::coerce, read_nodes, reserved, KindRef, PostProcessor};
use crate::{Error, Result};

/// Load a flat fixture file: a JSON array of self-contained node objects.
/// Ancestry comes from explicit `__key__` / `__parent__` tuples and
/// references from `<field>__key__` / `<field>__id__` assignments; nested
/// children are not supported in this format.
///
/// Records are persisted strictly in document order, and the post-processor
/// runs after each save — flat post-processors may rely on the durable key
/// being assigned.
pub fn load_fixture_flat<S: StoreTrait>(
    store: &mut S,
    path: impl AsRef<Path>,
    kinds: &KindRef,
    mut post_processor: Option<PostProcessor<'_>>,
) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    let nodes = read_nodes(path)?;

    let mut loaded = Vec::with_capacity(nodes.len());
    for node in &nodes {
        loaded.push(load_node(store, node, kinds, &mut post_processor)?);
    }
    debug!("loaded {} entities from {}", loaded.len(), path.display());
    Ok(loaded)
}

fn load_node<S: StoreTrait>(
    store: &mut S,
    node: &JsonMap<String, JsonValue>,
    kinds: &KindRef,
    post_processor: &mut Option<PostProcessor<'_>>,
) -> Result<Entity> {
    let kind = kinds.resolve(node)?.clone();
    let schema = store.entity_schema(&kind)?.clone();

    let mut entity = match node.get(reserved::KEY) {
        Some(raw) => {
            let key = Key::from_tuple(raw)?;
            if key.kind() != &kind {
                return Err(Error::MalformedFixture(format!(
                    "__key__ kind {} does not match the resolved kind {}",
                    key.kind(),
                    kind
                )));
            }
            store.create_entity_with_key(key)?
        }
        None => {
            let parent = node.get(reserved::PARENT).map(Key::from_tuple).transpose()?;
            let id = node.get(reserved::ID).map(Id::try_from).transpose()?;
            store.create_entity(&kind, id, parent)?
        }
    };

    for (name, raw) in node.iter().filter(|(name, _)| reserved::is_plain_field(name.as_str())) {
        let field_type = FieldType::from(name.as_str());
        let field_schema = schema
            .field(&field_type)
            .ok_or_else(|| Error::UnknownField(kind.clone(), field_type.clone()))?;
        let value = coerce(field_schema, raw)?;
        entity.set(field_type, value);
    }

    // Suffixed reference assignments override any plain value for the same
    // field name.
    for (name, raw) in node.iter() {
        if name.starts_with("__") || !name.ends_with("__") {
            continue;
        }
        let (field, form) = reserved::reference_field(name)
            .ok_or_else(|| Error::InvalidReservedKey(name.clone()))?;
        let field_type = FieldType::from(field);
        let field_schema = schema
            .field(&field_type)
            .ok_or_else(|| Error::UnknownField(kind.clone(), field_type.clone()))?;

        let value = match form {
            RefForm::Key => {
                if field_schema.is_repeated() {
                    let items = reference_items(name, raw)?;
                    let keys = items
                        .iter()
                        .map(Key::from_tuple)
                        .collect::<Result<Vec<Key>>>()?;
                    Value::KeyList(keys)
                } else {
                    Value::Key(Key::from_tuple(raw)?)
                }
            }
            RefForm::Id => {
                let target = field_schema
                    .reference_kind()
                    .ok_or_else(|| Error::NotAReference(field_type.clone()))?;
                if field_schema.is_repeated() {
                    let items = reference_items(name, raw)?;
                    let keys = items
                        .iter()
                        .map(|raw_id| Ok(Key::new(target.clone(), Id::try_from(raw_id)?)))
                        .collect::<Result<Vec<Key>>>()?;
                    Value::KeyList(keys)
                } else {
                    Value::Key(Key::new(target.clone(), Id::try_from(raw)?))
                }
            }
        };
        entity.set(field_type, Some(value));
    }

    let key = store.save(&mut entity)?;
    trace!("materialized {key}");

    if let Some(post) = post_processor {
        post(&mut entity);
    }

    Ok(entity)
}

fn reference_items<'a>(name: &str, raw: &'a JsonValue) -> Result<&'a Vec<JsonValue>> {
    raw.as_array().ok_or_else(|| {
        Error::MalformedFixture(format!("{name} on a repeated field must be an array"))
    })
}
