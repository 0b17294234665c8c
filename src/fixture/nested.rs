use std::collections::HashMap;
use std::path::Path;

use log::{debug, trace};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::data::{Entity, FieldType, Id, Key, StoreTrait, Value};
use crate::fixture::{coerce::coerce, read_nodes, reserved, KindRef, PostProcessor};
use crate::{Error, Result};

/// Load a nested fixture file: a JSON array of node objects where children
/// are embedded under `__children__` (materialized as datastore
/// descendants) and `__children__<field>__` (materialized as standalone
/// records referencing this one through `<field>`).
///
/// Returns the persisted instances in depth-first, file-declared order:
/// each record precedes its children, default children precede named
/// collections.
pub fn load_fixture<S: StoreTrait>(
    store: &mut S,
    path: impl AsRef<Path>,
    kinds: &KindRef,
    mut post_processor: Option<PostProcessor<'_>>,
) -> Result<Vec<Entity>> {
    let path = path.as_ref();
    let nodes = read_nodes(path)?;

    let mut loaded = Vec::new();
    for node in &nodes {
        loaded.extend(load_node(
            store,
            node,
            kinds,
            &mut post_processor,
            None,
            &HashMap::new(),
        )?);
    }
    debug!("loaded {} entities from {}", loaded.len(), path.display());
    Ok(loaded)
}

/// Materialize one node and, recursively, its children collections.
/// `presets` force field values regardless of what the node declares; the
/// named-children recursion uses them to inject the parent's key.
fn load_node<S: StoreTrait>(
    store: &mut S,
    node: &JsonMap<String, JsonValue>,
    kinds: &KindRef,
    post_processor: &mut Option<PostProcessor<'_>>,
    parent: Option<&Key>,
    presets: &HashMap<FieldType, Value>,
) -> Result<Vec<Entity>> {
    let kind = kinds.resolve(node)?.clone();
    let schema = store.entity_schema(&kind)?.clone();

    let id = node.get(reserved::ID).map(Id::try_from).transpose()?;
    let mut entity = store.create_entity(&kind, id, parent.cloned())?;

    for (name, raw) in node.iter().filter(|(name, _)| reserved::is_plain_field(name.as_str())) {
        let field_type = FieldType::from(name.as_str());
        let field_schema = schema
            .field(&field_type)
            .ok_or_else(|| Error::UnknownField(kind.clone(), field_type.clone()))?;
        let value = match presets.get(&field_type) {
            Some(preset) => Some(preset.clone()),
            None => coerce(field_schema, raw)?,
        };
        entity.set(field_type, value);
    }
    for (field_type, preset) in presets {
        if node.contains_key(field_type.as_str()) {
            continue;
        }
        if schema.field(field_type).is_none() {
            return Err(Error::UnknownField(kind.clone(), field_type.clone()));
        }
        entity.set(field_type.clone(), Some(preset.clone()));
    }

    if let Some(post) = post_processor {
        post(&mut entity);
    }

    // Children keys embed this key, so the save cannot wait.
    let key = store.save(&mut entity)?;
    trace!("materialized {key}");

    let mut loaded = vec![entity];

    if let Some(raw) = node.get(reserved::CHILDREN) {
        for child in children_nodes(reserved::CHILDREN, raw)? {
            loaded.extend(load_node(
                store,
                child,
                kinds,
                post_processor,
                Some(&key),
                &HashMap::new(),
            )?);
        }
    }

    for (name, raw) in node.iter() {
        let Some(field) = reserved::children_field(name) else {
            continue;
        };
        let presets = HashMap::from([(FieldType::from(field), Value::Key(key.clone()))]);
        for child in children_nodes(name, raw)? {
            loaded.extend(load_node(store, child, kinds, post_processor, None, &presets)?);
        }
    }

    Ok(loaded)
}

fn children_nodes<'a>(
    name: &str,
    raw: &'a JsonValue,
) -> Result<Vec<&'a JsonMap<String, JsonValue>>> {
    let items = raw
        .as_array()
        .ok_or_else(|| Error::MalformedFixture(format!("{name} must be an array of nodes")))?;
    items
        .iter()
        .map(|item| {
            item.as_object()
                .ok_or_else(|| Error::MalformedFixture(format!("{name} entries must be objects")))
        })
        .collect()
}
