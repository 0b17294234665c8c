use ahash::AHashMap;

use crate::data::{Entity, EntityKind, EntitySchema, FieldType, Id, IdSequence, Key, Value};
use crate::{Error, Result};

/// The datastore surface the fixture loaders are written against: schema
/// lookup, instance construction and synchronous persistence. Saves are
/// strongly ordered; a record's key is final once `save` returns.
pub trait StoreTrait {
    fn entity_schema(&self, kind: &EntityKind) -> Result<&EntitySchema>;

    fn create_entity(
        &self,
        kind: &EntityKind,
        id: Option<Id>,
        parent: Option<Key>,
    ) -> Result<Entity>;

    fn create_entity_with_key(&self, key: Key) -> Result<Entity>;

    fn save(&mut self, entity: &mut Entity) -> Result<Key>;
}

/// In-memory datastore: a schema registry plus persisted records indexed by
/// key, with the equality and ancestor queries test code needs.
pub struct MapStore {
    schemas: AHashMap<EntityKind, EntitySchema>,
    records: AHashMap<Key, Entity>,
    order: Vec<Key>,
    sequence: IdSequence,
}

impl MapStore {
    pub fn new() -> Self {
        MapStore {
            schemas: AHashMap::new(),
            records: AHashMap::new(),
            order: Vec::new(),
            sequence: IdSequence::new(),
        }
    }

    pub fn set_entity_schema(&mut self, schema: EntitySchema) {
        self.schemas.insert(schema.kind.clone(), schema);
    }

    pub fn get(&self, key: &Key) -> Option<&Entity> {
        self.records.get(key)
    }

    pub fn count(&self, kind: &EntityKind) -> usize {
        self.order
            .iter()
            .filter(|key| key.kind() == kind)
            .count()
    }

    /// Persisted records of `kind` whose `field_type` equals `value`, in
    /// insertion order.
    pub fn find(&self, kind: &EntityKind, field_type: &FieldType, value: &Value) -> Vec<&Entity> {
        self.order
            .iter()
            .filter(|key| key.kind() == kind)
            .filter_map(|key| self.records.get(key))
            .filter(|entity| entity.field(field_type) == Some(value))
            .collect()
    }

    /// Persisted records of `kind` anywhere below `ancestor`, in insertion
    /// order.
    pub fn ancestor_query(&self, kind: &EntityKind, ancestor: &Key) -> Vec<&Entity> {
        self.order
            .iter()
            .filter(|key| key.kind() == kind && ancestor.is_ancestor_of(key))
            .filter_map(|key| self.records.get(key))
            .collect()
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreTrait for MapStore {
    fn entity_schema(&self, kind: &EntityKind) -> Result<&EntitySchema> {
        self.schemas
            .get(kind)
            .ok_or_else(|| Error::UnknownKind(kind.clone()))
    }

    fn create_entity(
        &self,
        kind: &EntityKind,
        id: Option<Id>,
        parent: Option<Key>,
    ) -> Result<Entity> {
        if !self.schemas.contains_key(kind) {
            return Err(Error::UnknownKind(kind.clone()));
        }
        Ok(Entity::new(kind.clone(), id, parent))
    }

    fn create_entity_with_key(&self, key: Key) -> Result<Entity> {
        if !self.schemas.contains_key(key.kind()) {
            return Err(Error::UnknownKind(key.kind().clone()));
        }
        Ok(Entity::with_key(key))
    }

    fn save(&mut self, entity: &mut Entity) -> Result<Key> {
        if !self.schemas.contains_key(&entity.kind) {
            return Err(Error::UnknownKind(entity.kind.clone()));
        }

        let key = match &entity.key {
            Some(key) => key.clone(),
            None => {
                let id = entity
                    .id
                    .clone()
                    .unwrap_or_else(|| Id::Int(self.sequence.generate()));
                let leaf = Key::new(entity.kind.clone(), id);
                match &entity.parent {
                    Some(parent) => leaf.with_ancestor(parent),
                    None => leaf,
                }
            }
        };

        entity.id = Some(key.id().clone());
        entity.key = Some(key.clone());

        // put() semantics: saving to an existing key replaces the record.
        if self.records.insert(key.clone(), entity.clone()).is_none() {
            self.order.push(key.clone());
        }
        Ok(key)
    }
}
