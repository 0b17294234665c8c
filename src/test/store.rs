use serde_json::json;

use crate::*;

fn ft(name: &str) -> FieldType {
    FieldType::from(name)
}

fn kind(name: &str) -> EntityKind {
    EntityKind::from(name)
}

fn customer_schema() -> EntitySchema {
    let mut schema = EntitySchema::new("Customer");
    schema.fields.insert(
        ft("name"),
        FieldSchema::String {
            field_type: ft("name"),
            repeated: false,
        },
    );
    schema
}

fn purchase_schema() -> EntitySchema {
    let mut schema = EntitySchema::new("Purchase");
    schema.fields.insert(
        ft("price"),
        FieldSchema::Int {
            field_type: ft("price"),
            repeated: false,
        },
    );
    schema
}

fn setup() -> MapStore {
    let mut store = MapStore::new();
    store.set_entity_schema(customer_schema());
    store.set_entity_schema(purchase_schema());
    store
}

#[test]
fn auto_ids_are_sequential_from_one() {
    let mut store = setup();

    let mut first = store.create_entity(&kind("Customer"), None, None).unwrap();
    let mut second = store.create_entity(&kind("Customer"), None, None).unwrap();
    let first_key = store.save(&mut first).unwrap();
    let second_key = store.save(&mut second).unwrap();

    assert_eq!(first_key, skey!("Customer", 1));
    assert_eq!(second_key, skey!("Customer", 2));
}

#[test]
fn explicit_ids_are_kept() {
    let mut store = setup();

    let mut entity = store
        .create_entity(&kind("Customer"), Some(Id::from("jdoe")), None)
        .unwrap();
    let key = store.save(&mut entity).unwrap();

    assert_eq!(key, skey!("Customer", "jdoe"));
    assert!(store.get(&skey!("Customer", "jdoe")).is_some());
}

#[test]
fn parent_keys_prefix_the_path() {
    let mut store = setup();
    let parent = skey!("Customer", "jdoe");

    let mut entity = store
        .create_entity(&kind("Purchase"), None, Some(parent.clone()))
        .unwrap();
    let key = store.save(&mut entity).unwrap();

    assert_eq!(key, skey!("Customer", "jdoe", "Purchase", 1));
    assert_eq!(key.parent(), Some(parent.clone()));
    assert!(parent.is_ancestor_of(&key));
    assert!(!key.is_ancestor_of(&parent));
}

#[test]
fn save_is_an_upsert() {
    let mut store = setup();

    let mut original = store
        .create_entity(&kind("Customer"), Some(Id::from("jdoe")), None)
        .unwrap();
    original.set("name", sstr!("John"));
    store.save(&mut original).unwrap();

    let mut replacement = store
        .create_entity(&kind("Customer"), Some(Id::from("jdoe")), None)
        .unwrap();
    replacement.set("name", sstr!("Johnny"));
    store.save(&mut replacement).unwrap();

    assert_eq!(store.count(&kind("Customer")), 1);
    let stored = store.get(&skey!("Customer", "jdoe")).unwrap();
    assert_eq!(stored.field(&ft("name")), Some(&Value::String("Johnny".to_string())));
}

#[test]
fn unknown_kinds_are_rejected() {
    let store = setup();
    let err = store.create_entity(&kind("Ghost"), None, None).unwrap_err();
    assert!(matches!(err, Error::UnknownKind(k) if k == kind("Ghost")));
}

#[test]
fn find_filters_on_field_equality() {
    let mut store = setup();
    for name in ["John", "Jane", "John"] {
        let mut entity = store.create_entity(&kind("Customer"), None, None).unwrap();
        entity.set("name", sstr!(name));
        store.save(&mut entity).unwrap();
    }

    let johns = store.find(
        &kind("Customer"),
        &ft("name"),
        &Value::String("John".to_string()),
    );
    assert_eq!(johns.len(), 2);
    assert_eq!(johns[0].key, Some(skey!("Customer", 1)));
    assert_eq!(johns[1].key, Some(skey!("Customer", 3)));
}

#[test]
fn ancestor_queries_scope_to_the_subtree() {
    let mut store = setup();
    let john = skey!("Customer", "john");
    let jane = skey!("Customer", "jane");

    let mut under_john = store
        .create_entity(&kind("Purchase"), None, Some(john.clone()))
        .unwrap();
    store.save(&mut under_john).unwrap();
    let mut under_jane = store
        .create_entity(&kind("Purchase"), None, Some(jane.clone()))
        .unwrap();
    store.save(&mut under_jane).unwrap();
    let mut standalone = store.create_entity(&kind("Purchase"), None, None).unwrap();
    store.save(&mut standalone).unwrap();

    assert_eq!(store.ancestor_query(&kind("Purchase"), &john).len(), 1);
    assert_eq!(store.ancestor_query(&kind("Purchase"), &jane).len(), 1);
    assert_eq!(store.count(&kind("Purchase")), 3);
}

#[test]
fn key_macro_builds_ancestor_paths() {
    let key = skey!("Person", "jdoe", "Purchase", 1);
    assert_eq!(key.kind(), &EntityKind::from("Purchase"));
    assert_eq!(key.id(), &Id::Int(1));
    assert_eq!(key.parent(), Some(skey!("Person", "jdoe")));
    assert_eq!(skey!("Person", "jdoe").parent(), None);
    assert_eq!(key.to_string(), "Person:jdoe/Purchase:1");
}

#[test]
fn key_tuples_parse_alternating_kinds_and_ids() {
    let key = Key::from_tuple(&json!(["Person", "jdoe", "Purchase", 1])).unwrap();
    assert_eq!(key, skey!("Person", "jdoe", "Purchase", 1));
}

#[test]
fn key_tuples_reject_unpaired_elements() {
    let err = Key::from_tuple(&json!(["Person", "jdoe", "Purchase"])).unwrap_err();
    assert!(matches!(err, Error::MalformedFixture(_)));
    let err = Key::from_tuple(&json!([])).unwrap_err();
    assert!(matches!(err, Error::MalformedFixture(_)));
}

#[test]
fn key_tuples_reject_non_string_kinds() {
    let err = Key::from_tuple(&json!([1, "jdoe"])).unwrap_err();
    assert!(matches!(err, Error::MalformedFixture(_)));
}
