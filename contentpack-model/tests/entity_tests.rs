use contentpack_model::{ConfigValue, ContentPack, Entity, EntityConfigIndex, EntityId, ValueType};
use pretty_assertions::assert_eq;

// An input entity as the host supplies it: top-level fields plus a nested
// configuration block.
fn make_input_entity() -> Entity {
    Entity::new(
        "111-beef",
        "1.0",
        [
            ("name".to_string(), ConfigValue::string("Input")),
            ("title".to_string(), ConfigValue::string("A good input")),
            (
                "configuration".to_string(),
                ConfigValue::nested([
                    (
                        "listen_address".to_string(),
                        ConfigValue::string("1.2.3.4"),
                    ),
                    ("port".to_string(), ConfigValue::integer(23)),
                ]),
            ),
        ],
    )
}

// ── Entity access ────────────────────────────────────────────────

#[test]
fn get_top_level_field() {
    let e = make_input_entity();
    assert_eq!(e.get("title"), Some(&ConfigValue::string("A good input")));
}

#[test]
fn get_nested_field_by_dot_path() {
    let e = make_input_entity();
    assert_eq!(
        e.get("configuration.listen_address"),
        Some(&ConfigValue::string("1.2.3.4"))
    );
}

#[test]
fn get_missing_field() {
    let e = make_input_entity();
    assert_eq!(e.get("configuration.missing"), None);
    assert_eq!(e.get("nope"), None);
}

#[test]
fn get_path_through_leaf_is_none() {
    let e = make_input_entity();
    assert_eq!(e.get("title.nested"), None);
}

#[test]
fn config_keys_flatten_nested_fields() {
    let e = make_input_entity();
    assert_eq!(
        e.config_keys(),
        vec![
            "configuration.listen_address".to_string(),
            "configuration.port".to_string(),
            "name".to_string(),
            "title".to_string(),
        ]
    );
}

// ── ConfigValue ──────────────────────────────────────────────────

#[test]
fn leaf_values_are_bindable_nested_are_not() {
    let e = make_input_entity();
    assert!(e.get("title").unwrap().is_leaf());
    assert!(!e.get("configuration").unwrap().is_leaf());
}

// ── Serde format ─────────────────────────────────────────────────

#[test]
fn entity_roundtrip_from_host_json() {
    let json = r#"{
        "id": "111-beef",
        "v": "1.0",
        "data": {
            "name": { "type": "string", "value": "Input" },
            "title": { "type": "string", "value": "A good input" },
            "configuration": {
                "listen_address": { "type": "string", "value": "1.2.3.4" },
                "port": { "type": "integer", "value": 23 }
            }
        }
    }"#;
    let e: Entity = serde_json::from_str(json).unwrap();
    assert_eq!(e.id, EntityId::from("111-beef"));
    assert_eq!(e.v, "1.0");
    match e.get("configuration.port") {
        Some(ConfigValue::Value { value_type, value }) => {
            assert_eq!(*value_type, ValueType::Integer);
            assert_eq!(value, &serde_json::json!(23));
        }
        other => panic!("expected integer leaf, got {other:?}"),
    }

    let back = serde_json::to_value(&e).unwrap();
    assert_eq!(back["data"]["title"]["type"], "string");
    assert_eq!(back["data"]["configuration"]["port"]["value"], 23);
}

#[test]
fn content_pack_defaults_to_empty() {
    let pack: ContentPack = serde_json::from_str("{}").unwrap();
    assert!(pack.parameters.is_empty());
    assert!(pack.entities.is_empty());
}

// ── EntityConfigIndex ────────────────────────────────────────────

#[test]
fn index_finds_entity_by_id() {
    let entities = vec![make_input_entity()];
    let index = EntityConfigIndex::new(&entities);
    let id = EntityId::from("111-beef");
    assert_eq!(index.entity(&id).unwrap().v, "1.0");
    assert!(index.entity(&EntityId::from("dead-beef")).is_none());
}

#[test]
fn index_config_keys_for_unknown_entity_is_empty() {
    let entities = vec![make_input_entity()];
    let index = EntityConfigIndex::new(&entities);
    assert!(index.config_keys(&EntityId::from("dead-beef")).is_empty());
}

#[test]
fn index_bindable_means_leaf() {
    let entities = vec![make_input_entity()];
    let index = EntityConfigIndex::new(&entities);
    let id = EntityId::from("111-beef");
    assert!(index.is_bindable(&id, "configuration.listen_address"));
    assert!(!index.is_bindable(&id, "configuration"));
    assert!(!index.is_bindable(&id, "missing"));
}
