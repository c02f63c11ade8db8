use serde_json::{Value, json};

use crate::domain::FieldPath;
use crate::form::{FieldError, FormStore};

fn schema_with_named_minimums() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "minLength": 1},
            "tags": {
                "type": "array",
                "items": {"type": "string", "minLength": 1}
            }
        }
    })
}

#[test]
fn reads_and_writes_nested_paths() {
    let mut store = FormStore::new(json!({"server": {"host": "localhost"}}));
    let host = FieldPath::parse("server.host");
    assert_eq!(store.value_at(&host), &json!("localhost"));
    store.set_value(&host, json!("0.0.0.0"));
    assert_eq!(store.values(), &json!({"server": {"host": "0.0.0.0"}}));
}

#[test]
fn index_paths_write_into_arrays() {
    let mut store = FormStore::new(json!({"tags": ["a", "b"]}));
    store.set_value(&FieldPath::parse("tags[1]"), json!("z"));
    assert_eq!(store.values(), &json!({"tags": ["a", "z"]}));
}

#[test]
fn absent_values_read_as_null() {
    let store = FormStore::new(json!({}));
    assert_eq!(store.value_at(&FieldPath::parse("missing.deep")), &Value::Null);
}

#[test]
fn non_object_roots_are_replaced() {
    let store = FormStore::new(json!("nope"));
    assert_eq!(store.values(), &json!({}));
}

#[test]
fn errors_attach_at_the_failing_pointer() {
    let store =
        FormStore::with_schema(json!({"name": ""}), &schema_with_named_minimums()).unwrap();
    let name = FieldPath::parse("name");
    assert!(store.has_error(&name));
    assert!(matches!(store.error(&name), Some(FieldError::Single(_))));
    assert_eq!(store.error_count(), 1);
    assert!(!store.is_valid());
}

#[test]
fn errors_stay_hidden_until_the_field_is_touched() {
    let mut store =
        FormStore::with_schema(json!({"name": ""}), &schema_with_named_minimums()).unwrap();
    let name = FieldPath::parse("name");
    assert!(!store.shows_error(&name));
    store.mark_touched(&name);
    assert!(store.shows_error(&name));
}

#[test]
fn writes_revalidate_immediately() {
    let mut store =
        FormStore::with_schema(json!({"name": ""}), &schema_with_named_minimums()).unwrap();
    let name = FieldPath::parse("name");
    store.set_value(&name, json!("ada"));
    assert!(store.is_valid());
    store.set_value(&name, json!(""));
    assert!(!store.is_valid());
}

#[test]
fn row_errors_gather_under_the_array_field_in_row_order() {
    let mut store = FormStore::with_schema(
        json!({"name": "ok", "tags": ["", "fine", ""]}),
        &schema_with_named_minimums(),
    )
    .unwrap();
    let tags = FieldPath::parse("tags");
    let Some(FieldError::Many(messages)) = store.error(&tags) else {
        panic!("expected gathered row errors");
    };
    assert_eq!(messages.len(), 2);

    store.mark_touched(&tags);
    let joined = store.view("tags").help_line(None).unwrap();
    assert_eq!(joined, messages.join(", "));
}

#[test]
fn submit_returns_the_value_tree_when_clean() {
    let mut store =
        FormStore::with_schema(json!({"name": "ada"}), &schema_with_named_minimums()).unwrap();
    let value = store.try_submit().unwrap();
    assert_eq!(value, json!({"name": "ada"}));
}

#[test]
fn rejected_submit_reveals_every_failing_field() {
    let mut store = FormStore::with_schema(
        json!({"name": "", "tags": [""]}),
        &schema_with_named_minimums(),
    )
    .unwrap();
    let rejected = store.try_submit().unwrap_err();
    assert_eq!(rejected.issues, 2);
    assert!(store.shows_error(&FieldPath::parse("name")));
    // row errors also reveal the enclosing array field
    assert!(store.shows_error(&FieldPath::parse("tags")));
}

#[test]
fn dirty_tracks_writes() {
    let mut store = FormStore::new(json!({"name": "x"}));
    assert!(!store.is_dirty());
    store.field("name").set_text("y");
    assert!(store.is_dirty());
}

#[test]
fn binding_reads_typed_views_of_the_value() {
    let mut store = FormStore::new(json!({
        "accept": true,
        "name": "ada",
        "tags": ["a", "b"]
    }));
    assert!(store.field("accept").flag());
    assert_eq!(store.field("name").text(), "ada");
    assert_eq!(store.field("tags").items(), vec!["a", "b"]);
    assert_eq!(store.view("missing").text(), "");
    assert!(!store.view("name").flag());
}

#[test]
fn stores_without_a_schema_never_error() {
    let mut store = FormStore::new(json!({}));
    let path = FieldPath::parse("anything");
    store.set_value(&path, json!(42));
    store.mark_touched(&path);
    assert!(store.is_valid());
    assert_eq!(store.error(&path), None);
}

#[test]
fn rejects_an_invalid_schema() {
    let result = FormStore::with_schema(json!({}), &json!({"type": "not-a-type"}));
    assert!(result.is_err());
}
