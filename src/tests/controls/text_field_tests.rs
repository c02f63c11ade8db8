use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use crate::controls::{FormControl, TextField};
use crate::form::FormStore;
use crate::tests::{key, line_text, type_text};

#[test]
fn typing_writes_through_to_the_store() {
    let mut store = FormStore::new(json!({"name": ""}));
    let mut field = TextField::new("name", "Name");
    type_text(&mut field, &mut store, "ada");
    assert_eq!(store.view("name").text(), "ada");
}

#[test]
fn backspace_pops_and_delete_clears() {
    let mut store = FormStore::new(json!({"name": "ada"}));
    let mut field = TextField::new("name", "Name");
    field.handle_key(&key(KeyCode::Backspace), &mut store);
    assert_eq!(store.view("name").text(), "ad");
    field.handle_key(&key(KeyCode::Delete), &mut store);
    assert_eq!(store.view("name").text(), "");
    // nothing left to erase
    assert!(!field.handle_key(&key(KeyCode::Backspace), &mut store));
}

#[test]
fn control_modified_characters_are_ignored() {
    let mut store = FormStore::new(json!({"name": ""}));
    let mut field = TextField::new("name", "Name");
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert!(!field.handle_key(&ctrl_a, &mut store));
    assert_eq!(store.view("name").text(), "");
}

#[test]
fn error_replaces_helper_text_only_after_blur() {
    let schema = json!({
        "type": "object",
        "properties": {"name": {"type": "string", "minLength": 5}}
    });
    let mut store = FormStore::with_schema(json!({"name": ""}), &schema).unwrap();
    let mut field = TextField::new("name", "Name").with_helper_text("your full name");

    type_text(&mut field, &mut store, "ada");
    let lines = field.lines(&store, true);
    assert_eq!(line_text(&lines[2]), "your full name");

    field.blur(&mut store);
    let lines = field.lines(&store, true);
    assert_ne!(line_text(&lines[2]), "your full name");
    assert!(store.shows_error(field.name()));
}

#[test]
fn placeholder_shows_only_while_empty_and_unfocused() {
    let store = FormStore::new(json!({"name": ""}));
    let field = TextField::new("name", "Name").with_placeholder("e.g. Ada");
    assert!(line_text(&field.lines(&store, false)[1]).contains("e.g. Ada"));
    assert!(!line_text(&field.lines(&store, true)[1]).contains("e.g. Ada"));
}
