use crossterm::event::KeyCode;
use serde_json::json;

use crate::controls::{DateField, FormControl};
use crate::form::FormStore;
use crate::tests::{key, type_text};

#[test]
fn arrow_keys_step_the_formatted_date() {
    let mut store = FormStore::new(json!({"born": "2024-02-28"}));
    let mut field = DateField::new("born", "Date of birth", "%Y-%m-%d");

    field.handle_key(&key(KeyCode::Right), &mut store);
    assert_eq!(store.view("born").text(), "2024-02-29");
    field.handle_key(&key(KeyCode::Left), &mut store);
    assert_eq!(store.view("born").text(), "2024-02-28");
}

#[test]
fn stepping_respects_the_callers_format_pattern() {
    let mut store = FormStore::new(json!({"born": "28/02/2023"}));
    let mut field = DateField::new("born", "Date of birth", "%d/%m/%Y");
    field.handle_key(&key(KeyCode::Right), &mut store);
    assert_eq!(store.view("born").text(), "01/03/2023");
}

#[test]
fn arrows_do_nothing_while_the_text_does_not_parse() {
    let mut store = FormStore::new(json!({"born": ""}));
    let mut field = DateField::new("born", "Date of birth", "%Y-%m-%d");
    assert!(!field.handle_key(&key(KeyCode::Right), &mut store));
    assert_eq!(store.view("born").text(), "");
}

#[test]
fn text_edits_flow_through_the_same_write_path() {
    let mut store = FormStore::new(json!({"born": ""}));
    let mut field = DateField::new("born", "Date of birth", "%Y-%m-%d");
    type_text(&mut field, &mut store, "2020-01-01");
    assert_eq!(store.view("born").text(), "2020-01-01");
    // an emptied selection stays the empty string
    field.handle_key(&key(KeyCode::Delete), &mut store);
    assert_eq!(store.view("born").text(), "");
}
