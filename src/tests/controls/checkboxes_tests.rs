use crossterm::event::KeyCode;
use serde_json::json;

use crate::controls::{Checkboxes, FormControl};
use crate::domain::Choice;
use crate::form::FormStore;
use crate::tests::{key, line_text};

fn fruit_choices() -> Vec<Choice> {
    vec![
        Choice::new("apple", "Apple"),
        Choice::new("avocado", "Avocado"),
        Choice::new("grapes", "Grapes"),
    ]
}

fn fruit_control() -> Checkboxes {
    Checkboxes::new("fruits", fruit_choices()).with_label("Fruit")
}

#[test]
fn toggling_on_appends_in_order_of_discovery() {
    let mut store = FormStore::new(json!({"fruits": ["apple", "grapes"]}));
    let mut control = fruit_control();

    // highlight avocado, toggle it on
    control.handle_key(&key(KeyCode::Right), &mut store);
    control.handle_key(&key(KeyCode::Char(' ')), &mut store);

    assert_eq!(
        store.try_submit().unwrap(),
        json!({"fruits": ["apple", "grapes", "avocado"]})
    );
}

#[test]
fn toggling_off_removes_the_first_occurrence() {
    let mut store = FormStore::new(json!({"fruits": ["apple", "grapes"]}));
    let mut control = fruit_control();

    control.handle_key(&key(KeyCode::Char(' ')), &mut store); // apple off
    control.handle_key(&key(KeyCode::Right), &mut store);
    control.handle_key(&key(KeyCode::Right), &mut store);
    control.handle_key(&key(KeyCode::Char(' ')), &mut store); // grapes off

    assert_eq!(store.try_submit().unwrap(), json!({"fruits": []}));
}

#[test]
fn toggle_round_trips_for_an_absent_value() {
    let mut store = FormStore::new(json!({"fruits": ["grapes"]}));
    let mut control = fruit_control();

    control.handle_key(&key(KeyCode::Char(' ')), &mut store);
    assert_eq!(store.view("fruits").items(), vec!["grapes", "apple"]);
    control.handle_key(&key(KeyCode::Char(' ')), &mut store);
    assert_eq!(store.view("fruits").items(), vec!["grapes"]);
}

#[test]
fn toggling_never_introduces_duplicates() {
    let mut store = FormStore::new(json!({"fruits": ["apple"]}));
    let mut control = fruit_control();

    for _ in 0..5 {
        control.handle_key(&key(KeyCode::Char(' ')), &mut store);
    }
    let items = store.view("fruits").items();
    assert!(items.len() <= 1);
}

#[test]
fn checked_rows_follow_membership_not_option_order() {
    let store = FormStore::new(json!({"fruits": ["grapes", "apple"]}));
    let control = fruit_control();
    let lines = control.lines(&store, false);
    // group label, three option rows, help line
    assert_eq!(lines.len(), 5);
    assert!(line_text(&lines[1]).contains("[x] Apple"));
    assert!(line_text(&lines[2]).contains("[ ] Avocado"));
    assert!(line_text(&lines[3]).contains("[x] Grapes"));
}

#[test]
fn highlight_stops_at_the_list_edges() {
    let mut store = FormStore::new(json!({"fruits": []}));
    // tuples convert into choices
    let mut control = Checkboxes::new(
        "fruits",
        [("apple", "Apple"), ("avocado", "Avocado"), ("grapes", "Grapes")],
    );
    assert!(!control.handle_key(&key(KeyCode::Left), &mut store));
    control.handle_key(&key(KeyCode::Right), &mut store);
    control.handle_key(&key(KeyCode::Right), &mut store);
    assert!(!control.handle_key(&key(KeyCode::Right), &mut store));
}
