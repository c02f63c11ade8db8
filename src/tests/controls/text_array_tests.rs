use crossterm::event::KeyCode;
use serde_json::json;

use crate::controls::{FormControl, TextArray};
use crate::form::FormStore;
use crate::tests::{ctrl, key, line_text, type_text};

fn tags_store(initial: serde_json::Value) -> FormStore {
    FormStore::new(json!({ "tags": initial }))
}

#[test]
fn renders_one_row_per_element() {
    for len in 0..4 {
        let items: Vec<String> = (0..len).map(|i| format!("t{i}")).collect();
        let store = tags_store(json!(items));
        let editor = TextArray::new("tags", "Tags");
        // label + rows + add hint + help line
        assert_eq!(editor.lines(&store, false).len(), 1 + len + 1 + 1);
    }
}

#[test]
fn remove_then_add_matches_the_expected_sequences() {
    let mut store = tags_store(json!(["a", "b"]));
    let mut editor = TextArray::new("tags", "Tags");

    assert!(editor.handle_key(&ctrl(KeyCode::Char('d')), &mut store));
    assert_eq!(store.view("tags").items(), vec!["b"]);

    assert!(editor.handle_key(&ctrl(KeyCode::Char('n')), &mut store));
    assert_eq!(store.view("tags").items(), vec!["b", ""]);
}

#[test]
fn add_appends_an_empty_row_and_highlights_it() {
    let mut store = tags_store(json!(["x"]));
    let mut editor = TextArray::new("tags", "Tags");
    editor.handle_key(&ctrl(KeyCode::Char('n')), &mut store);
    assert_eq!(store.view("tags").items(), vec!["x", ""]);
    assert_eq!(editor.cursor(&store), Some(1));
}

#[test]
fn remove_preserves_the_relative_order_of_the_rest() {
    let mut store = tags_store(json!(["a", "b", "c"]));
    let mut editor = TextArray::new("tags", "Tags");
    editor.handle_key(&ctrl(KeyCode::Right), &mut store);
    editor.handle_key(&ctrl(KeyCode::Char('d')), &mut store);
    assert_eq!(store.view("tags").items(), vec!["a", "c"]);
}

#[test]
fn removing_the_last_row_pulls_the_highlight_back() {
    let mut store = tags_store(json!(["a", "b"]));
    let mut editor = TextArray::new("tags", "Tags");
    editor.handle_key(&ctrl(KeyCode::Right), &mut store);
    editor.handle_key(&ctrl(KeyCode::Char('d')), &mut store);
    assert_eq!(editor.cursor(&store), Some(0));
}

#[test]
fn editing_touches_only_the_highlighted_row() {
    let mut store = tags_store(json!(["a", "b"]));
    let mut editor = TextArray::new("tags", "Tags");
    editor.handle_key(&ctrl(KeyCode::Right), &mut store);
    type_text(&mut editor, &mut store, "!!");
    assert_eq!(store.view("tags").items(), vec!["a", "b!!"]);
    editor.handle_key(&key(KeyCode::Backspace), &mut store);
    assert_eq!(store.view("tags").items(), vec!["a", "b!"]);
}

#[test]
fn the_add_control_disappears_at_the_configured_maximum() {
    let mut store = tags_store(json!(["a", "b"]));
    let mut editor = TextArray::new("tags", "Tags").with_max(2);

    // label + two rows + help line, no add hint
    assert_eq!(editor.lines(&store, false).len(), 4);
    assert!(!editor.handle_key(&ctrl(KeyCode::Char('n')), &mut store));
    assert_eq!(store.view("tags").items(), vec!["a", "b"]);
}

#[test]
fn an_empty_sequence_renders_no_rows_but_offers_add() {
    let mut store = tags_store(json!([]));
    let mut editor = TextArray::new("tags", "Tags");
    let lines = editor.lines(&store, false);
    assert_eq!(lines.len(), 3);
    assert!(line_text(&lines[1]).contains("Ctrl+N"));
    // nothing to edit or remove
    assert!(!editor.handle_key(&key(KeyCode::Char('x')), &mut store));
    assert!(!editor.handle_key(&ctrl(KeyCode::Char('d')), &mut store));
}

#[test]
fn per_row_errors_join_into_one_message() {
    let schema = json!({
        "type": "object",
        "properties": {
            "tags": {"type": "array", "items": {"type": "string", "minLength": 1}}
        }
    });
    let mut store = FormStore::with_schema(json!({"tags": ["", "ok", ""]}), &schema).unwrap();
    let mut editor = TextArray::new("tags", "Tags").with_helper_text("one per line");

    let lines = editor.lines(&store, false);
    assert_eq!(line_text(&lines[5]), "one per line");

    editor.blur(&mut store);
    let lines = editor.lines(&store, false);
    let shown = line_text(&lines[5]);
    assert!(shown.contains(", "));
    assert_ne!(shown, "one per line");
}

#[test]
fn rows_rebind_positionally_after_removal() {
    let mut store = tags_store(json!(["a", "b", "c"]));
    let mut editor = TextArray::new("tags", "Tags");

    editor.handle_key(&ctrl(KeyCode::Char('d')), &mut store);
    assert_eq!(store.view("tags").items(), vec!["b", "c"]);
    // the highlight stayed at position 0, now bound to the old second value
    type_text(&mut editor, &mut store, "z");
    assert_eq!(store.view("tags").items(), vec!["bz", "c"]);
}
