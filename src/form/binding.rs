use serde_json::Value;

use crate::domain::FieldPath;

use super::error::FieldError;
use super::presenter::help_line;
use super::state::FormStore;

/// Read view of one named field: current value, touched flag, and error,
/// all owned by the store. Components hold these only for the duration of
/// a render pass.
pub struct FieldView<'a> {
    store: &'a FormStore,
    path: FieldPath,
}

impl<'a> FieldView<'a> {
    pub(crate) fn new(store: &'a FormStore, path: FieldPath) -> Self {
        Self { store, path }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn value(&self) -> &'a Value {
        self.store.value_at(&self.path)
    }

    /// String form of the value; non-strings read as empty.
    pub fn text(&self) -> &'a str {
        self.value().as_str().unwrap_or("")
    }

    /// Bool form of the value; anything else reads as `false`.
    pub fn flag(&self) -> bool {
        self.value().as_bool().unwrap_or(false)
    }

    /// Sequence-of-strings form of the value; non-arrays read as empty.
    pub fn items(&self) -> Vec<String> {
        match self.value() {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn touched(&self) -> bool {
        self.store.is_touched(&self.path)
    }

    pub fn error(&self) -> Option<FieldError> {
        self.store.error(&self.path)
    }

    pub fn shows_error(&self) -> bool {
        self.store.shows_error(&self.path)
    }

    /// Error-or-helper display line for this field.
    pub fn help_line(&self, helper: Option<&str>) -> Option<String> {
        help_line(self.touched(), self.error().as_ref(), helper)
    }
}

/// Write capability scoped to one named field. Every write goes straight
/// through the store, which re-validates before the next render.
pub struct FieldBinding<'a> {
    store: &'a mut FormStore,
    path: FieldPath,
}

impl<'a> FieldBinding<'a> {
    pub(crate) fn new(store: &'a mut FormStore, path: FieldPath) -> Self {
        Self { store, path }
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn text(&self) -> String {
        self.store.value_at(&self.path).as_str().unwrap_or("").to_string()
    }

    pub fn flag(&self) -> bool {
        self.store.value_at(&self.path).as_bool().unwrap_or(false)
    }

    pub fn items(&self) -> Vec<String> {
        match self.store.value_at(&self.path) {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn set(&mut self, value: Value) {
        self.store.set_value(&self.path, value);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set(Value::String(text.into()));
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.set(Value::Bool(flag));
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.set(Value::Array(items.into_iter().map(Value::String).collect()));
    }

    /// Marks the field touched; the store re-validates in turn.
    pub fn blur(&mut self) {
        self.store.mark_touched(&self.path);
    }
}
