use indexmap::{IndexMap, IndexSet};
use jsonschema::{Validator, validator_for};
use serde_json::{Map, Value};

use crate::domain::{FieldPath, Segment};

use super::binding::{FieldBinding, FieldView};
use super::error::{FieldError, SchemaError, SubmitRejected};
use super::validate::collect_errors;

static NULL_VALUE: Value = Value::Null;

/// The shared form-state store. Owns the whole form value tree plus the
/// per-field touched flags and validation errors; controls hold no copy of
/// field state, only transient render-time references.
///
/// Every write and every blur re-validates the current tree, so error
/// state is always consistent with the values on screen.
pub struct FormStore {
    values: Value,
    touched: IndexSet<String>,
    errors: IndexMap<String, FieldError>,
    validator: Option<Validator>,
    dirty: bool,
}

impl FormStore {
    /// Creates a store seeded with `initial` values and no validator.
    /// Anything other than an object root is replaced by an empty object.
    pub fn new(initial: Value) -> Self {
        let values = if initial.is_object() {
            initial
        } else {
            Value::Object(Map::new())
        };
        Self {
            values,
            touched: IndexSet::new(),
            errors: IndexMap::new(),
            validator: None,
            dirty: false,
        }
    }

    /// Creates a store whose writes are validated against a JSON Schema.
    pub fn with_schema(initial: Value, schema: &Value) -> Result<Self, SchemaError> {
        let validator = validator_for(schema).map_err(|err| SchemaError {
            message: err.to_string(),
        })?;
        let mut store = Self::new(initial);
        store.validator = Some(validator);
        store.revalidate();
        Ok(store)
    }

    /// Read view scoped to one field.
    pub fn view(&self, name: impl Into<FieldPath>) -> FieldView<'_> {
        FieldView::new(self, name.into())
    }

    /// Write capability scoped to one field.
    pub fn field(&mut self, name: impl Into<FieldPath>) -> FieldBinding<'_> {
        FieldBinding::new(self, name.into())
    }

    pub fn values(&self) -> &Value {
        &self.values
    }

    pub fn value_at(&self, path: &FieldPath) -> &Value {
        lookup(&self.values, path.segments()).unwrap_or(&NULL_VALUE)
    }

    pub fn set_value(&mut self, path: &FieldPath, value: Value) {
        insert(&mut self.values, path.segments(), value);
        self.dirty = true;
        self.revalidate();
    }

    /// Marks the field as interacted with; the blur path of the adapter.
    pub fn mark_touched(&mut self, path: &FieldPath) {
        self.touched.insert(path.pointer());
        self.revalidate();
    }

    pub fn is_touched(&self, path: &FieldPath) -> bool {
        self.touched.contains(&path.pointer())
    }

    /// The field's current validation error. An error recorded exactly at
    /// the field's pointer is returned as stored; otherwise errors on the
    /// field's children (per-row errors under an array value) are gathered
    /// in row order into [`FieldError::Many`].
    pub fn error(&self, path: &FieldPath) -> Option<FieldError> {
        let pointer = path.pointer();
        if let Some(error) = self.errors.get(&pointer) {
            return Some(error.clone());
        }
        let prefix = format!("{pointer}/");
        let mut rows: Vec<(usize, &str, &FieldError)> = self
            .errors
            .iter()
            .filter(|(candidate, _)| candidate.starts_with(&prefix))
            .map(|(candidate, error)| {
                let rest = &candidate[prefix.len()..];
                let head = rest.split('/').next().unwrap_or("");
                (head.parse::<usize>().unwrap_or(usize::MAX), rest, error)
            })
            .collect();
        if rows.is_empty() {
            return None;
        }
        rows.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(b.1)));
        let mut messages = Vec::new();
        for (_, _, error) in rows {
            match error {
                FieldError::Single(message) => messages.push(message.clone()),
                FieldError::Many(more) => messages.extend(more.iter().cloned()),
            }
        }
        Some(FieldError::Many(messages))
    }

    pub fn has_error(&self, path: &FieldPath) -> bool {
        let pointer = path.pointer();
        if self.errors.contains_key(&pointer) {
            return true;
        }
        let prefix = format!("{pointer}/");
        self.errors.keys().any(|key| key.starts_with(&prefix))
    }

    /// Whether the field should currently display in its error state.
    pub fn shows_error(&self, path: &FieldPath) -> bool {
        self.is_touched(path) && self.has_error(path)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Validates and hands back the value tree, or rejects while marking
    /// every failing field (and its enclosing fields) touched so the
    /// errors become visible. Submission itself stays the caller's
    /// concern.
    pub fn try_submit(&mut self) -> Result<Value, SubmitRejected> {
        self.revalidate();
        if self.errors.is_empty() {
            return Ok(self.values.clone());
        }
        let pointers: Vec<String> = self.errors.keys().cloned().collect();
        for pointer in pointers {
            for (offset, _) in pointer.match_indices('/').skip(1) {
                self.touched.insert(pointer[..offset].to_string());
            }
            self.touched.insert(pointer);
        }
        Err(SubmitRejected {
            issues: self.errors.len(),
        })
    }

    fn revalidate(&mut self) {
        if let Some(validator) = &self.validator {
            self.errors = collect_errors(validator, &self.values);
        }
    }
}

fn lookup<'a>(root: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match (segment, current) {
            (Segment::Key(key), Value::Object(map)) => map.get(key)?,
            (Segment::Index(index), Value::Array(items)) => items.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

fn insert(root: &mut Value, segments: &[Segment], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *root = value;
        return;
    };
    match first {
        Segment::Key(key) => {
            if !root.is_object() {
                *root = Value::Object(Map::new());
            }
            if let Value::Object(map) = root {
                let slot = map.entry(key.clone()).or_insert(Value::Null);
                insert(slot, rest, value);
            }
        }
        Segment::Index(index) => {
            if !root.is_array() {
                *root = Value::Array(Vec::new());
            }
            if let Value::Array(items) = root {
                while items.len() <= *index {
                    items.push(Value::Null);
                }
                insert(&mut items[*index], rest, value);
            }
        }
    }
}
