use indexmap::IndexMap;
use indexmap::map::Entry;
use jsonschema::Validator;
use serde_json::Value;

use super::error::FieldError;

/// Runs the validator over the whole value tree and groups the resulting
/// messages by instance pointer. Several errors on the same location
/// collapse into one `FieldError::Many`.
pub(crate) fn collect_errors(validator: &Validator, value: &Value) -> IndexMap<String, FieldError> {
    let mut errors: IndexMap<String, FieldError> = IndexMap::new();
    if validator.is_valid(value) {
        return errors;
    }
    for error in validator.iter_errors(value) {
        let pointer = error.instance_path.to_string();
        let message = error.to_string();
        match errors.entry(pointer) {
            Entry::Occupied(mut entry) => entry.get_mut().append(message),
            Entry::Vacant(entry) => {
                entry.insert(FieldError::Single(message));
            }
        }
    }
    errors
}
