use super::error::FieldError;

/// Selects the line shown under a control: the field's error message once
/// the field has been touched and currently fails validation, otherwise
/// the static helper text.
pub fn help_line(touched: bool, error: Option<&FieldError>, helper: Option<&str>) -> Option<String> {
    if touched && let Some(error) = error {
        return Some(error.message());
    }
    helper.map(str::to_string)
}
