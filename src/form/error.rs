use std::fmt;

/// A field validation failure, attached to a field by the validation
/// engine. Array-valued fields may carry one message per row; `Many`
/// keeps those in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Single(String),
    Many(Vec<String>),
}

impl FieldError {
    /// Human-readable form: per-row messages are joined with `", "` in
    /// row order.
    pub fn message(&self) -> String {
        match self {
            FieldError::Single(message) => message.clone(),
            FieldError::Many(messages) => messages.join(", "),
        }
    }

    pub(crate) fn append(&mut self, message: String) {
        match self {
            FieldError::Single(first) => {
                *self = FieldError::Many(vec![std::mem::take(first), message]);
            }
            FieldError::Many(messages) => messages.push(message),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FieldError {}

/// The supplied validation schema could not be compiled.
#[derive(Debug, Clone)]
pub struct SchemaError {
    pub message: String,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid validation schema: {}", self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Submission was suppressed because the form still has invalid fields.
#[derive(Debug, Clone)]
pub struct SubmitRejected {
    pub issues: usize,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.issues)
    }
}

impl std::error::Error for SubmitRejected {}
