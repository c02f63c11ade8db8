mod binding;
mod error;
mod presenter;
mod state;
mod validate;

pub use binding::{FieldBinding, FieldView};
pub use error::{FieldError, SchemaError, SubmitRejected};
pub use presenter::help_line;
pub use state::FormStore;
