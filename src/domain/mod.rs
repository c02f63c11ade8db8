mod choice;
mod path;

pub use choice::Choice;
pub use path::{FieldPath, Segment};
