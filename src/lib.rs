#![deny(rust_2018_idioms)]

mod controls;
mod domain;
mod form;
mod runtime;


pub use controls::{
    ArrayHints, Checkbox, Checkboxes, ControlKind, ControlPalette, DateField, Form, FormControl,
    NativeSelect, RadioGlyphs, RadioGroup, SelectPresentation, SingleSelect, TextArray, TextField,
    ToggleGlyphs,
};
pub use domain::{Choice, FieldPath, Segment};
pub use form::{
    FieldBinding, FieldError, FieldView, FormStore, SchemaError, SubmitRejected, help_line,
};
pub use runtime::{FormUi, UiOptions};

pub mod prelude {
    pub use super::{
        Checkbox, Checkboxes, Choice, DateField, FieldPath, Form, FormControl, FormStore, FormUi,
        NativeSelect, RadioGroup, SingleSelect, TextArray, TextField, UiOptions,
    };
}
