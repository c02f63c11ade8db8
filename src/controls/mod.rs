mod base;
mod checkbox;
mod checkboxes;
mod date_field;
mod form;
pub(crate) mod helpers;
mod palette;
mod radio_group;
mod select;
mod single_select;
mod text_array;
mod text_field;

pub use base::{ControlKind, FormControl};
pub use checkbox::Checkbox;
pub use checkboxes::Checkboxes;
pub use date_field::DateField;
pub use form::Form;
pub use palette::{ArrayHints, ControlPalette, RadioGlyphs, SelectPresentation, ToggleGlyphs};
pub use radio_group::RadioGroup;
pub use select::NativeSelect;
pub use single_select::SingleSelect;
pub use text_array::TextArray;
pub use text_field::TextField;
