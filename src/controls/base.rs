use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::domain::FieldPath;
use crate::form::FormStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Checkbox,
    Checkboxes,
    RadioGroup,
    NativeSelect,
    SingleSelect,
    TextField,
    DateField,
    TextArray,
}

/// One form control bound to one named field of a [`FormStore`].
///
/// Controls are presentational: they read value/touched/error state from
/// the store during render and write user input back through it. The only
/// state they keep themselves is transient UI state (highlight cursors,
/// an open dropdown), which carries no field data.
pub trait FormControl {
    fn kind(&self) -> ControlKind;

    /// Identifier of the bound field.
    fn name(&self) -> &FieldPath;

    fn label(&self) -> &str;

    /// Render content, one [`Line`] per terminal row.
    fn lines(&self, store: &FormStore, focused: bool) -> Vec<Line<'static>>;

    /// Rows this control currently needs. Dynamic for controls whose row
    /// count follows the field value.
    fn height(&self, store: &FormStore) -> u16 {
        self.lines(store, false).len() as u16
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, store: &FormStore, focused: bool) {
        frame.render_widget(Paragraph::new(self.lines(store, focused)), area);
    }

    /// Applies a key to the bound field. Returns whether the key was
    /// consumed.
    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool;

    /// Focus is leaving the control: mark the field interacted with so
    /// validation errors become visible.
    fn blur(&mut self, store: &mut FormStore) {
        store.mark_touched(self.name());
    }
}
