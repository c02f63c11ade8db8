use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::domain::{Choice, FieldPath};
use crate::form::FormStore;

use super::helpers::{VALUE_INDENT, dim_style, help_text_line, label_line, value_style};
use super::palette::ControlPalette;
use super::{ControlKind, FormControl};

/// A closed selector bound to one string field. Stepping left/right moves
/// through a leading empty slot plus the choice list and writes the new
/// value immediately. The empty slot writes the empty string.
pub struct NativeSelect {
    name: FieldPath,
    label: String,
    helper_text: Option<String>,
    choices: Vec<Choice>,
    palette: Arc<ControlPalette>,
}

impl NativeSelect {
    pub fn new<C: Into<Choice>>(
        name: impl Into<FieldPath>,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            helper_text: None,
            choices: choices.into_iter().map(Into::into).collect(),
            palette: Arc::new(ControlPalette::default()),
        }
    }

    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn with_palette(mut self, palette: Arc<ControlPalette>) -> Self {
        self.palette = palette;
        self
    }

    /// Index into the empty-slot-plus-choices sequence; unknown values
    /// read as the empty slot.
    fn slot_of(&self, current: &str) -> usize {
        self.choices
            .iter()
            .position(|choice| choice.value == current)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }

    fn step(&self, store: &mut FormStore, delta: i32) -> bool {
        let len = self.choices.len() as i32 + 1;
        let current = self.slot_of(&store.field(&self.name).text()) as i32;
        let next = if self.palette.selects.wrap_around {
            ((current + delta) % len + len) % len
        } else {
            (current + delta).clamp(0, len - 1)
        };
        if next == current {
            return false;
        }
        let value = if next == 0 {
            String::new()
        } else {
            self.choices[next as usize - 1].value.clone()
        };
        store.field(&self.name).set_text(value);
        true
    }

    fn display_label<'a>(&'a self, current: &'a str) -> Option<&'a str> {
        if current.is_empty() {
            return None;
        }
        Some(
            self.choices
                .iter()
                .find(|choice| choice.value == current)
                .map(|choice| choice.label.as_str())
                .unwrap_or(current),
        )
    }
}

impl FormControl for NativeSelect {
    fn kind(&self) -> ControlKind {
        ControlKind::NativeSelect
    }

    fn name(&self) -> &FieldPath {
        &self.name
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn lines(&self, store: &FormStore, focused: bool) -> Vec<Line<'static>> {
        let view = store.view(&self.name);
        let errored = view.shows_error();
        let value_line = match self.display_label(view.text()) {
            Some(label) => Span::styled(
                format!("{VALUE_INDENT}‹ {label} ›"),
                value_style(errored),
            ),
            None => Span::styled(
                format!("{VALUE_INDENT}‹ {} ›", self.palette.selects.empty_label),
                dim_style(),
            ),
        };
        vec![
            label_line(&self.label, focused, errored),
            Line::from(value_line),
            help_text_line(&view, self.helper_text.as_deref()),
        ]
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        match key.code {
            KeyCode::Left => self.step(store, -1),
            KeyCode::Right => self.step(store, 1),
            _ => false,
        }
    }
}
