use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Line;

use crate::domain::{Choice, FieldPath};
use crate::form::FormStore;

use super::helpers::{help_text_line, label_line, option_row};
use super::palette::ControlPalette;
use super::{ControlKind, FormControl};

/// A set of mutually exclusive choices bound to one string field. The
/// selected row follows the field value; committing the highlight writes
/// the highlighted choice's value.
pub struct RadioGroup {
    name: FieldPath,
    label: Option<String>,
    helper_text: Option<String>,
    choices: Vec<Choice>,
    cursor: usize,
    palette: Arc<ControlPalette>,
}

impl RadioGroup {
    pub fn new<C: Into<Choice>>(
        name: impl Into<FieldPath>,
        choices: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            name: name.into(),
            label: None,
            helper_text: None,
            choices: choices.into_iter().map(Into::into).collect(),
            cursor: 0,
            palette: Arc::new(ControlPalette::default()),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn with_palette(mut self, palette: Arc<ControlPalette>) -> Self {
        self.palette = palette;
        self
    }

    fn commit_highlighted(&self, store: &mut FormStore) -> bool {
        let Some(choice) = self.choices.get(self.cursor) else {
            return false;
        };
        store.field(&self.name).set_text(choice.value.clone());
        true
    }
}

impl FormControl for RadioGroup {
    fn kind(&self) -> ControlKind {
        ControlKind::RadioGroup
    }

    fn name(&self) -> &FieldPath {
        &self.name
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    fn lines(&self, store: &FormStore, focused: bool) -> Vec<Line<'static>> {
        let view = store.view(&self.name);
        let errored = view.shows_error();
        let current = view.text();
        let mut lines = Vec::with_capacity(self.choices.len() + 2);
        if let Some(label) = &self.label {
            lines.push(label_line(label, focused, errored));
        }
        for (idx, choice) in self.choices.iter().enumerate() {
            let glyph = if choice.value == current {
                &self.palette.radios.selected
            } else {
                &self.palette.radios.unselected
            };
            lines.push(option_row(
                glyph,
                &choice.label,
                focused && idx == self.cursor,
                errored,
            ));
        }
        lines.push(help_text_line(&view, self.helper_text.as_deref()));
        lines
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        match key.code {
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if self.cursor + 1 < self.choices.len() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.commit_highlighted(store),
            _ => false,
        }
    }
}
