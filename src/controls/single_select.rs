use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::domain::{Choice, FieldPath};
use crate::form::FormStore;

use super::helpers::{VALUE_INDENT, dim_style, help_text_line, label_line, row_style, value_style};
use super::palette::ControlPalette;
use super::{ControlKind, FormControl};

/// A dropdown-style selector bound to one string field. Closed, it shows
/// the current choice; Enter expands an inline option list, moving the
/// highlight does not write, and committing writes the highlighted value.
/// Losing focus collapses the list.
pub struct SingleSelect {
    name: FieldPath,
    label: String,
    helper_text: Option<String>,
    choices: Vec<Choice>,
    open: bool,
    cursor: usize,
    palette: Arc<ControlPalette>,
}

impl SingleSelect {
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
            open: false,
            cursor: 0,
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

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn open_at_current(&mut self, store: &FormStore) -> bool {
        if self.choices.is_empty() {
            return false;
        }
        let current = store.view(&self.name).text().to_string();
        self.cursor = self
            .choices
            .iter()
            .position(|choice| choice.value == current)
            .unwrap_or(0);
        self.open = true;
        true
    }

    fn commit_highlighted(&mut self, store: &mut FormStore) -> bool {
        self.open = false;
        let Some(choice) = self.choices.get(self.cursor) else {
            return false;
        };
        store.field(&self.name).set_text(choice.value.clone());
        true
    }
}

impl FormControl for SingleSelect {
    fn kind(&self) -> ControlKind {
        ControlKind::SingleSelect
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
        let mut lines = Vec::new();
        lines.push(label_line(&self.label, focused, errored));
        if self.open {
            for (idx, choice) in self.choices.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("{VALUE_INDENT}{}", choice.label),
                    row_style(errored, focused && idx == self.cursor),
                )));
            }
        } else {
            let current = view.text();
            let value_span = match self
                .choices
                .iter()
                .find(|choice| choice.value == current)
            {
                Some(choice) => Span::styled(
                    format!("{VALUE_INDENT}{} ▾", choice.label),
                    value_style(errored),
                ),
                None => Span::styled(
                    format!("{VALUE_INDENT}{} ▾", self.palette.selects.empty_label),
                    dim_style(),
                ),
            };
            lines.push(Line::from(value_span));
        }
        lines.push(help_text_line(&view, self.helper_text.as_deref()));
        lines
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.open_at_current(store),
                _ => false,
            };
        }
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
            KeyCode::Enter | KeyCode::Char(' ') => self.commit_highlighted(store),
            _ => false,
        }
    }

    fn blur(&mut self, store: &mut FormStore) {
        self.open = false;
        store.mark_touched(&self.name);
    }
}
