use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::domain::FieldPath;
use crate::form::FormStore;

use super::helpers::{VALUE_INDENT, dim_style, edit_text, help_text_line, label_line, row_style};
use super::palette::ControlPalette;
use super::{ControlKind, FormControl};

/// An editor for a sequence-of-strings field: one text row per element,
/// plus add/remove operations that change the sequence's length.
///
/// Row identity is positional. Removing row `i` re-binds every later row
/// to its shifted path, so row-local transient state (the highlight, an
/// in-flight cursor) does not follow a value across removal.
pub struct TextArray {
    name: FieldPath,
    label: String,
    helper_text: Option<String>,
    max: Option<usize>,
    cursor: usize,
    palette: Arc<ControlPalette>,
}

impl TextArray {
    pub fn new(name: impl Into<FieldPath>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            helper_text: None,
            max: None,
            cursor: 0,
            palette: Arc::new(ControlPalette::default()),
        }
    }

    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Caps the row count; the add control disappears once reached.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_palette(mut self, palette: Arc<ControlPalette>) -> Self {
        self.palette = palette;
        self
    }

    /// Index of the highlighted row, clamped to the current row count.
    pub fn cursor(&self, store: &FormStore) -> Option<usize> {
        let len = store.view(&self.name).items().len();
        if len == 0 {
            None
        } else {
            Some(self.cursor.min(len - 1))
        }
    }

    fn at_max(&self, len: usize) -> bool {
        self.max.is_some_and(|max| len >= max)
    }

    fn add_row(&mut self, store: &mut FormStore) -> bool {
        let mut field = store.field(&self.name);
        let mut items = field.items();
        if self.at_max(items.len()) {
            return false;
        }
        items.push(String::new());
        self.cursor = items.len() - 1;
        field.set_items(items);
        true
    }

    fn remove_row(&mut self, store: &mut FormStore) -> bool {
        let mut field = store.field(&self.name);
        let mut items = field.items();
        if items.is_empty() {
            return false;
        }
        let index = self.cursor.min(items.len() - 1);
        items.remove(index);
        if index >= items.len() {
            self.cursor = items.len().saturating_sub(1);
        } else {
            self.cursor = index;
        }
        field.set_items(items);
        true
    }

    fn edit_row(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        let items = store.view(&self.name).items();
        if items.is_empty() {
            return false;
        }
        let index = self.cursor.min(items.len() - 1);
        match edit_text(&items[index], key) {
            Some(next) => {
                store.field(self.name.child(index)).set_text(next);
                true
            }
            None => false,
        }
    }

    fn row_prefix(index: usize) -> String {
        format!("{VALUE_INDENT}{}. ", index + 1)
    }
}

impl FormControl for TextArray {
    fn kind(&self) -> ControlKind {
        ControlKind::TextArray
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
        let touched = view.touched();
        let items = view.items();
        let cursor = self.cursor.min(items.len().saturating_sub(1));

        let mut lines = Vec::with_capacity(items.len() + 3);
        lines.push(label_line(&self.label, focused, errored));
        for (idx, text) in items.iter().enumerate() {
            let row_errored = touched && store.has_error(&self.name.child(idx));
            lines.push(Line::from(Span::styled(
                format!("{}{text}", Self::row_prefix(idx)),
                row_style(row_errored, focused && idx == cursor),
            )));
        }
        if !self.at_max(items.len()) {
            lines.push(Line::from(Span::styled(
                format!("{VALUE_INDENT}{}", self.palette.arrays.add_hint),
                dim_style(),
            )));
        }
        lines.push(help_text_line(&view, self.helper_text.as_deref()));
        lines
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, store: &FormStore, focused: bool) {
        frame.render_widget(Paragraph::new(self.lines(store, focused)), area);
        if !focused {
            return;
        }
        let items = store.view(&self.name).items();
        if items.is_empty() {
            return;
        }
        let index = self.cursor.min(items.len() - 1);
        let row = 1 + index as u16;
        if row >= area.height {
            return;
        }
        let prefix = Self::row_prefix(index);
        let x = area
            .x
            .saturating_add(prefix.width() as u16)
            .saturating_add(items[index].width() as u16);
        frame.set_cursor_position((x, area.y.saturating_add(row)));
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') | KeyCode::Char('N') => self.add_row(store),
                KeyCode::Char('d') | KeyCode::Char('D') => self.remove_row(store),
                KeyCode::Left => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                        true
                    } else {
                        false
                    }
                }
                KeyCode::Right => {
                    let len = store.view(&self.name).items().len();
                    if self.cursor + 1 < len {
                        self.cursor += 1;
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            };
        }
        self.edit_row(key, store)
    }
}
