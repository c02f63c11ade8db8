use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::domain::FieldPath;
use crate::form::FormStore;

use super::helpers::{VALUE_INDENT, dim_style, edit_text, help_text_line, label_line, value_style};
use super::{ControlKind, FormControl};

/// A free-text input bound to one string field. Printable keys append,
/// Backspace pops, Delete clears; control-modified characters are
/// ignored.
pub struct TextField {
    name: FieldPath,
    label: String,
    helper_text: Option<String>,
    placeholder: Option<String>,
}

impl TextField {
    pub fn new(name: impl Into<FieldPath>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            helper_text: None,
            placeholder: None,
        }
    }

    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

impl FormControl for TextField {
    fn kind(&self) -> ControlKind {
        ControlKind::TextField
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
        let text = view.text();
        let value_span = if text.is_empty() && !focused {
            match &self.placeholder {
                Some(placeholder) => {
                    Span::styled(format!("{VALUE_INDENT}{placeholder}"), dim_style())
                }
                None => Span::raw(VALUE_INDENT),
            }
        } else {
            Span::styled(format!("{VALUE_INDENT}{text}"), value_style(errored))
        };
        vec![
            label_line(&self.label, focused, errored),
            Line::from(value_span),
            help_text_line(&view, self.helper_text.as_deref()),
        ]
    }

    fn render(&self, frame: &mut Frame<'_>, area: Rect, store: &FormStore, focused: bool) {
        frame.render_widget(Paragraph::new(self.lines(store, focused)), area);
        if focused && area.height > 1 {
            let text = store.view(&self.name).text().to_string();
            let x = area
                .x
                .saturating_add(VALUE_INDENT.len() as u16)
                .saturating_add(text.width() as u16);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        let mut field = store.field(&self.name);
        match edit_text(&field.text(), key) {
            Some(next) => {
                field.set_text(next);
                true
            }
            None => false,
        }
    }
}
