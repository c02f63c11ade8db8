use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::domain::FieldPath;
use crate::form::FormStore;

use super::helpers::{VALUE_INDENT, dim_style, edit_text, help_text_line, label_line, value_style};
use super::{ControlKind, FormControl};

/// A date input bound to one string field. The stored value is the
/// formatted string under a caller-specified format pattern, never a
/// native date; an empty value stays the empty string. While the current
/// text parses under the pattern, Left/Right step the date by one day.
pub struct DateField {
    name: FieldPath,
    label: String,
    format: String,
    helper_text: Option<String>,
}

impl DateField {
    pub fn new(
        name: impl Into<FieldPath>,
        label: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            format: format.into(),
            helper_text: None,
        }
    }

    pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn step(&self, store: &mut FormStore, forward: bool) -> bool {
        let mut field = store.field(&self.name);
        let Ok(date) = NaiveDate::parse_from_str(&field.text(), &self.format) else {
            return false;
        };
        let Some(next) = (if forward { date.succ_opt() } else { date.pred_opt() }) else {
            return false;
        };
        field.set_text(next.format(&self.format).to_string());
        true
    }
}

impl FormControl for DateField {
    fn kind(&self) -> ControlKind {
        ControlKind::DateField
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
            Span::styled(format!("{VALUE_INDENT}{}", self.format), dim_style())
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
        match key.code {
            KeyCode::Left => self.step(store, false),
            KeyCode::Right => self.step(store, true),
            _ => {
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
    }
}
