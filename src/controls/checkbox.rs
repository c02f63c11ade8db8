use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};

use crate::domain::FieldPath;
use crate::form::FormStore;

use super::helpers::{help_text_line, label_style};
use super::palette::ControlPalette;
use super::{ControlKind, FormControl};

/// A single toggle bound to a bool-valued field. An absent value reads as
/// unchecked.
pub struct Checkbox {
    name: FieldPath,
    label: String,
    helper_text: Option<String>,
    palette: Arc<ControlPalette>,
}

impl Checkbox {
    pub fn new(name: impl Into<FieldPath>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            helper_text: None,
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

    fn toggle(&self, store: &mut FormStore) -> bool {
        let mut field = store.field(&self.name);
        let flag = field.flag();
        field.set_flag(!flag);
        true
    }
}

impl FormControl for Checkbox {
    fn kind(&self) -> ControlKind {
        ControlKind::Checkbox
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
        let glyph = if view.flag() {
            &self.palette.toggles.checked
        } else {
            &self.palette.toggles.unchecked
        };
        vec![
            Line::from(Span::styled(
                format!("{glyph} {}", self.label),
                label_style(focused, errored),
            )),
            help_text_line(&view, self.helper_text.as_deref()),
        ]
    }

    fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        match key.code {
            KeyCode::Char(' ') if self.palette.toggles.toggle_with_space => self.toggle(store),
            KeyCode::Enter if self.palette.toggles.toggle_with_enter => self.toggle(store),
            _ => false,
        }
    }
}
