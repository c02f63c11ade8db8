use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::form::FormStore;

use super::FormControl;

/// An ordered stack of controls sharing one store, with a single focused
/// control that receives keys. Moving focus blurs the outgoing control,
/// which marks its field touched.
#[derive(Default)]
pub struct Form {
    controls: Vec<Box<dyn FormControl>>,
    focus: usize,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control(mut self, control: impl FormControl + 'static) -> Self {
        self.push(control);
        self
    }

    pub fn push(&mut self, control: impl FormControl + 'static) {
        self.controls.push(Box::new(control));
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<&dyn FormControl> {
        self.controls.get(self.focus).map(|control| control.as_ref())
    }

    pub fn focus_next(&mut self, store: &mut FormStore) {
        self.advance(store, 1);
    }

    pub fn focus_prev(&mut self, store: &mut FormStore) {
        self.advance(store, -1);
    }

    fn advance(&mut self, store: &mut FormStore, delta: i32) {
        let len = self.controls.len() as i32;
        if len == 0 {
            return;
        }
        if let Some(control) = self.controls.get_mut(self.focus) {
            control.blur(store);
        }
        let next = (self.focus as i32 + delta + len) % len;
        self.focus = next as usize;
    }

    /// Routes a key to the focused control.
    pub fn handle_key(&mut self, key: &KeyEvent, store: &mut FormStore) -> bool {
        match self.controls.get_mut(self.focus) {
            Some(control) => control.handle_key(key, store),
            None => false,
        }
    }

    /// Renders the controls top to bottom at their current heights, one
    /// blank row apart. Controls past the bottom edge are clipped.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, store: &FormStore) {
        if self.controls.is_empty() {
            return;
        }
        let mut constraints: Vec<Constraint> = self
            .controls
            .iter()
            .map(|control| Constraint::Length(control.height(store)))
            .collect();
        constraints.push(Constraint::Min(0));
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .spacing(1)
            .split(area);
        for (idx, control) in self.controls.iter().enumerate() {
            if areas[idx].height > 0 {
                control.render(frame, areas[idx], store, idx == self.focus);
            }
        }
    }
}
