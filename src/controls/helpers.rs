use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::form::FieldView;

pub(crate) const VALUE_INDENT: &str = "  ";

/// Append/pop text editing against the store-held value. Returns the new
/// value when the key changed it.
pub(crate) fn edit_text(current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete => {
            if current.is_empty() {
                None
            } else {
                Some(String::new())
            }
        }
        _ => None,
    }
}

pub(crate) fn label_line(label: &str, focused: bool, errored: bool) -> Line<'static> {
    Line::from(Span::styled(label.to_string(), label_style(focused, errored)))
}

pub(crate) fn label_style(focused: bool, errored: bool) -> Style {
    let color = if errored {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::Cyan
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub(crate) fn value_style(errored: bool) -> Style {
    if errored {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(crate) fn row_style(errored: bool, highlighted: bool) -> Style {
    let mut style = value_style(errored);
    if highlighted {
        style = style.bg(Color::DarkGray);
    }
    style
}

/// One selectable option row: glyph, space, label.
pub(crate) fn option_row(glyph: &str, label: &str, highlighted: bool, errored: bool) -> Line<'static> {
    Line::from(Span::styled(
        format!("{VALUE_INDENT}{glyph} {label}"),
        row_style(errored, highlighted),
    ))
}

/// The error-or-helper line under a control. Always one row so control
/// heights stay stable across validation changes.
pub(crate) fn help_text_line(view: &FieldView<'_>, helper: Option<&str>) -> Line<'static> {
    let style = if view.shows_error() {
        Style::default().fg(Color::Red)
    } else {
        dim_style()
    };
    let text = view.help_line(helper).unwrap_or_default();
    Line::from(Span::styled(text, style))
}
