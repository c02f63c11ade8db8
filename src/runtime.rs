use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use serde_json::Value;
use textwrap::wrap;

use crate::controls::Form;
use crate::form::FormStore;

const HELP_TEXT: &str = "Tab/Shift+Tab navigate • Ctrl+S submit • Ctrl+Q quit";
const READY_STATUS: &str = "Ready. Press Ctrl+S to validate and submit.";

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
        }
    }
}

/// Interactive runner: drives a form over a store in an alternate-screen
/// terminal until the user submits or quits. On submit the validated
/// value tree is returned; the submission handler itself stays the
/// caller's concern.
pub struct FormUi {
    store: FormStore,
    form: Form,
    title: Option<String>,
    options: UiOptions,
}

impl FormUi {
    pub fn new(store: FormStore) -> Self {
        Self {
            store,
            form: Form::new(),
            title: None,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    pub fn run(self) -> Result<Value> {
        let FormUi {
            store,
            form,
            title,
            options,
        } = self;
        let mut app = App::new(store, form, title, options);
        app.run()
    }
}

struct App {
    store: FormStore,
    form: Form,
    title: Option<String>,
    options: UiOptions,
    status_message: String,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    fn new(store: FormStore, form: Form, title: Option<String>, options: UiOptions) -> Self {
        Self {
            store,
            form,
            title,
            options,
            status_message: READY_STATUS.to_string(),
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    fn run(&mut self) -> Result<Value> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if let Some(value) = self.result.take() {
            Ok(value)
        } else {
            Err(anyhow!("user exited without submitting"))
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let mut constraints = Vec::new();
        if self.title.is_some() {
            constraints.push(Constraint::Length(2));
        }
        constraints.push(Constraint::Min(1));
        constraints.push(Constraint::Length(2));
        if self.options.show_help {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        let mut next = 0;
        if let Some(title) = &self.title {
            let header = Paragraph::new(title.clone())
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(header, chunks[next]);
            next += 1;
        }

        self.form.render(frame, chunks[next], &self.store);
        next += 1;

        let width = frame.area().width.max(1) as usize;
        let status_lines: Vec<Line<'_>> = wrap(&self.status_message, width)
            .into_iter()
            .take(2)
            .map(|piece| Line::from(piece.into_owned()))
            .collect();
        let status_style = if self.store.is_valid() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        frame.render_widget(Paragraph::new(status_lines).style(status_style), chunks[next]);
        next += 1;

        if self.options.show_help {
            let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(help, chunks[next]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_submit();
                    return;
                }
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('c')
                | KeyCode::Char('C') => {
                    self.on_exit();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next(&mut self.store);
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev(&mut self.store);
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status_message = READY_STATUS.to_string();
            }
            _ => {
                if self.form.handle_key(&key, &mut self.store) {
                    self.exit_armed = false;
                    if let Some(control) = self.form.focused() {
                        let label = control.label();
                        if !label.is_empty() {
                            self.status_message = format!("Editing {label}");
                        }
                    }
                }
            }
        }
    }

    fn on_submit(&mut self) {
        match self.store.try_submit() {
            Ok(value) => {
                self.status_message = "Form submitted".to_string();
                self.result = Some(value);
                self.should_quit = true;
            }
            Err(rejected) => {
                self.status_message = format!("{} issue(s) remaining", rejected.issues);
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.store.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status_message =
                "Unsubmitted changes. Press Ctrl+Q again to quit without submitting.".to_string();
            return;
        }
        self.should_quit = true;
        self.result = None;
    }
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}
