//! The interactive dashboard.
//!
//! A single-threaded, full-screen ratatui app. Every key gesture maps to
//! at most one store operation; every successful mutation immediately
//! mirrors the new snapshot to the slot, best-effort.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::error::Result;
use crate::persist;
use crate::store::{Task, TaskStats, TaskStore};

use super::view;

const EVENT_POLL_MS: u64 = 120;

/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    List,
    Input,
}

pub struct AppState {
    store: TaskStore,
    data_dir: PathBuf,
    pub(crate) input: String,
    pub(crate) mode: Mode,
    pub(crate) selected: usize,
    pub(crate) placeholder: String,
    save_warning: Option<String>,
}

impl AppState {
    fn new(store: TaskStore, data_dir: PathBuf, config: &Config) -> Self {
        let mode = if store.is_empty() {
            Mode::Input
        } else {
            Mode::List
        };
        Self {
            store,
            data_dir,
            input: String::new(),
            mode,
            selected: 0,
            placeholder: config.ui.placeholder.clone(),
            save_warning: None,
        }
    }

    pub(crate) fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub(crate) fn stats(&self) -> TaskStats {
        self.store.stats()
    }

    pub(crate) fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    pub(crate) fn save_warning(&self) -> Option<&str> {
        self.save_warning.as_deref()
    }

    fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Mirror the snapshot to the slot; a failure becomes a status-line
    /// warning, never an error.
    fn after_mutation(&mut self) {
        self.save_warning = persist::save_best_effort(&self.data_dir, self.store.tasks());
        self.clamp_selection();
    }

    fn submit_input(&mut self) {
        let added = self.store.add(&self.input).is_some();
        // Enter always resets the form, even when nothing was added.
        self.input.clear();
        if added {
            self.selected = self.store.len() - 1;
            self.after_mutation();
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|task| task.id) {
            self.store.toggle(id);
            self.after_mutation();
        }
    }

    fn remove_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|task| task.id) {
            self.store.remove(id);
            self.after_mutation();
        }
    }
}

pub fn run(store: TaskStore, data_dir: PathBuf, config: &Config) -> Result<()> {
    let mut app = AppState::new(store, data_dir, config);
    run_terminal(&mut app)
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| view::render(frame, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Returns `true` when the app should quit.
fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.mode {
        Mode::Input => handle_input_key(app, key),
        Mode::List => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') => app.remove_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Input;
        }
        _ => {}
    }
    false
}

fn handle_input_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::List;
        }
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.push(ch);
        }
        _ => {}
    }
    false
}
