use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::io::storage::StorageError;
use crate::model::{Filter, Section, TodoId, UiConfig};
use crate::ops::session::Session;

use super::input;
use super::render;
use super::theme::Theme;
use super::view_model::ListView;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add-task input
    Input,
}

/// A user intent, produced by the key handler and applied by [`App::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
    ClearCompleted,
    SetFilter(Filter),
    ShowSection(Section),
    ToggleTheme,
    Quit,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub ui_config: UiConfig,
    pub theme: Theme,
    pub section: Section,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the filtered list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Add-task input buffer
    pub input: String,
    /// Byte offset of the input cursor
    pub input_cursor: usize,
    /// Last storage failure, shown in the status row until the next action
    pub error_message: Option<String>,
}

impl App {
    pub fn new(session: Session, ui_config: UiConfig) -> Self {
        let theme = Theme::for_mode(session.theme(), &ui_config);
        App {
            session,
            ui_config,
            theme,
            section: Section::Home,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            error_message: None,
        }
    }

    /// Snapshot of what the list area shows right now
    pub fn list_view(&self) -> ListView {
        ListView::build(self.session.store())
    }

    /// ID of the task under the cursor, if any
    pub fn selected_id(&self) -> Option<TodoId> {
        self.session
            .filtered()
            .get(self.cursor)
            .map(|t| t.id)
    }

    /// Apply an action to the session, then refresh derived UI state
    pub fn dispatch(&mut self, action: Action) {
        self.error_message = None;
        let result = self.apply(action);
        if let Err(e) = result {
            error!(error = %e, "storage write failed");
            self.error_message = Some(e.to_string());
        }
        self.clamp_cursor();
    }

    fn apply(&mut self, action: Action) -> Result<(), StorageError> {
        match action {
            Action::Add(text) => {
                if self.session.add(&text)?.is_some() {
                    // New tasks land at the top
                    self.cursor = 0;
                }
            }
            Action::Toggle(id) => {
                self.session.toggle(id)?;
            }
            Action::Delete(id) => {
                self.session.delete(id)?;
            }
            Action::ClearCompleted => {
                self.session.clear_completed()?;
            }
            Action::SetFilter(filter) => {
                self.session.set_filter(filter);
                self.cursor = 0;
                self.scroll_offset = 0;
            }
            Action::ShowSection(section) => {
                self.section = section;
                if section == Section::About {
                    self.mode = Mode::Navigate;
                }
            }
            Action::ToggleTheme => {
                let mode = self.session.toggle_theme()?;
                self.theme = Theme::for_mode(mode, &self.ui_config);
            }
            Action::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Keep the cursor inside the filtered list
    pub fn clamp_cursor(&mut self) {
        let len = self.session.filtered().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Clear the add-task input buffer
    pub fn reset_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }
}

/// Run the TUI application
pub fn run(session: Session, ui_config: UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(session, ui_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("tui stopped");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
