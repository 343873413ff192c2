use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::MemoryStorage;
use crate::model::UiConfig;
use crate::ops::session::Session;
use crate::tui::app::{Action, App};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// A phrase that only the about section renders
pub const ABOUT_MARKER: &str = "About tally";

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over empty in-memory storage
pub fn empty_app() -> App {
    App::new(Session::open(Box::new(MemoryStorage::new())), UiConfig::default())
}

/// An App with tasks added in order (so the last one is listed first)
pub fn app_with_todos(texts: &[&str]) -> App {
    let mut app = empty_app();
    for text in texts {
        app.dispatch(Action::Add((*text).to_string()));
    }
    app
}
