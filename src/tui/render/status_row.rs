use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Section;
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

const NAVIGATE_HINTS: &str = "n add  space toggle  d delete  c clear  f filter  ? about  t theme  q quit";
const ABOUT_HINTS: &str = "h home  t theme  q quit";
const INPUT_HINTS: &str = "Enter add  Esc done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref message) = app.error_message {
        Line::from(Span::styled(
            truncate_to_width(&format!(" {}", message), width),
            Style::default().fg(app.theme.red).bg(bg),
        ))
    } else {
        let hint = match (app.mode, app.section) {
            (Mode::Input, _) => Some(INPUT_HINTS),
            _ if !app.ui_config.show_key_hints => None,
            (Mode::Navigate, Section::Home) => Some(NAVIGATE_HINTS),
            (Mode::Navigate, Section::About) => Some(ABOUT_HINTS),
        };
        match hint {
            Some(hint) => Line::from(Span::styled(
                truncate_to_width(&format!(" {}", hint), width),
                Style::default().fg(app.theme.dim).bg(bg),
            )),
            None => Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg))),
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
